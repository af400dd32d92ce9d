use serde_json::Map;
use serde_json::Value;

use crate::GraftResult;
use crate::Registry;
use crate::Root;
use crate::SourceFile;
use crate::rewrite::RewriteOptions;
use crate::rewrite::rewrite_with_options;

/// A stage in a [`Processor`] pipeline.
pub trait Plugin {
	/// Name used in logs.
	fn name(&self) -> &str {
		std::any::type_name::<Self>()
	}

	fn run(&self, tree: &mut Root, file: &SourceFile, processor: &Processor) -> GraftResult<()>;
}

impl<F> Plugin for F
where
	F: Fn(&mut Root, &SourceFile, &Processor) -> GraftResult<()>,
{
	fn run(&self, tree: &mut Root, file: &SourceFile, processor: &Processor) -> GraftResult<()> {
		self(tree, file, processor)
	}
}

/// An ordered list of plugins plus data shared by all of them.
///
/// Components see the processor through
/// [`Context::processor`](crate::Context::processor), which lets them read
/// pipeline-wide settings.
#[derive(Default)]
pub struct Processor {
	plugins: Vec<Box<dyn Plugin>>,
	data: Map<String, Value>,
}

impl Processor {
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with_plugin(mut self, plugin: impl Plugin + 'static) -> Self {
		self.add_plugin(plugin);
		self
	}

	pub fn add_plugin(&mut self, plugin: impl Plugin + 'static) -> &mut Self {
		self.plugins.push(Box::new(plugin));
		self
	}

	#[must_use]
	pub fn with_data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.set_data(key, value);
		self
	}

	pub fn set_data(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
		self.data.insert(key.into(), value.into());
		self
	}

	pub fn data(&self, key: &str) -> Option<&Value> {
		self.data.get(key)
	}

	pub fn plugin_names(&self) -> Vec<&str> {
		self.plugins.iter().map(|plugin| plugin.name()).collect()
	}

	/// Run every plugin over `tree` in registration order, stopping at the
	/// first error.
	pub fn run(&self, tree: &mut Root, file: &SourceFile) -> GraftResult<()> {
		for plugin in &self.plugins {
			tracing::debug!(plugin = plugin.name(), "running plugin");
			plugin.run(tree, file, self)?;
		}

		Ok(())
	}
}

impl std::fmt::Debug for Processor {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Processor")
			.field("plugins", &self.plugin_names())
			.field("data", &self.data)
			.finish()
	}
}

/// Pipeline stage that expands registered components.
///
/// ```rust
/// use graft_core::Components;
/// use graft_core::Node;
/// use graft_core::Processor;
/// use graft_core::Registry;
/// use graft_core::SourceFile;
/// use graft_core::builder::h;
/// use graft_core::builder::root;
///
/// let registry = Registry::new().with("shout", |_, children, _| {
/// 	Ok(h("strong").append(children.to_vec()).into())
/// });
/// let processor = Processor::new().with_plugin(Components::new(registry));
///
/// let mut tree = root([Node::from(h("shout").text("hey"))]);
/// processor.run(&mut tree, &SourceFile::new()).unwrap();
///
/// assert_eq!(tree, root([Node::from(h("strong").text("hey"))]));
/// ```
#[derive(Debug)]
pub struct Components {
	registry: Registry,
	options: RewriteOptions,
}

impl Components {
	pub fn new(registry: Registry) -> Self {
		Self {
			registry,
			options: RewriteOptions::default(),
		}
	}

	#[must_use]
	pub fn with_options(mut self, options: RewriteOptions) -> Self {
		self.options = options;
		self
	}

	pub fn registry(&self) -> &Registry {
		&self.registry
	}
}

impl Plugin for Components {
	fn name(&self) -> &str {
		"components"
	}

	fn run(&self, tree: &mut Root, file: &SourceFile, processor: &Processor) -> GraftResult<()> {
		rewrite_with_options(tree, &self.registry, file, processor, &self.options)
	}
}
