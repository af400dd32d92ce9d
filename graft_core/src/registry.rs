use std::collections::HashMap;

use crate::Content;
use crate::Context;
use crate::GraftResult;
use crate::Node;
use crate::Properties;

/// A component renders the replacement for an element whose tag it is
/// registered under.
///
/// Closures with the signature
/// `Fn(&Properties, &[Node], &Context<'_>) -> GraftResult<Content>` implement
/// this trait, so most components never name it. Implement it directly for
/// components that carry their own state.
pub trait Component {
	fn render(
		&self,
		properties: &Properties,
		children: &[Node],
		context: &Context<'_>,
	) -> GraftResult<Content>;
}

impl<F> Component for F
where
	F: Fn(&Properties, &[Node], &Context<'_>) -> GraftResult<Content>,
{
	fn render(
		&self,
		properties: &Properties,
		children: &[Node],
		context: &Context<'_>,
	) -> GraftResult<Content> {
		self(properties, children, context)
	}
}

/// Map of tag name to component.
///
/// Registering the same tag twice keeps the last component.
#[derive(Default)]
pub struct Registry {
	components: HashMap<String, Box<dyn Component>>,
}

impl Registry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a closure or function as the component for `tag`.
	pub fn register<F>(&mut self, tag: impl Into<String>, component: F) -> &mut Self
	where
		F: Fn(&Properties, &[Node], &Context<'_>) -> GraftResult<Content> + 'static,
	{
		self.register_component(tag, component)
	}

	/// Register any [`Component`] implementation for `tag`.
	pub fn register_component<C>(&mut self, tag: impl Into<String>, component: C) -> &mut Self
	where
		C: Component + 'static,
	{
		let tag = tag.into();
		if self
			.components
			.insert(tag.clone(), Box::new(component))
			.is_some()
		{
			tracing::debug!(tag = %tag, "replaced previously registered component");
		}

		self
	}

	/// Builder form of [`Registry::register`].
	#[must_use]
	pub fn with<F>(mut self, tag: impl Into<String>, component: F) -> Self
	where
		F: Fn(&Properties, &[Node], &Context<'_>) -> GraftResult<Content> + 'static,
	{
		self.register(tag, component);
		self
	}

	pub fn get(&self, tag: &str) -> Option<&dyn Component> {
		let component = self.components.get(tag)?;
		Some(component.as_ref())
	}

	pub fn contains(&self, tag: &str) -> bool {
		self.components.contains_key(tag)
	}

	pub fn remove(&mut self, tag: &str) -> bool {
		self.components.remove(tag).is_some()
	}

	pub fn len(&self) -> usize {
		self.components.len()
	}

	pub fn is_empty(&self) -> bool {
		self.components.is_empty()
	}

	/// Registered tag names in sorted order.
	pub fn tags(&self) -> Vec<&str> {
		let mut tags: Vec<&str> = self.components.keys().map(String::as_str).collect();
		tags.sort_unstable();
		tags
	}
}

impl std::fmt::Debug for Registry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Registry")
			.field("components", &self.tags())
			.finish()
	}
}
