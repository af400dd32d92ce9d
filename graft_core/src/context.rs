use std::path::Path;
use std::path::PathBuf;

use serde_json::Map;
use serde_json::Value;

use crate::Processor;
use crate::Root;

/// The document a tree was built from. The rewriter never reads it; it is
/// handed to components through [`Context::file`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceFile {
	/// Path of the source document, when there is one.
	pub path: Option<PathBuf>,
	/// Per-document values set by earlier pipeline stages (front matter,
	/// computed metadata and so on).
	pub data: Map<String, Value>,
}

impl SourceFile {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_path(path: impl Into<PathBuf>) -> Self {
		Self {
			path: Some(path.into()),
			data: Map::new(),
		}
	}

	#[must_use]
	pub fn with_data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.data.insert(key.into(), value.into());
		self
	}

	pub fn path(&self) -> Option<&Path> {
		self.path.as_deref()
	}

	pub fn data(&self, key: &str) -> Option<&Value> {
		self.data.get(key)
	}
}

/// Read-only view handed to every component invocation.
///
/// `tree` is the whole tree as it stands when the component runs, including
/// the element being replaced.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
	pub tree: &'a Root,
	pub file: &'a SourceFile,
	pub processor: &'a Processor,
}
