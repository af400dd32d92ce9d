use serde::Deserialize;

use crate::Context;
use crate::GraftError;
use crate::GraftResult;
use crate::Node;
use crate::Processor;
use crate::Registry;
use crate::Root;
use crate::SourceFile;
use crate::content::normalize;

/// Options for a single [`rewrite_with_options`] call.
///
/// ```toml
/// [rewrite]
/// max_replacements = 10000
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct RewriteOptions {
	/// Upper bound on replacement steps in one call. `None` (the default)
	/// never stops, so a component that renders its own tag again loops
	/// forever.
	#[serde(default)]
	pub max_replacements: Option<usize>,
}

impl RewriteOptions {
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with_max_replacements(mut self, limit: usize) -> Self {
		self.max_replacements = Some(limit);
		self
	}
}

/// Replace every element whose tag has a registered component with the
/// content that component renders.
///
/// The walk is depth-first and pre-order. After a replacement the walk stays
/// at the same index, so the first inserted node is visited next and any
/// registered tag inside the new content is expanded in turn. The replaced
/// element is gone from the tree and is never descended into.
///
/// The position is kept in an explicit index path rather than on the call
/// stack, so deeply nested trees and long chains of components rendering
/// other components do not grow the stack.
///
/// Errors returned by a component are propagated unchanged. Invalid content
/// fails with [`GraftError::ContentShape`] and leaves the tree as it was
/// before that replacement.
pub fn rewrite(
	tree: &mut Root,
	registry: &Registry,
	file: &SourceFile,
	processor: &Processor,
) -> GraftResult<()> {
	rewrite_with_options(tree, registry, file, processor, &RewriteOptions::default())
}

/// Like [`rewrite`], with a configurable replacement limit.
#[tracing::instrument(level = "debug", skip_all, fields(components = registry.len()))]
pub fn rewrite_with_options(
	tree: &mut Root,
	registry: &Registry,
	file: &SourceFile,
	processor: &Processor,
	options: &RewriteOptions,
) -> GraftResult<()> {
	if registry.is_empty() {
		return Ok(());
	}

	// Index of the current node within each level of the path from the root.
	let mut cursor: Vec<usize> = vec![0];
	let mut replacements = 0_usize;

	while let Some(&index) = cursor.last() {
		let depth = cursor.len() - 1;

		let step = {
			let Some(siblings) = children_at(tree, &cursor[..depth]) else {
				break;
			};

			match siblings.get(index) {
				None => Step::Ascend,
				Some(Node::Element(element)) => {
					let Some(component) = registry.get(&element.tag_name) else {
						cursor.push(0);
						continue;
					};

					if let Some(limit) = options
						.max_replacements
						.filter(|&limit| replacements >= limit)
					{
						return Err(GraftError::ReplacementLimit {
							tag: element.tag_name.clone(),
							limit,
						});
					}

					let context = Context {
						tree: &*tree,
						file,
						processor,
					};
					let content =
						component.render(&element.properties, &element.children, &context)?;
					let nodes = normalize(&element.tag_name, content)?;

					tracing::trace!(
						tag = %element.tag_name,
						index,
						depth,
						inserted = nodes.len(),
						"replaced component"
					);

					Step::Replace(nodes)
				}
				Some(Node::Root(_)) => Step::Descend,
				Some(_) => Step::Advance,
			}
		};

		match step {
			Step::Replace(nodes) => {
				let Some(siblings) = children_at_mut(tree, &cursor[..depth]) else {
					break;
				};
				drop(siblings.splice(index..=index, nodes));
				replacements += 1;
			}
			Step::Descend => cursor.push(0),
			Step::Advance => advance(&mut cursor),
			Step::Ascend => {
				cursor.pop();
				advance(&mut cursor);
			}
		}
	}

	tracing::debug!(replacements, "rewrite complete");

	Ok(())
}

enum Step {
	/// Splice these nodes in place of the current one and stay at the same
	/// index.
	Replace(Vec<Node>),
	Descend,
	Advance,
	/// The current level is exhausted.
	Ascend,
}

fn advance(cursor: &mut [usize]) {
	if let Some(index) = cursor.last_mut() {
		*index += 1;
	}
}

/// Resolve the sibling list at `path` by walking down from the root.
///
/// Each step resolves its path again instead of holding on to a parent
/// borrow, so the walk costs `O(depth)` per visited node. Memory stays bounded
/// by the cursor, whatever the nesting depth.
fn children_at<'a>(root: &'a Root, path: &[usize]) -> Option<&'a [Node]> {
	let mut children = root.children.as_slice();
	for &index in path {
		children = children.get(index)?.children()?;
	}

	Some(children)
}

fn children_at_mut<'a>(root: &'a mut Root, path: &[usize]) -> Option<&'a mut Vec<Node>> {
	let mut children = &mut root.children;
	for &index in path {
		children = children.get_mut(index)?.children_mut()?;
	}

	Some(children)
}
