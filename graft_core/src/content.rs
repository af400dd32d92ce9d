use serde::Deserialize;
use serde_json::Value;

use crate::Comment;
use crate::Element;
use crate::GraftError;
use crate::GraftResult;
use crate::Node;
use crate::Text;

/// What a component returns in place of the element it matched.
///
/// Typed variants are the normal case. [`Content::Value`] accepts untyped
/// hast-shaped JSON for components that build their output from data; it is
/// checked against the same rules as typed nodes when the rewriter splices it
/// into the tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
	/// Remove the element without a replacement.
	#[default]
	Empty,
	Node(Node),
	Nodes(Vec<Node>),
	Value(Value),
}

impl From<Node> for Content {
	fn from(node: Node) -> Self {
		Self::Node(node)
	}
}

impl From<Element> for Content {
	fn from(element: Element) -> Self {
		Self::Node(Node::Element(element))
	}
}

impl From<Text> for Content {
	fn from(text: Text) -> Self {
		Self::Node(Node::Text(text))
	}
}

impl From<Comment> for Content {
	fn from(comment: Comment) -> Self {
		Self::Node(Node::Comment(comment))
	}
}

impl From<Vec<Node>> for Content {
	fn from(nodes: Vec<Node>) -> Self {
		Self::Nodes(nodes)
	}
}

impl From<Vec<Element>> for Content {
	fn from(elements: Vec<Element>) -> Self {
		Self::Nodes(elements.into_iter().map(Node::Element).collect())
	}
}

impl From<Value> for Content {
	fn from(value: Value) -> Self {
		Self::Value(value)
	}
}

impl From<()> for Content {
	fn from((): ()) -> Self {
		Self::Empty
	}
}

impl<T> From<Option<T>> for Content
where
	T: Into<Content>,
{
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Empty, Into::into)
	}
}

/// Normalize component output into the nodes to splice in place of `tag`.
///
/// Every item must be element content. When any item is not, nothing is
/// returned and the error carries the whole normalized sequence.
pub(crate) fn normalize(tag: &str, content: Content) -> GraftResult<Vec<Node>> {
	let items: Vec<Result<Node, Value>> = match content {
		Content::Empty | Content::Value(Value::Null) => Vec::new(),
		Content::Node(node) => vec![classify_node(node)],
		Content::Nodes(nodes) => nodes.into_iter().map(classify_node).collect(),
		Content::Value(Value::Array(values)) => values.into_iter().map(classify_value).collect(),
		Content::Value(value) => vec![classify_value(value)],
	};

	if items.iter().all(Result::is_ok) {
		return Ok(items.into_iter().flatten().collect());
	}

	let content = items
		.into_iter()
		.map(|item| {
			match item {
				Ok(node) => serde_json::to_value(node).unwrap_or(Value::Null),
				Err(value) => value,
			}
		})
		.collect();

	Err(GraftError::ContentShape {
		tag: tag.to_string(),
		content: Value::Array(content),
	})
}

fn classify_node(node: Node) -> Result<Node, Value> {
	if node.is_element_content() {
		Ok(node)
	} else {
		Err(serde_json::to_value(node).unwrap_or(Value::Null))
	}
}

fn classify_value(value: Value) -> Result<Node, Value> {
	match Node::deserialize(&value) {
		Ok(node) if node.is_element_content() => Ok(node),
		_ => Err(value),
	}
}
