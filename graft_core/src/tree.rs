use std::collections::BTreeMap;

use derive_more::Deref;
use derive_more::DerefMut;
use serde::Deserialize;
use serde::Serialize;

/// The root of a syntax tree. This is what [`rewrite`](crate::rewrite)
/// receives and mutates in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Root {
	#[serde(default)]
	pub children: Vec<Node>,
}

impl Root {
	pub fn new(children: impl IntoIterator<Item = Node>) -> Self {
		Self {
			children: children.into_iter().collect(),
		}
	}
}

/// A node in the tree. Serialized with a `type` discriminant so trees stored
/// as hast-shaped JSON can be loaded directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
	Root(Root),
	Element(Element),
	Text(Text),
	Comment(Comment),
	Doctype,
}

impl Node {
	/// Child nodes for parent kinds (`Root` and `Element`).
	pub fn children(&self) -> Option<&[Node]> {
		match self {
			Self::Root(root) => Some(&root.children),
			Self::Element(element) => Some(&element.children),
			_ => None,
		}
	}

	pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
		match self {
			Self::Root(root) => Some(&mut root.children),
			Self::Element(element) => Some(&mut element.children),
			_ => None,
		}
	}

	pub fn as_element(&self) -> Option<&Element> {
		match self {
			Self::Element(element) => Some(element),
			_ => None,
		}
	}

	pub fn is_element(&self) -> bool {
		matches!(self, Self::Element(_))
	}

	/// Whether this node may appear among the children of an element. Only
	/// elements, text and comments qualify; a `Root` or `Doctype` never does.
	pub fn is_element_content(&self) -> bool {
		matches!(self, Self::Element(_) | Self::Text(_) | Self::Comment(_))
	}
}

/// A tagged element with properties and owned children.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
	pub tag_name: String,
	#[serde(default)]
	pub properties: Properties,
	#[serde(default)]
	pub children: Vec<Node>,
}

impl Element {
	pub fn new(tag_name: impl Into<String>) -> Self {
		Self {
			tag_name: tag_name.into(),
			properties: Properties::default(),
			children: Vec::new(),
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
	#[serde(default)]
	pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
	#[serde(default)]
	pub value: String,
}

/// Element properties keyed by property name, kept in sorted order so trees
/// compare and print deterministically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Deref, DerefMut)]
#[serde(transparent)]
pub struct Properties(BTreeMap<String, PropertyValue>);

impl Properties {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the property as a string slice when it holds a string.
	pub fn get_str(&self, name: &str) -> Option<&str> {
		match self.get(name)? {
			PropertyValue::String(value) => Some(value.as_str()),
			_ => None,
		}
	}
}

impl<K, V> FromIterator<(K, V)> for Properties
where
	K: Into<String>,
	V: Into<PropertyValue>,
{
	fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
		Self(
			iter.into_iter()
				.map(|(key, value)| (key.into(), value.into()))
				.collect(),
		)
	}
}

/// The value of a single property. The rewriter never interprets these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum PropertyValue {
	/// An explicitly unset property, `null` in hast JSON.
	Null,
	Boolean(bool),
	Number(OrderedFloat),
	String(String),
	/// Space or comma separated values such as `className` or `coords`.
	List(Vec<ListItem>),
}

impl std::fmt::Display for PropertyValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Null => Ok(()),
			Self::Boolean(value) => write!(f, "{value}"),
			Self::Number(value) => write!(f, "{value}"),
			Self::String(value) => write!(f, "{value}"),
			Self::List(values) => {
				for (position, value) in values.iter().enumerate() {
					if position > 0 {
						f.write_str(" ")?;
					}
					write!(f, "{value}")?;
				}
				Ok(())
			}
		}
	}
}

/// One entry of a [`PropertyValue::List`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListItem {
	String(String),
	Number(OrderedFloat),
}

impl std::fmt::Display for ListItem {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::String(value) => write!(f, "{value}"),
			Self::Number(value) => write!(f, "{value}"),
		}
	}
}

impl From<&str> for ListItem {
	fn from(value: &str) -> Self {
		Self::String(value.to_string())
	}
}

impl From<String> for ListItem {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl From<f64> for ListItem {
	fn from(value: f64) -> Self {
		Self::Number(OrderedFloat(value))
	}
}

impl From<i32> for ListItem {
	fn from(value: i32) -> Self {
		Self::Number(OrderedFloat(f64::from(value)))
	}
}

impl From<bool> for PropertyValue {
	fn from(value: bool) -> Self {
		Self::Boolean(value)
	}
}

impl From<f64> for PropertyValue {
	fn from(value: f64) -> Self {
		Self::Number(OrderedFloat(value))
	}
}

impl From<i32> for PropertyValue {
	fn from(value: i32) -> Self {
		Self::Number(OrderedFloat(f64::from(value)))
	}
}

impl From<&str> for PropertyValue {
	fn from(value: &str) -> Self {
		Self::String(value.to_string())
	}
}

impl From<String> for PropertyValue {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl<T: Into<ListItem>> From<Vec<T>> for PropertyValue {
	fn from(values: Vec<T>) -> Self {
		Self::List(values.into_iter().map(Into::into).collect())
	}
}

/// A float wrapper that compares approximately, so `PropertyValue` can derive
/// `PartialEq` cleanly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderedFloat(pub f64);

impl PartialEq for OrderedFloat {
	fn eq(&self, other: &Self) -> bool {
		float_cmp::approx_eq!(f64, self.0, other.0)
	}
}

impl std::fmt::Display for OrderedFloat {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<Element> for Node {
	fn from(element: Element) -> Self {
		Self::Element(element)
	}
}

impl From<Text> for Node {
	fn from(text: Text) -> Self {
		Self::Text(text)
	}
}

impl From<Comment> for Node {
	fn from(comment: Comment) -> Self {
		Self::Comment(comment)
	}
}

impl From<Root> for Node {
	fn from(root: Root) -> Self {
		Self::Root(root)
	}
}
