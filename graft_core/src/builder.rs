//! Helpers for building trees by hand, mostly from inside components.
//!
//! ```rust
//! use graft_core::builder::h;
//! use graft_core::builder::text;
//!
//! let notice = h("footer.notice#copyright").child(text("© 2020"));
//! assert_eq!(notice.tag_name, "footer");
//! assert_eq!(notice.properties.get_str("id"), Some("copyright"));
//! ```

use crate::Comment;
use crate::Element;
use crate::Node;
use crate::PropertyValue;
use crate::Root;
use crate::Text;

const CLASS_NAME: &str = "className";
const DEFAULT_TAG: &str = "div";

/// Build an element from a `tag.class#id` selector. The tag defaults to
/// `div`, classes accumulate in `className` and the last `#id` wins.
pub fn h(selector: &str) -> Element {
	let mut tag_name = String::new();
	let mut classes: Vec<String> = Vec::new();
	let mut id: Option<String> = None;

	let mut segment = Segment::Tag;
	let mut buffer = String::new();

	for ch in selector.chars() {
		match ch {
			'.' | '#' => {
				segment.flush(&mut buffer, &mut tag_name, &mut classes, &mut id);
				segment = if ch == '.' { Segment::Class } else { Segment::Id };
			}
			_ => buffer.push(ch),
		}
	}
	segment.flush(&mut buffer, &mut tag_name, &mut classes, &mut id);

	if tag_name.is_empty() {
		tag_name.push_str(DEFAULT_TAG);
	}

	let mut element = Element::new(tag_name);
	if !classes.is_empty() {
		element
			.properties
			.insert(CLASS_NAME.to_string(), PropertyValue::from(classes));
	}
	if let Some(id) = id {
		element
			.properties
			.insert("id".to_string(), PropertyValue::String(id));
	}

	element
}

#[derive(Clone, Copy)]
enum Segment {
	Tag,
	Class,
	Id,
}

impl Segment {
	fn flush(
		self,
		buffer: &mut String,
		tag_name: &mut String,
		classes: &mut Vec<String>,
		id: &mut Option<String>,
	) {
		let value = std::mem::take(buffer);
		if value.is_empty() {
			return;
		}

		match self {
			Self::Tag => *tag_name = value,
			Self::Class => classes.push(value),
			Self::Id => *id = Some(value),
		}
	}
}

pub fn text(value: impl Into<String>) -> Node {
	Node::Text(Text {
		value: value.into(),
	})
}

pub fn comment(value: impl Into<String>) -> Node {
	Node::Comment(Comment {
		value: value.into(),
	})
}

pub fn root(children: impl IntoIterator<Item = Node>) -> Root {
	Root::new(children)
}

impl Element {
	#[must_use]
	pub fn property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
		self.properties.insert(name.into(), value.into());
		self
	}

	/// Append a class to `className`, converting a plain string value into a
	/// list first.
	#[must_use]
	pub fn class(mut self, name: impl Into<String>) -> Self {
		let name = name.into();
		let entry = self
			.properties
			.entry(CLASS_NAME.to_string())
			.or_insert_with(|| PropertyValue::List(Vec::new()));

		match entry {
			PropertyValue::List(values) => values.push(name.into()),
			other => {
				let mut values: Vec<String> =
					other.to_string().split_whitespace().map(ToString::to_string).collect();
				values.push(name);
				*other = PropertyValue::from(values);
			}
		}

		self
	}

	#[must_use]
	pub fn child(mut self, node: impl Into<Node>) -> Self {
		self.children.push(node.into());
		self
	}

	#[must_use]
	pub fn append(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
		self.children.extend(nodes);
		self
	}

	#[must_use]
	pub fn text(self, value: impl Into<String>) -> Self {
		self.child(text(value))
	}
}
