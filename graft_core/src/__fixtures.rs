use std::cell::Cell;
use std::rc::Rc;

use rstest::fixture;

use crate::builder::h;
use crate::builder::text;
use crate::*;

pub fn documentation_page(
	properties: &Properties,
	children: &[Node],
	_: &Context<'_>,
) -> GraftResult<Content> {
	let title = properties.get_str("title").unwrap_or_default();
	let page = h("article.documentation")
		.child(h("h1").text(title))
		.append(children.iter().cloned());

	Ok(page.into())
}

pub fn info_box(
	properties: &Properties,
	children: &[Node],
	_: &Context<'_>,
) -> GraftResult<Content> {
	let title = properties.get_str("title").unwrap_or("Info");
	let info = h(".infobox")
		.child(h(".infobox-title").text(title))
		.child(h(".infobox-body").append(children.to_vec()));

	Ok(info.into())
}

pub fn copyright_notice(
	properties: &Properties,
	_: &[Node],
	_: &Context<'_>,
) -> GraftResult<Content> {
	let year = properties
		.get("year")
		.map(ToString::to_string)
		.unwrap_or_default();

	Ok(h("footer.notice").text(format!("© {year}")).into())
}

/// Renders `x-countdown` with `n - 1` until `n` reaches zero.
pub fn countdown(properties: &Properties, _: &[Node], _: &Context<'_>) -> GraftResult<Content> {
	let remaining = properties
		.get("n")
		.and_then(|value| value.to_string().parse::<i32>().ok())
		.unwrap_or(0);
	if remaining == 0 {
		return Ok(span_node("done").into());
	}

	Ok(h("x-countdown").property("n", remaining - 1).into())
}

pub fn documentation_registry() -> Registry {
	Registry::new()
		.with("documentation-page", documentation_page)
		.with("info-box", info_box)
		.with("copyright-notice", copyright_notice)
}

/// A small document with no component tags in it.
pub fn plain_tree() -> Root {
	Root::new([
		Node::Doctype,
		h("main")
			.child(h("h1").text("Title"))
			.child(comment_node("note"))
			.child(
				h("section.body")
					.child(h("p").text("Lorem ipsum..."))
					.child(h("ul").child(h("li").text("one")).child(h("li").text("two"))),
			)
			.into(),
	])
}

pub fn span_node(value: &str) -> Node {
	h("span").text(value).into()
}

pub fn element(selector: &str, children: Vec<Node>) -> Node {
	h(selector).append(children).into()
}

pub fn comment_node(value: &str) -> Node {
	crate::builder::comment(value)
}

pub fn text_node(value: &str) -> Node {
	text(value)
}

/// Tag names in document order.
pub fn collect_tags(tree: &Root) -> Vec<String> {
	fn walk(nodes: &[Node], tags: &mut Vec<String>) {
		for node in nodes {
			if let Node::Element(element) = node {
				tags.push(element.tag_name.clone());
			}
			if let Some(children) = node.children() {
				walk(children, tags);
			}
		}
	}

	let mut tags = Vec::new();
	walk(&tree.children, &mut tags);
	tags
}

/// Drop a tree without recursing once per level.
pub fn dismantle(tree: Root) {
	let mut pending = tree.children;
	while let Some(mut node) = pending.pop() {
		if let Some(children) = node.children_mut() {
			pending.append(children);
		}
	}
}

/// Run `rewrite` with an empty source file and processor.
pub fn run(tree: &mut Root, registry: &Registry) -> GraftResult<()> {
	rewrite(tree, registry, &SourceFile::new(), &Processor::new())
}

/// A component that counts its invocations and renders nothing.
pub fn counting_component(
	calls: &Rc<Cell<usize>>,
) -> impl Fn(&Properties, &[Node], &Context<'_>) -> GraftResult<Content> + 'static {
	let calls = Rc::clone(calls);
	move |_, _, _| {
		calls.set(calls.get() + 1);
		Ok(Content::Empty)
	}
}

#[fixture]
pub fn index_file() -> SourceFile {
	SourceFile::with_path("docs/index.html").with_data("draft", false)
}

#[fixture]
pub fn site_processor() -> Processor {
	Processor::new().with_data("siteName", "graft")
}
