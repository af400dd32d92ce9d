//! `graft_core` expands custom components inside an html syntax tree. Each
//! element whose tag name is registered as a component is replaced by the
//! content that component renders, and the walk carries on into the new
//! content so components can render other components.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Parsed tree (owned by the caller)
//!   → Processor (runs plugins in order)
//!   → Components plugin (wraps a Registry)
//!   → rewrite (walks the tree, renders, validates, splices)
//!   → Mutated tree (handed back to the caller for serialization)
//! ```
//!
//! Parsing and serializing text are left to the host.
//!
//! ## Modules
//!
//! - [`builder`] — `h("tag.class#id")` and friends for building nodes inside
//!   components.
//! - [`config`] — Loading [`RewriteOptions`] from `graft.toml`.
//!
//! ## Key Types
//!
//! - [`Root`], [`Node`], [`Element`] — The tree being rewritten.
//! - [`Registry`] — Tag name to [`Component`] map.
//! - [`Content`] — What a component returns.
//! - [`Context`] — Read-only view of the tree, [`SourceFile`] and
//!   [`Processor`] passed to every component.
//! - [`GraftError`] — Errors raised by the rewriter and by components.
//!
//! ## Quick Start
//!
//! ```rust
//! use graft_core::Node;
//! use graft_core::Processor;
//! use graft_core::Registry;
//! use graft_core::SourceFile;
//! use graft_core::builder::h;
//! use graft_core::builder::root;
//! use graft_core::rewrite;
//!
//! let registry = Registry::new()
//! 	.with("copyright-notice", |properties, _, _| {
//! 		let year = properties.get_str("year").unwrap_or("2020");
//! 		Ok(h("footer.notice").text(format!("© {year}")).into())
//! 	});
//!
//! let mut tree = root([Node::from(h("copyright-notice").property("year", "2024"))]);
//! rewrite(&mut tree, &registry, &SourceFile::new(), &Processor::new())?;
//!
//! assert_eq!(tree, root([Node::from(h("footer.notice").text("© 2024"))]));
//! # Ok::<(), graft_core::GraftError>(())
//! ```

pub use config::*;
pub use content::*;
pub use context::*;
pub use error::*;
pub use processor::*;
pub use registry::*;
pub use rewrite::*;
pub use tree::*;

pub mod builder;
pub mod config;
mod content;
mod context;
#[allow(unused_assignments)]
mod error;
mod processor;
mod registry;
mod rewrite;
mod tree;

#[cfg(test)]
mod __fixtures;
