//! # tagwright
//!
//! A programmatic HTML5 document builder: assemble a tree of elements and
//! attributes through chained calls, then serialize it to spec-correct
//! markup. Every tag and attribute/element combination is checked against
//! static HTML5 rule tables at construction time, so typos and invalid
//! markup fail immediately instead of surfacing in the output.
//!
//! Strictly one-directional: build, then serialize. There is no parser.
//!
//! ## Quick Start
//!
//! ```
//! use tagwright::Tree;
//!
//! let mut tree = Tree::new();
//! let root = tree.create("html").unwrap();
//! tree.cursor(root)
//!     .element("body")
//!     .unwrap()
//!     .element("p")
//!     .unwrap()
//!     .attr("class", "intro")
//!     .unwrap()
//!     .text("Hello, world!");
//!
//! assert_eq!(
//!     tree.render(root),
//!     "<!DOCTYPE html>\n<html><body><p class=\"intro\">Hello, world!</p></body></html>"
//! );
//! ```
//!
//! ## Templates
//!
//! Reusable fragments are registered on the tree and invoked by name — either
//! through [`Cursor::template`](builder::Cursor::template) or dynamically via
//! [`Cursor::call`](builder::Cursor::call) with the reserved `tpl_` prefix:
//!
//! ```
//! use tagwright::{Arg, Tree};
//!
//! let mut tree = Tree::new();
//! tree.register("link", |tree, _ctx, args| {
//!     let [Arg::Text(url), Arg::Text(title)] = args else {
//!         unreachable!("link template takes (url, title)");
//!     };
//!     let a = tree.create("a")?;
//!     tree.cursor(a)
//!         .attr("href", url.as_str())?
//!         .attr("_title", title.as_str())?
//!         .text(title.as_str());
//!     Ok(Some(a))
//! });
//!
//! let li = tree.create("li").unwrap();
//! tree.cursor(li)
//!     .call("tpl_link", &["/docs".into(), "Docs".into()])
//!     .unwrap();
//! assert_eq!(
//!     tree.render(li),
//!     "<li><a href=\"/docs\" title=\"Docs\">Docs</a></li>"
//! );
//! ```

pub mod builder;
pub mod error;
pub mod rules;
pub mod serial;
pub mod template;
pub mod tree;

// Re-export primary types at the crate root for convenience.
pub use builder::{Arg, Cursor, Op};
pub use error::BuildError;
pub use tree::{Attribute, NodeId, NodeKind, Tree};
