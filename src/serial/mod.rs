//! HTML serializer.
//!
//! Serializes a subtree into an HTML5 string, depth-first and read-only.
//! Exact output contract:
//!
//! - A doctype line (`<!DOCTYPE html>` + `\n`) is emitted only when the node
//!   the render call targets is tagged with the root tag (`html`). The check
//!   fires once per call, never for descendants.
//! - Void elements render as `<tag attrs />` — self-closing, with a space
//!   before the slash. Their children are never serialized, even if present.
//! - Container elements render as `<tag attrs>children</tag>` with no added
//!   whitespace between children.
//! - Attributes render as ` name="value"` in insertion order; values are
//!   always double-quoted and emitted verbatim (callers pre-escape).
//!   Boolean-style attributes carry the empty string: `async=""`.
//! - Text nodes are emitted verbatim — no HTML escaping.
//!
//! Rendering never fails: all validation happened at construction time, so a
//! fully built tree is always renderable.

use crate::rules;
use crate::tree::{NodeId, NodeKind, Tree};

/// Serializes the subtree rooted at `id` to an HTML string.
///
/// # Examples
///
/// ```
/// use tagwright::{serial::render, Tree};
///
/// let mut tree = Tree::new();
/// let input = tree.create("input").unwrap();
/// tree.cursor(input).attr("accept", "image/*").unwrap();
/// assert_eq!(render(&tree, input), r#"<input accept="image/*" />"#);
/// ```
#[must_use]
pub fn render(tree: &Tree, id: NodeId) -> String {
    let mut output = String::new();
    if let Some(tag) = tree.tag(id) {
        if rules::is_root_tag(tag) {
            output.push_str(rules::DOCTYPE);
            output.push('\n');
        }
    }
    render_node(tree, id, &mut output);
    output
}

fn render_node(tree: &Tree, id: NodeId, out: &mut String) {
    match &tree.node(id).kind {
        NodeKind::Element { tag, attributes } => {
            out.push('<');
            out.push_str(tag);

            for attr in attributes {
                out.push(' ');
                out.push_str(&attr.name);
                out.push_str("=\"");
                out.push_str(&attr.value);
                out.push('"');
            }

            // Void elements self-close and never serialize children.
            if rules::is_void(tag) {
                out.push_str(" />");
                return;
            }

            out.push('>');
            for child in tree.children(id) {
                render_node(tree, child, out);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
        NodeKind::Text { content } => {
            out.push_str(content);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_container_element() {
        let mut tree = Tree::new();
        let p = tree.create("p").unwrap();
        assert_eq!(render(&tree, p), "<p></p>");
    }

    #[test]
    fn test_void_element_self_closes() {
        let mut tree = Tree::new();
        let br = tree.create("br").unwrap();
        assert_eq!(render(&tree, br), "<br />");
    }

    #[test]
    fn test_void_element_with_attrs() {
        let mut tree = Tree::new();
        let img = tree.create("img").unwrap();
        tree.cursor(img)
            .attr("src", "x.png")
            .unwrap()
            .attr("alt", "X")
            .unwrap();
        assert_eq!(render(&tree, img), r#"<img src="x.png" alt="X" />"#);
    }

    #[test]
    fn test_void_element_children_suppressed() {
        let mut tree = Tree::new();
        let input = tree.create("input").unwrap();
        let stray = tree.text("stray");
        tree.append_child(input, stray);
        assert_eq!(render(&tree, input), "<input />");
    }

    #[test]
    fn test_attribute_order_is_insertion_order() {
        let mut tree = Tree::new();
        let a = tree.create("a").unwrap();
        tree.cursor(a)
            .attr("href", "/x")
            .unwrap()
            .attr("title", "X")
            .unwrap()
            // Overwriting href must not move it behind title.
            .attr("href", "/y")
            .unwrap();
        assert_eq!(render(&tree, a), r#"<a href="/y" title="X"></a>"#);
    }

    #[test]
    fn test_boolean_attribute_renders_empty_value() {
        let mut tree = Tree::new();
        let script = tree.create("script").unwrap();
        tree.cursor(script).flag("async").unwrap();
        assert_eq!(render(&tree, script), r#"<script async=""></script>"#);
    }

    #[test]
    fn test_doctype_for_root_tagged_target() {
        let mut tree = Tree::new();
        let html = tree.create("html").unwrap();
        let out = render(&tree, html);
        assert_eq!(out, "<!DOCTYPE html>\n<html></html>");
        assert_eq!(out.matches("<!DOCTYPE").count(), 1);
    }

    #[test]
    fn test_no_doctype_for_non_root_target() {
        let mut tree = Tree::new();
        let body = tree.create("body").unwrap();
        assert_eq!(render(&tree, body), "<body></body>");
    }

    #[test]
    fn test_doctype_fires_even_for_parented_html_node() {
        // Root detection is by tag identity, not parentage.
        let mut tree = Tree::new();
        let div = tree.create("div").unwrap();
        let html = tree.create("html").unwrap();
        tree.append_child(div, html);
        assert!(render(&tree, html).starts_with("<!DOCTYPE html>\n"));
    }

    #[test]
    fn test_nested_html_descendant_adds_no_extra_doctype() {
        let mut tree = Tree::new();
        let html = tree.create("html").unwrap();
        let body = tree.create("body").unwrap();
        let inner = tree.create("html").unwrap();
        tree.append_child(html, body);
        tree.append_child(body, inner);
        let out = tree.render(html);
        assert_eq!(out.matches("<!DOCTYPE").count(), 1);
    }

    #[test]
    fn test_text_emitted_verbatim() {
        let mut tree = Tree::new();
        let p = tree.create("p").unwrap();
        tree.cursor(p).text("a < b &amp; c");
        assert_eq!(render(&tree, p), "<p>a < b &amp; c</p>");
    }

    #[test]
    fn test_children_in_order_no_added_whitespace() {
        let mut tree = Tree::new();
        let ul = tree.create("ul").unwrap();
        for label in ["one", "two", "three"] {
            let li = tree.create("li").unwrap();
            let text = tree.text(label);
            tree.append_child(li, text);
            tree.append_child(ul, li);
        }
        assert_eq!(
            render(&tree, ul),
            "<ul><li>one</li><li>two</li><li>three</li></ul>"
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut tree = Tree::new();
        let html = tree.create("html").unwrap();
        tree.cursor(html)
            .element("body")
            .unwrap()
            .element("p")
            .unwrap()
            .text("hi");
        assert_eq!(tree.render(html), tree.render(html));
    }
}
