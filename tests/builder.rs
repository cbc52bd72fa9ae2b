//! End-to-end document construction through the fluent and dynamic APIs.
#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use tagwright::{BuildError, Tree};

#[test]
fn full_page_via_fluent_chaining() {
    let mut tree = Tree::new();
    let html = tree.create("html").unwrap();
    tree.cursor(html)
        .attr("lang", "en")
        .unwrap()
        .element("head")
        .unwrap()
        .element("title")
        .unwrap()
        .text("Greeting")
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .element("body")
        .unwrap()
        .element("h1")
        .unwrap()
        .text("Hello");

    assert_eq!(
        tree.render(html),
        "<!DOCTYPE html>\n\
         <html lang=\"en\"><head><title>Greeting</title></head>\
         <body><h1>Hello</h1></body></html>"
    );
}

#[test]
fn full_page_via_dynamic_calls() {
    // The same document built through the dynamic entry point only.
    let mut tree = Tree::new();
    let html = tree.create("html").unwrap();
    tree.cursor(html)
        .call("lang", &["en".into()])
        .unwrap()
        .call("head", &[])
        .unwrap()
        .call("title", &["Greeting".into()])
        .unwrap()
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .call("body", &[])
        .unwrap()
        .call("h1", &["Hello".into()])
        .unwrap();

    assert_eq!(
        tree.render(html),
        "<!DOCTYPE html>\n\
         <html lang=\"en\"><head><title>Greeting</title></head>\
         <body><h1>Hello</h1></body></html>"
    );
}

#[test]
fn unknown_element_fails_at_construction() {
    let mut tree = Tree::new();
    let err = tree.create("blink").unwrap_err();
    assert_eq!(
        err,
        BuildError::InvalidElement {
            tag: "blink".to_string()
        }
    );
}

#[test]
fn children_keep_append_and_prepend_order() {
    let mut tree = Tree::new();
    let ul = tree.create("ul").unwrap();
    let li_b = tree.create("li").unwrap();
    tree.cursor(li_b).text("b");
    let li_c = tree.create("li").unwrap();
    tree.cursor(li_c).text("c");
    let li_a = tree.create("li").unwrap();
    tree.cursor(li_a).text("a");

    tree.cursor(ul).append([li_b, li_c]).prepend([li_a]);
    assert_eq!(tree.render(ul), "<ul><li>a</li><li>b</li><li>c</li></ul>");
}

#[test]
fn duplicate_text_children_are_allowed() {
    let mut tree = Tree::new();
    let p = tree.create("p").unwrap();
    tree.cursor(p).text("ha").text("ha");
    assert_eq!(tree.render(p), "<p>haha</p>");
}

#[test]
fn reappending_moves_a_subtree() {
    let mut tree = Tree::new();
    let first = tree.create("div").unwrap();
    let second = tree.create("div").unwrap();
    let moved = tree.cursor(first).element("span").unwrap().id();
    tree.cursor(moved).text("x");

    tree.cursor(second).append([moved]);
    assert_eq!(tree.render(first), "<div></div>");
    assert_eq!(tree.render(second), "<div><span>x</span></div>");
}

#[test]
fn mixed_text_and_element_children_interleave() {
    let mut tree = Tree::new();
    let p = tree.create("p").unwrap();
    let em = tree.create("em").unwrap();
    tree.cursor(em).text("two");
    tree.cursor(p).text("one ").append([em]).text(" three");
    assert_eq!(tree.render(p), "<p>one <em>two</em> three</p>");
}

#[test]
fn render_twice_yields_identical_output() {
    let mut tree = Tree::new();
    let html = tree.create("html").unwrap();
    tree.cursor(html)
        .element("body")
        .unwrap()
        .element("ul")
        .unwrap()
        .element("li")
        .unwrap()
        .text("item");
    let first = tree.render(html);
    let second = tree.render(html);
    assert_eq!(first, second);
}

#[test]
fn rendering_a_subtree_does_not_emit_doctype() {
    let mut tree = Tree::new();
    let html = tree.create("html").unwrap();
    let body = tree.cursor(html).element("body").unwrap().id();
    tree.cursor(body).element("p").unwrap().text("x");

    assert_eq!(tree.render(body), "<body><p>x</p></body>");
    assert!(tree.render(html).starts_with("<!DOCTYPE html>\n<html>"));
}

#[test]
fn void_elements_never_render_closing_tags() {
    let mut tree = Tree::new();
    let body = tree.create("body").unwrap();
    tree.cursor(body)
        .element("img")
        .unwrap()
        .attr("src", "logo.png")
        .unwrap()
        .parent()
        .unwrap()
        .element("br")
        .unwrap();
    assert_eq!(
        tree.render(body),
        r#"<body><img src="logo.png" /><br /></body>"#
    );
}

#[test]
fn deeply_nested_chains_stay_linear() {
    let mut tree = Tree::new();
    let root = tree.create("div").unwrap();
    let mut cursor = tree.cursor(root);
    for _ in 0..50 {
        cursor = cursor.element("div").unwrap();
    }
    cursor.text("bottom");

    let rendered = tree.render(root);
    assert_eq!(rendered.matches("<div>").count(), 51);
    assert_eq!(rendered.matches("</div>").count(), 51);
    assert!(rendered.contains("bottom"));
}

#[test]
fn node_count_tracks_allocations() {
    let mut tree = Tree::new();
    assert_eq!(tree.node_count(), 0);
    let div = tree.create("div").unwrap();
    tree.cursor(div).text("x").element("span").unwrap();
    assert_eq!(tree.node_count(), 3);
}
