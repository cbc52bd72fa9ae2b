//! Node type definitions.
//!
//! The `NodeKind` enum carries the payload for each node type. Navigation
//! links (parent, children, siblings) are stored in `NodeData`, not here.

/// An attribute on an element, stored in insertion order.
///
/// Setting an attribute that already exists overwrites its value in place, so
/// the original position in the render order is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// The attribute name, already normalized (hyphenated form).
    pub name: String,
    /// The attribute value. Boolean-style attributes store the empty string.
    pub value: String,
}

/// The kind of a tree node and its associated data.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// An element node, e.g., `<div class="x">`.
    Element {
        /// The element's tag name. Always a member of
        /// [`ELEMENTS`](crate::rules::ELEMENTS); construction enforces this.
        tag: String,
        /// Attributes on this element, in insertion order.
        attributes: Vec<Attribute>,
    },

    /// A raw text node.
    ///
    /// Content is emitted verbatim by the serializer — no HTML escaping is
    /// performed. Callers are trusted to pre-escape.
    Text {
        /// The text content.
        content: String,
    },
}
