//! Arena-based HTML document tree.
//!
//! This module implements the core tree representation using arena allocation
//! with typed indices. All nodes live in a contiguous `Vec<NodeData>` owned by
//! the [`Tree`], and are referenced by [`NodeId`] — a newtype over
//! `NonZeroU32`.
//!
//! This design provides O(1) node access, cache-friendly layout, no reference
//! counting overhead, and safe bulk deallocation (drop the `Tree` and
//! everything is freed).
//!
//! # Architecture
//!
//! Parent back-references are plain arena indices, not owning pointers: a node
//! is owned by the arena, reachable through its parent's child links. This
//! avoids borrow checker issues, reference cycles, and per-node heap
//! allocation. The supported shape is a tree — appending a node into its own
//! subtree is a caller error and is not detected.

mod node;

pub use node::{Attribute, NodeKind};

use std::num::NonZeroU32;

use crate::builder::Cursor;
use crate::error::BuildError;
use crate::rules;
use crate::template::{TemplateFn, TemplateRegistry};

/// A typed index into the tree's node arena.
///
/// `NodeId` is a newtype over `NonZeroU32`, meaning it can never be zero
/// and `Option<NodeId>` has the same size as `NodeId` (niche optimization).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(NonZeroU32);

impl NodeId {
    /// Creates a `NodeId` from a raw index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 0.
    #[allow(clippy::expect_used)]
    fn from_index(index: usize) -> Self {
        let index = u32::try_from(index).expect("node arena exceeds u32::MAX entries");
        Self(NonZeroU32::new(index).expect("NodeId index must be non-zero"))
    }

    /// Returns the raw index as a `usize` for indexing into the arena.
    fn as_index(self) -> usize {
        self.0.get() as usize
    }
}

/// Storage for a single node in the arena.
///
/// Each node stores its kind (element or text) and links to parent, children,
/// and siblings for tree navigation. Access individual nodes via
/// [`Tree::node`].
#[derive(Debug, Clone)]
pub struct NodeData {
    /// What kind of node this is (element or text) and its payload.
    pub kind: NodeKind,
    /// Parent node, if any. Detached nodes have no parent.
    pub parent: Option<NodeId>,
    /// First child node.
    pub first_child: Option<NodeId>,
    /// Last child node (for O(1) append).
    pub last_child: Option<NodeId>,
    /// Next sibling.
    pub next_sibling: Option<NodeId>,
    /// Previous sibling.
    pub prev_sibling: Option<NodeId>,
}

impl NodeData {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            first_child: None,
            last_child: None,
            next_sibling: None,
            prev_sibling: None,
        }
    }
}

/// An HTML document tree.
///
/// The `Tree` owns all nodes in an arena along with the template registry,
/// and provides methods for tree navigation and mutation. All tree operations
/// go through `&Tree` (navigation, rendering) or `&mut Tree` (mutation).
///
/// Nodes are created detached and become reachable from a parent only via
/// [`append_child`](Tree::append_child) or its variants. Nodes are never
/// deleted explicitly; detached subtrees stay allocated until the tree is
/// dropped.
///
/// # Examples
///
/// ```
/// use tagwright::Tree;
///
/// let mut tree = Tree::new();
/// let root = tree.create("html").unwrap();
/// tree.cursor(root).element("body").unwrap().text("Hello");
/// assert_eq!(
///     tree.render(root),
///     "<!DOCTYPE html>\n<html><body>Hello</body></html>"
/// );
/// ```
pub struct Tree {
    /// The node arena. Index 0 is unused (placeholder for `NonZeroU32`).
    nodes: Vec<NodeData>,
    /// Templates registered on this tree.
    templates: TemplateRegistry,
}

impl Tree {
    /// Creates a new empty tree with an empty template registry.
    #[must_use]
    pub fn new() -> Self {
        let mut nodes = Vec::with_capacity(16);
        // Index 0: placeholder (NodeId uses NonZeroU32)
        nodes.push(NodeData::new(NodeKind::Text {
            content: String::new(),
        }));
        Self {
            nodes,
            templates: TemplateRegistry::new(),
        }
    }

    /// Creates a detached element node.
    ///
    /// The node has no parent, no attributes, and no children. Templates use
    /// this to build a subtree before deciding whether to attach it.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidElement`] if `tag` is not a known HTML5
    /// element name.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagwright::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.create("div").is_ok());
    /// assert!(tree.create("blink").is_err());
    /// ```
    pub fn create(&mut self, tag: &str) -> Result<NodeId, BuildError> {
        if !rules::is_valid_tag(tag) {
            return Err(BuildError::InvalidElement {
                tag: tag.to_string(),
            });
        }
        Ok(self.alloc(NodeKind::Element {
            tag: tag.to_string(),
            attributes: Vec::new(),
        }))
    }

    /// Creates a detached raw text node.
    ///
    /// The content is emitted verbatim at render time; callers are trusted to
    /// pre-escape.
    pub fn text(&mut self, content: impl Into<String>) -> NodeId {
        self.alloc(NodeKind::Text {
            content: content.into(),
        })
    }

    fn alloc(&mut self, kind: NodeKind) -> NodeId {
        let index = self.nodes.len();
        self.nodes.push(NodeData::new(kind));
        NodeId::from_index(index)
    }

    /// Returns a reference to the `NodeData` for the given node.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not refer to a valid node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.as_index()]
    }

    /// Returns a mutable reference to the `NodeData` for the given node.
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.as_index()]
    }

    /// Returns the tag name of an element node, or `None` for text nodes.
    #[must_use]
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match &self.node(id).kind {
            NodeKind::Element { tag, .. } => Some(tag),
            NodeKind::Text { .. } => None,
        }
    }

    /// Returns the content of a text node, or `None` for element nodes.
    #[must_use]
    pub fn node_text(&self, id: NodeId) -> Option<&str> {
        match &self.node(id).kind {
            NodeKind::Text { content } => Some(content),
            NodeKind::Element { .. } => None,
        }
    }

    /// Returns the concatenated text content of a node and all its
    /// descendants.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        let mut result = String::new();
        self.collect_text(id, &mut result);
        result
    }

    fn collect_text(&self, id: NodeId, buf: &mut String) {
        match &self.node(id).kind {
            NodeKind::Text { content } => buf.push_str(content),
            NodeKind::Element { .. } => {
                for child in self.children(id) {
                    self.collect_text(child, buf);
                }
            }
        }
    }

    /// Returns the attributes of an element node, in insertion order.
    ///
    /// Returns an empty slice for text nodes.
    #[must_use]
    pub fn attributes(&self, id: NodeId) -> &[Attribute] {
        match &self.node(id).kind {
            NodeKind::Element { attributes, .. } => attributes,
            NodeKind::Text { .. } => &[],
        }
    }

    /// Returns the value of an attribute by name on an element node.
    #[must_use]
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.attributes(id)
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Sets an attribute on an element node, validating it against the rule
    /// tables.
    ///
    /// The name must already be normalized (hyphenated form). If the
    /// attribute was set before, its value is overwritten in place and its
    /// position in the render order is preserved; otherwise it is appended.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidAttribute`] if the attribute is neither
    /// global, wildcard-prefixed, nor listed for the node's tag. Setting an
    /// attribute on a text node is rejected the same way.
    pub fn set_attribute(
        &mut self,
        id: NodeId,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), BuildError> {
        let NodeKind::Element { tag, .. } = &self.node(id).kind else {
            return Err(BuildError::InvalidAttribute {
                attr: name.to_string(),
                tag: "#text".to_string(),
            });
        };
        if !rules::is_valid_attr(tag, name) {
            return Err(BuildError::InvalidAttribute {
                attr: name.to_string(),
                tag: tag.clone(),
            });
        }
        if let NodeKind::Element { attributes, .. } = &mut self.node_mut(id).kind {
            let value = value.into();
            match attributes.iter_mut().find(|a| a.name == name) {
                Some(attr) => attr.value = value,
                None => attributes.push(Attribute {
                    name: name.to_string(),
                    value,
                }),
            }
        }
        Ok(())
    }

    // --- Navigation ---

    /// Returns the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Returns the first child of a node.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).first_child
    }

    /// Returns the last child of a node.
    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).last_child
    }

    /// Returns the next sibling of a node.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).next_sibling
    }

    /// Returns the previous sibling of a node.
    #[must_use]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).prev_sibling
    }

    /// Returns an iterator over the children of a node, in document order.
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.node(id).first_child,
        }
    }

    /// Returns an iterator over a node and its ancestors (walking up).
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: Some(id),
        }
    }

    /// Returns an iterator over all descendants of a node (depth-first).
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            tree: self,
            root: id,
            next: self.first_child(id),
        }
    }

    // --- Mutation ---

    /// Appends a child node to the end of a parent's child list.
    ///
    /// If `child` already has a parent it is silently detached first — the
    /// parent back-reference repoints, it never duplicates.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.node_mut(child).parent = Some(parent);

        if let Some(last) = self.node(parent).last_child {
            self.node_mut(last).next_sibling = Some(child);
            self.node_mut(child).prev_sibling = Some(last);
            self.node_mut(parent).last_child = Some(child);
        } else {
            self.node_mut(parent).first_child = Some(child);
            self.node_mut(parent).last_child = Some(child);
        }
    }

    /// Inserts `new_child` before `reference` in the parent's child list.
    ///
    /// If `new_child` already has a parent it is silently detached first.
    ///
    /// # Panics
    ///
    /// Panics if `reference` has no parent.
    #[allow(clippy::expect_used)]
    pub fn insert_before(&mut self, reference: NodeId, new_child: NodeId) {
        self.detach(new_child);

        let parent = self
            .node(reference)
            .parent
            .expect("reference has no parent");
        self.node_mut(new_child).parent = Some(parent);

        if let Some(prev) = self.node(reference).prev_sibling {
            self.node_mut(prev).next_sibling = Some(new_child);
            self.node_mut(new_child).prev_sibling = Some(prev);
        } else {
            self.node_mut(parent).first_child = Some(new_child);
        }

        self.node_mut(new_child).next_sibling = Some(reference);
        self.node_mut(reference).prev_sibling = Some(new_child);
    }

    /// Prepends a child node as the first child of a parent.
    pub fn prepend_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(first) = self.first_child(parent) {
            self.insert_before(first, child);
        } else {
            self.append_child(parent, child);
        }
    }

    /// Detaches a node from its parent.
    ///
    /// The node remains allocated in the arena and can be re-attached
    /// anywhere. Detaching a node that has no parent is a no-op.
    pub fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.node(id).parent else {
            return;
        };

        let prev = self.node(id).prev_sibling;
        let next = self.node(id).next_sibling;

        match prev {
            Some(p) => self.node_mut(p).next_sibling = next,
            None => self.node_mut(parent).first_child = next,
        }

        match next {
            Some(n) => self.node_mut(n).prev_sibling = prev,
            None => self.node_mut(parent).last_child = prev,
        }

        self.node_mut(id).parent = None;
        self.node_mut(id).prev_sibling = None;
        self.node_mut(id).next_sibling = None;
    }

    /// Returns the total number of nodes in the arena (excluding the unused
    /// placeholder slot).
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    // --- Templates ---

    /// Registers a template function under the given name.
    ///
    /// The name is stored under the reserved `tpl_` prefix, so a template
    /// registered as `"list"` is invoked as `tpl_list` through dynamic
    /// dispatch, or as `"list"` through [`Cursor::template`]. The last
    /// registration for a given name wins, and is visible to every subsequent
    /// template call on this tree.
    pub fn register<F>(&mut self, name: &str, f: F)
    where
        F: Fn(&mut Tree, NodeId, &[crate::builder::Arg]) -> Result<Option<NodeId>, BuildError>
            + 'static,
    {
        self.templates.insert(name, f);
    }

    /// Looks up a template function by its prefixed key.
    pub(crate) fn template(&self, key: &str) -> Option<std::rc::Rc<TemplateFn>> {
        self.templates.get(key)
    }

    /// Returns true if a template is registered under the prefixed key.
    pub(crate) fn has_template(&self, key: &str) -> bool {
        self.templates.contains(key)
    }

    // --- Builder / rendering entry points ---

    /// Returns a fluent builder cursor positioned at the given node.
    pub fn cursor(&mut self, id: NodeId) -> Cursor<'_> {
        Cursor::new(self, id)
    }

    /// Serializes the subtree rooted at `id` to an HTML string.
    ///
    /// Pure read operation; repeatable any number of times with identical
    /// output given an unchanged tree. See [`crate::serial::render`] for the
    /// exact output contract.
    #[must_use]
    pub fn render(&self, id: NodeId) -> String {
        crate::serial::render(self, id)
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tree")
            .field("nodes", &self.nodes)
            .field("templates", &self.templates)
            .finish()
    }
}

// --- Iterators ---

/// Iterator over the children of a node.
pub struct Children<'a> {
    tree: &'a Tree,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.node(current).next_sibling;
        Some(current)
    }
}

/// Iterator over a node and its ancestors.
pub struct Ancestors<'a> {
    tree: &'a Tree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.node(current).parent;
        Some(current)
    }
}

/// Depth-first iterator over all descendants of a node.
pub struct Descendants<'a> {
    tree: &'a Tree,
    root: NodeId,
    next: Option<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;

        // Try to go deeper first
        if let Some(child) = self.tree.first_child(current) {
            self.next = Some(child);
            return Some(current);
        }

        // Try next sibling
        if let Some(sibling) = self.tree.next_sibling(current) {
            self.next = Some(sibling);
            return Some(current);
        }

        // Walk up to find an ancestor with a next sibling
        let mut ancestor = self.tree.parent(current);
        while let Some(anc) = ancestor {
            if anc == self.root {
                self.next = None;
                return Some(current);
            }
            if let Some(sibling) = self.tree.next_sibling(anc) {
                self.next = Some(sibling);
                return Some(current);
            }
            ancestor = self.tree.parent(anc);
        }

        self.next = None;
        Some(current)
    }
}
