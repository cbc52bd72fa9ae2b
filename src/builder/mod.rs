//! Fluent builder cursor and dynamic call dispatch.
//!
//! A [`Cursor`] is a mutable handle positioned at one node of a [`Tree`].
//! Its typed methods (`element`, `attr`, `text`, `append`, `template`, …)
//! cover the common cases; [`Cursor::call`] is the dynamic entry point that
//! resolves an arbitrary call name to an explicit [`Op`] using the same
//! precedence rules throughout:
//!
//! 1. the literal name `append` appends each argument as a child,
//! 2. a `tpl_`-prefixed name matching a registered template invokes it,
//! 3. a known element name creates and descends into a child element,
//! 4. anything else is normalized and treated as an attribute assignment,
//!    which fails with [`BuildError::InvalidAttribute`] if the rule tables
//!    reject it.
//!
//! Methods consume the cursor and return it (or a cursor over a newly created
//! node), so calls chain:
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
//!     .text("Hello");
//! ```

use crate::error::BuildError;
use crate::rules::{self, TEMPLATE_PREFIX};
use crate::tree::{NodeId, Tree};

/// A value passed to a builder call: either raw text or an existing node.
#[derive(Debug, Clone)]
pub enum Arg {
    /// Raw text. Appended as a text node, or concatenated verbatim when the
    /// call resolves to an attribute assignment.
    Text(String),
    /// An existing node in the same tree.
    Node(NodeId),
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for Arg {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<NodeId> for Arg {
    fn from(id: NodeId) -> Self {
        Self::Node(id)
    }
}

/// The operation a dynamic call name resolves to.
///
/// Dispatch is a closed set of tagged operations chosen by [`resolve`];
/// first match wins, evaluated in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Append each argument as a child of the receiver.
    Append,
    /// Invoke a registered template; the name carries the `tpl_` prefix.
    Template,
    /// Create a child element named by the call, with the arguments as its
    /// initial children.
    CreateChild,
    /// Set an attribute on the receiver, concatenating the arguments into
    /// the value.
    SetAttribute,
}

/// Resolves a dynamic call name to an [`Op`] against the given tree.
///
/// The tree is consulted read-only, for template-registry membership.
#[must_use]
pub fn resolve(tree: &Tree, name: &str) -> Op {
    if name == "append" {
        return Op::Append;
    }
    if name.starts_with(TEMPLATE_PREFIX) && tree.has_template(name) {
        return Op::Template;
    }
    if rules::is_valid_tag(name) {
        return Op::CreateChild;
    }
    Op::SetAttribute
}

/// A mutable builder handle positioned at one node of a [`Tree`].
///
/// Obtained from [`Tree::cursor`]. Most methods consume the cursor and return
/// it so calls chain; `element`, `call`, and `template` may return a cursor
/// positioned at a different node (the created child or the template's
/// produced node).
#[derive(Debug)]
pub struct Cursor<'t> {
    tree: &'t mut Tree,
    id: NodeId,
}

impl<'t> Cursor<'t> {
    pub(crate) fn new(tree: &'t mut Tree, id: NodeId) -> Self {
        Self { tree, id }
    }

    /// Returns the id of the node the cursor is positioned at.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the tag of the current node, or `None` for a text node.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tree.tag(self.id)
    }

    /// Creates a child element and moves the cursor to it.
    ///
    /// This is the fluent descent operation: `.element("div")` both creates
    /// the `<div>` and makes it the target of subsequent calls.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidElement`] if `tag` is unknown.
    pub fn element(self, tag: &str) -> Result<Cursor<'t>, BuildError> {
        let child = self.tree.create(tag)?;
        self.tree.append_child(self.id, child);
        Ok(Cursor::new(self.tree, child))
    }

    /// Sets an attribute on the current node and stays on it.
    ///
    /// The name is normalized first: one leading underscore is stripped and
    /// remaining underscores become hyphens, so `.attr("http_equiv", ..)`
    /// sets `http-equiv` and `.attr("_title", ..)` sets `title`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidAttribute`] if the normalized name is
    /// not valid for the current node's tag.
    pub fn attr(self, name: &str, value: impl Into<String>) -> Result<Cursor<'t>, BuildError> {
        let name = rules::normalize_attr_name(name);
        self.tree.set_attribute(self.id, &name, value)?;
        Ok(self)
    }

    /// Sets a boolean-style attribute (stored and rendered as `name=""`).
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidAttribute`] if the normalized name is
    /// not valid for the current node's tag.
    pub fn flag(self, name: &str) -> Result<Cursor<'t>, BuildError> {
        self.attr(name, "")
    }

    /// Appends a raw text child and stays on the current node.
    pub fn text(self, content: impl Into<String>) -> Cursor<'t> {
        let text = self.tree.text(content);
        self.tree.append_child(self.id, text);
        self
    }

    /// Appends each item as a child, in order, and stays on the current node.
    ///
    /// Node items are re-parented to the receiver (silently detached from any
    /// previous parent).
    pub fn append<I, A>(mut self, items: I) -> Cursor<'t>
    where
        I: IntoIterator<Item = A>,
        A: Into<Arg>,
    {
        for item in items {
            let child = self.materialize(item.into());
            self.tree.append_child(self.id, child);
        }
        self
    }

    /// Inserts each item at the start of the child list, preserving the
    /// relative order of the inserted items, and stays on the current node.
    pub fn prepend<I, A>(mut self, items: I) -> Cursor<'t>
    where
        I: IntoIterator<Item = A>,
        A: Into<Arg>,
    {
        let anchor = self.tree.first_child(self.id);
        for item in items {
            let child = self.materialize(item.into());
            match anchor {
                Some(reference) => self.tree.insert_before(reference, child),
                None => self.tree.append_child(self.id, child),
            }
        }
        self
    }

    /// Moves the cursor to the parent node, if there is one.
    #[must_use]
    pub fn parent(self) -> Option<Cursor<'t>> {
        let parent = self.tree.parent(self.id)?;
        Some(Cursor::new(self.tree, parent))
    }

    /// Invokes the template registered under `name` (unprefixed).
    ///
    /// The template function receives the current node as context. If it
    /// returns a node that is still detached, the node is auto-appended to
    /// the current node; the cursor moves to the produced node. If the
    /// template returns nothing (in-place mutation), the cursor stays.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidAttribute`] naming the prefixed key if no
    /// such template is registered, or whatever error the template itself
    /// produces.
    pub fn template(self, name: &str, args: &[Arg]) -> Result<Cursor<'t>, BuildError> {
        let key = format!("{TEMPLATE_PREFIX}{name}");
        self.invoke_template(&key, args)
    }

    /// Registers a template on the underlying tree and stays on the current
    /// node. Forwarding convenience for [`Tree::register`].
    pub fn register<F>(self, name: &str, f: F) -> Cursor<'t>
    where
        F: Fn(&mut Tree, NodeId, &[Arg]) -> Result<Option<NodeId>, BuildError> + 'static,
    {
        self.tree.register(name, f);
        self
    }

    /// The dynamic dispatch entry point.
    ///
    /// Resolves `name` to an [`Op`] (see [`resolve`]) and executes it:
    /// `append` appends the args; a registered `tpl_*` name invokes the
    /// template; a known element name creates a child with the args as its
    /// initial children and descends into it; anything else is an attribute
    /// assignment whose value is the args concatenated with no separator.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidAttribute`] when the name resolves to
    /// none of the above and fails attribute validation for the current
    /// node's tag, or [`BuildError`] from a failing template.
    pub fn call(mut self, name: &str, args: &[Arg]) -> Result<Cursor<'t>, BuildError> {
        match resolve(self.tree, name) {
            Op::Append => Ok(self.append(args.iter().cloned())),
            Op::Template => self.invoke_template(name, args),
            Op::CreateChild => {
                let child = self.tree.create(name)?;
                for arg in args {
                    let item = self.materialize(arg.clone());
                    self.tree.append_child(child, item);
                }
                self.tree.append_child(self.id, child);
                Ok(Cursor::new(self.tree, child))
            }
            Op::SetAttribute => {
                let name = rules::normalize_attr_name(name);
                let mut value = String::new();
                for arg in args {
                    match arg {
                        Arg::Text(s) => value.push_str(s),
                        Arg::Node(id) => value.push_str(&self.tree.render(*id)),
                    }
                }
                self.tree.set_attribute(self.id, &name, value)?;
                Ok(self)
            }
        }
    }

    /// Serializes the subtree under the cursor.
    #[must_use]
    pub fn render(&self) -> String {
        self.tree.render(self.id)
    }

    fn invoke_template(self, key: &str, args: &[Arg]) -> Result<Cursor<'t>, BuildError> {
        let Some(template) = self.tree.template(key) else {
            return Err(BuildError::InvalidAttribute {
                attr: key.to_string(),
                tag: self.tag().unwrap_or("#text").to_string(),
            });
        };
        match template(self.tree, self.id, args)? {
            Some(produced) => {
                if self.tree.parent(produced).is_none() {
                    self.tree.append_child(self.id, produced);
                }
                Ok(Cursor::new(self.tree, produced))
            }
            None => Ok(self),
        }
    }

    fn materialize(&mut self, arg: Arg) -> NodeId {
        match arg {
            Arg::Text(s) => self.tree.text(s),
            Arg::Node(id) => id,
        }
    }
}
