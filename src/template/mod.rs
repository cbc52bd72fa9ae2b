//! Tree-scoped template registry.
//!
//! A template is a named function that builds a reusable subtree given a
//! context node and arguments. Templates are registered with
//! [`Tree::register`](crate::Tree::register) and invoked either through
//! [`Cursor::template`](crate::builder::Cursor::template) or dynamically via
//! a call name carrying the reserved `tpl_` prefix (`tpl_list` invokes the
//! template registered as `list`).
//!
//! The registry is owned by the tree — created with it, discarded with it.
//! There is no process-global template state; two trees never share
//! templates. Within one tree, registrations share a single namespace and the
//! last registration for a given name wins.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::builder::Arg;
use crate::error::BuildError;
use crate::rules::TEMPLATE_PREFIX;
use crate::tree::{NodeId, Tree};

/// The signature of a template function.
///
/// The function receives the tree, the context node the template was invoked
/// on, and the call's arguments. Returning `Some(node)` hands a produced
/// subtree back to the dispatcher, which auto-appends it to the context node
/// if it is still detached; returning `None` signals an in-place mutation.
pub type TemplateFn = dyn Fn(&mut Tree, NodeId, &[Arg]) -> Result<Option<NodeId>, BuildError>;

/// Mapping from prefixed template keys to template functions.
///
/// Functions are stored behind `Rc` so a lookup can hand out a callable
/// handle while the tree itself is mutably borrowed by the invocation.
#[derive(Default)]
pub struct TemplateRegistry {
    entries: HashMap<String, Rc<TemplateFn>>,
}

impl TemplateRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Stores `f` under the prefixed key for `name`. Last writer wins.
    pub fn insert<F>(&mut self, name: &str, f: F)
    where
        F: Fn(&mut Tree, NodeId, &[Arg]) -> Result<Option<NodeId>, BuildError> + 'static,
    {
        self.entries
            .insert(format!("{TEMPLATE_PREFIX}{name}"), Rc::new(f));
    }

    /// Looks up a template by its prefixed key (e.g. `tpl_list`).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Rc<TemplateFn>> {
        self.entries.get(key).cloned()
    }

    /// Returns true if the prefixed key is registered.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of registered templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no templates are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.entries.keys().collect();
        keys.sort();
        f.debug_struct("TemplateRegistry")
            .field("keys", &keys)
            .finish()
    }
}
