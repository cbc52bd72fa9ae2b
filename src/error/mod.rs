//! Error types for tree construction.
//!
//! All validation happens while the tree is being built: creating a node with
//! an unknown tag or setting an attribute that the element does not accept
//! fails immediately with a [`BuildError`]. Rendering a fully built tree
//! never fails.

use std::fmt;

/// The error type returned when tree construction or mutation is rejected.
///
/// Both variants are programmer errors (a malformed call sequence) and are
/// surfaced immediately; the library never logs, retries, or degrades.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A node was requested with a tag name that is not a known HTML5 element.
    InvalidElement {
        /// The rejected tag name.
        tag: String,
    },
    /// An attribute was set that is neither global, wildcard-prefixed, nor
    /// listed as applicable to the receiving element's tag.
    InvalidAttribute {
        /// The rejected attribute name (after normalization).
        attr: String,
        /// The tag of the element the attribute was set on.
        tag: String,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidElement { tag } => {
                write!(f, "invalid element name <{tag}>")
            }
            Self::InvalidAttribute { attr, tag } => {
                write!(f, "invalid attribute \"{attr}\" for element <{tag}>")
            }
        }
    }
}

impl std::error::Error for BuildError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_element_display() {
        let err = BuildError::InvalidElement {
            tag: "blink".to_string(),
        };
        assert_eq!(err.to_string(), "invalid element name <blink>");
    }

    #[test]
    fn test_invalid_attribute_display() {
        let err = BuildError::InvalidAttribute {
            attr: "href".to_string(),
            tag: "div".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid attribute \"href\" for element <div>"
        );
    }

    #[test]
    fn test_build_error_is_error_trait() {
        let err = BuildError::InvalidElement {
            tag: "x".to_string(),
        };
        let _: &dyn std::error::Error = &err;
    }
}
