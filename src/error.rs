//! Crate-wide error taxonomy.
//!
//! Two failure families cover every fallible operation in weft:
//! [`Error::NotFound`] for keyed lookups and removals that miss, and
//! [`Error::MissingCapability`] for operations attempted against an element
//! whose capability set does not include them. Nothing in the core retries or
//! silently recovers, with two documented exceptions: `gap` skipping inner
//! spacing on containers that have none, and registry id overwrites
//! (last-write-wins).

use crate::tree::element::Caps;

/// Errors surfaced by registry, stylesheet, composition, and linkage
/// operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A keyed lookup or removal found no entry.
    #[error("no entry `{key}` in {scope}")]
    NotFound {
        /// What was searched: "registry", "style rule", "stylesheet".
        scope: &'static str,
        /// The missing key.
        key: String,
    },

    /// The element does not support what the operation needs — for example
    /// linking a control without boolean state as a binding source, or
    /// composing children into a non-container.
    #[error("`{class_tag}` does not support {required:?}")]
    MissingCapability {
        /// Class tag of the offending element.
        class_tag: String,
        /// The capability the operation required.
        required: Caps,
    },
}

impl Error {
    pub(crate) fn not_found(scope: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            scope,
            key: key.into(),
        }
    }

    pub(crate) fn missing(class_tag: impl Into<String>, required: Caps) -> Self {
        Self::MissingCapability {
            class_tag: class_tag.into(),
            required,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
