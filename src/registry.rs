//! Id registry: string id -> element lookup.
//!
//! The registry is an explicit object owned by [`Ui`](crate::ui::Ui), one per
//! application root — there is no ambient process-global map. It indexes
//! elements without owning them: entries hold arena keys, and the arena
//! controls element lifetime. An entry for a destroyed element must be
//! removed by the caller no later than the destruction itself.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::tree::element::ElementId;

/// Mapping from id string to element key.
///
/// Keys are unique at any instant. Re-registering an existing id overwrites
/// the previous entry — last write wins; duplicate-id misuse is not rejected
/// here.
#[derive(Debug, Default)]
pub struct Registry {
    entries: HashMap<String, ElementId>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Store an element under an id (possibly empty), overwriting any
    /// existing entry under that id.
    pub fn register(&mut self, id: impl Into<String>, element: ElementId) {
        let id = id.into();
        if let Some(previous) = self.entries.insert(id.clone(), element) {
            if previous != element {
                log::debug!("registry id `{id}` re-registered to a different element");
            }
        }
    }

    /// Remove the entry for an id. A no-op if absent.
    pub fn unregister(&mut self, id: &str) {
        self.entries.remove(id);
    }

    /// The element registered under an id.
    ///
    /// Fails with [`Error::NotFound`] if no element is registered under it.
    pub fn lookup(&self, id: &str) -> Result<ElementId> {
        self.entries
            .get(id)
            .copied()
            .ok_or_else(|| Error::not_found("registry", id))
    }

    /// Whether an id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of registered ids.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
