//! Locale navigation tree.

use std::collections::HashMap;

use crate::entry::NavigationEntry;
use crate::error::SessionError;

/// Ordered navigation entries with an id index.
///
/// Built once per locale session and never mutated. The first entry is the
/// home page.
#[derive(Debug, Clone)]
pub struct NavigationTree {
    entries: Vec<NavigationEntry>,
    index: HashMap<String, usize>,
}

impl NavigationTree {
    /// Build a tree from entries in bundle order.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyNavigation`] for an empty list and
    /// [`SessionError::DuplicateId`] if two entries share an id.
    pub fn new(entries: Vec<NavigationEntry>) -> Result<Self, SessionError> {
        if entries.is_empty() {
            return Err(SessionError::EmptyNavigation);
        }

        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if index.insert(entry.id.clone(), position).is_some() {
                return Err(SessionError::DuplicateId(entry.id.clone()));
            }
        }

        Ok(Self { entries, index })
    }

    /// The home entry (first in bundle order).
    #[must_use]
    pub fn home(&self) -> &NavigationEntry {
        &self.entries[0]
    }

    /// Entry with exactly this id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&NavigationEntry> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    /// Entry with this id, or home when the id is unknown.
    #[must_use]
    pub fn resolve(&self, id: &str) -> &NavigationEntry {
        self.get(id).unwrap_or_else(|| {
            tracing::debug!(id, "unknown navigation id, falling back to home");
            self.home()
        })
    }

    /// All entries in bundle order.
    #[must_use]
    pub fn entries(&self) -> &[NavigationEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true for a constructed tree.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
