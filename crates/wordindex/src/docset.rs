//! Per-word set of document identifiers

use std::sync::Arc;

use crate::error::Result;

/// Deduplicated, insertion-ordered document identifiers for one word
///
/// Membership is a linear scan; a word rarely appears in more than a
/// handful of documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSet {
    ids: Vec<Arc<str>>,
}

impl DocumentSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether `id` is in the set
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| &**existing == id)
    }

    /// Add `id` unless already present
    ///
    /// # Returns
    /// * `Result<bool>` - `true` if the id was added, `false` if it was
    ///   already there
    pub fn insert(&mut self, id: &Arc<str>) -> Result<bool> {
        if self.contains(id) {
            return Ok(false);
        }
        self.ids.try_reserve(1)?;
        self.ids.push(Arc::clone(id));
        Ok(true)
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
        self.ids.iter().map(|id| &**id)
    }

    /// Iterate with the most recently inserted id first
    pub fn iter_recent_first(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().rev()
    }

    /// Get the number of ids
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
