//! First-seen-order set keyed by explicit structural identity.

use std::collections::HashSet;

use catalog_backup_shared::Canonical;

/// Collection that keeps the first occurrence of each structurally distinct
/// record, in insertion order.
#[derive(Debug)]
pub struct UniqueSet<T: Canonical> {
    seen: HashSet<T::Key>,
    items: Vec<T>,
}

impl<T: Canonical> UniqueSet<T> {
    pub fn new() -> Self {
        Self {
            seen: HashSet::new(),
            items: Vec::new(),
        }
    }

    /// Insert `item` unless an equal record is already present.
    ///
    /// Returns `true` when the item was added.
    pub fn insert(&mut self, item: T) -> bool {
        if self.seen.insert(item.canonical_key()) {
            self.items.push(item);
            true
        } else {
            false
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T: Canonical> Default for UniqueSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
