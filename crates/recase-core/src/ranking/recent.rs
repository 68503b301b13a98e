//! Bounded most-recently-used list of case identifiers

use crate::cases::CaseId;

/// Maximum number of recently used styles retained (most-recent-first)
pub const DEFAULT_RECENT_CAPACITY: usize = 4;

/// Recently used styles, most recent first, capped to a fixed window
///
/// Invariants: no duplicate identifier, never more than `capacity` items.
/// Every operation is total; there are no error conditions. The window is
/// small enough that a linear scan covers dedup and removal.
#[derive(Debug, Clone)]
pub struct RecentList {
    items: Vec<CaseId>,
    capacity: usize,
}

impl RecentList {
    /// Create an empty list with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_RECENT_CAPACITY)
    }

    /// Create an empty list with an explicit capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Rebuild a list from stored items, restoring the invariants
    ///
    /// Stored order is kept; duplicates past the first occurrence are
    /// dropped, then the window is truncated to `capacity`.
    pub fn from_items(items: Vec<CaseId>, capacity: usize) -> Self {
        let mut list = Self::with_capacity(capacity);
        for id in items {
            if !list.items.contains(&id) {
                list.items.push(id);
            }
        }
        list.items.truncate(capacity);
        list
    }

    /// Record one use of `id`: move-to-front, then truncate to capacity
    pub fn record(&mut self, id: CaseId) {
        self.items.retain(|item| item != &id);
        self.items.insert(0, id);
        self.items.truncate(self.capacity);
    }

    /// Remove `id`; returns whether anything was removed
    pub fn remove(&mut self, id: &CaseId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item != id);
        self.items.len() != before
    }

    /// Empty the list
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Whether `id` is currently in the window
    pub fn contains(&self, id: &CaseId) -> bool {
        self.items.contains(id)
    }

    /// Items, most recent first
    pub fn items(&self) -> &[CaseId] {
        &self.items
    }

    /// Number of items currently held
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The fixed window size
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for RecentList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<CaseId> {
        names.iter().copied().map(CaseId::new).collect()
    }

    #[test]
    fn record_is_move_to_front() {
        let mut list = RecentList::new();
        for id in ["a", "b", "c", "d"] {
            list.record(CaseId::new(id));
        }
        assert_eq!(list.items(), ids(&["d", "c", "b", "a"]));

        list.record(CaseId::new("a"));
        assert_eq!(list.items(), ids(&["a", "d", "c", "b"]));

        list.record(CaseId::new("e"));
        assert_eq!(list.items(), ids(&["e", "a", "d", "c"]));
    }

    #[test]
    fn never_exceeds_capacity_or_duplicates() {
        let mut list = RecentList::new();
        for i in 0..100 {
            list.record(CaseId::new(format!("id-{}", i % 7)));
            assert!(list.len() <= list.capacity());
            for id in list.items() {
                assert_eq!(list.items().iter().filter(|i| *i == id).count(), 1);
            }
        }
    }

    #[test]
    fn remove_reports_membership() {
        let mut list = RecentList::new();
        list.record(CaseId::new("a"));
        assert!(list.remove(&CaseId::new("a")));
        assert!(!list.remove(&CaseId::new("a")));
        assert!(list.is_empty());
    }

    #[test]
    fn from_items_restores_invariants() {
        let stored = ids(&["a", "b", "a", "c", "d", "e"]);
        let list = RecentList::from_items(stored, DEFAULT_RECENT_CAPACITY);
        assert_eq!(list.items(), ids(&["a", "b", "c", "d"]));
    }

    #[test]
    fn clear_empties() {
        let mut list = RecentList::new();
        list.record(CaseId::new("a"));
        list.clear();
        assert!(list.is_empty());
    }
}
