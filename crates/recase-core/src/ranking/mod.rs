//! Ranked-list memory for case styles
//!
//! Two cooperating lists backed by the preference store: user-pinned
//! favorites and a bounded most-recently-used window. `StyleTracker` owns
//! both and keeps them mutually exclusive: a pinned style never appears in
//! the recent window. Every mutation is written through to the store.

mod pinned;
mod recent;

#[cfg(test)]
mod tests;

pub use pinned::PinnedList;
pub use recent::{DEFAULT_RECENT_CAPACITY, RecentList};

use crate::cases::{CaseId, CaseRegistry};
use crate::store::{ListStore, PreferenceStore};
use std::sync::Arc;
use tracing::warn;

/// Store key for the pinned list
pub const PINNED_KEY: &str = "pinned";
/// Store key for the recent list
pub const RECENT_KEY: &str = "recent";

/// Coordinator for the pinned and recent lists
///
/// The store handle is injected at construction. Mutations persist the
/// affected list immediately; a failed write is logged and otherwise
/// ignored, so list operations stay infallible. The store is a best-effort
/// preference cache, not a system of record.
#[derive(Debug)]
pub struct StyleTracker {
    pinned: PinnedList,
    recent: RecentList,
    lists: ListStore,
}

impl StyleTracker {
    /// Load both lists from the store
    ///
    /// Absent keys yield empty lists; a malformed value degrades to an
    /// empty list for that key only (see [`ListStore::load_list`]).
    pub async fn load(store: Arc<dyn PreferenceStore>) -> Self {
        let lists = ListStore::new(store);
        let pinned = PinnedList::from_items(lists.load_list(PINNED_KEY).await);
        let recent = RecentList::from_items(
            lists.load_list(RECENT_KEY).await,
            DEFAULT_RECENT_CAPACITY,
        );
        Self {
            pinned,
            recent,
            lists,
        }
    }

    /// The pinned list
    pub fn pinned(&self) -> &PinnedList {
        &self.pinned
    }

    /// The recent list
    pub fn recent(&self) -> &RecentList {
        &self.recent
    }

    /// Whether `id` is pinned
    pub fn is_pinned(&self, id: &CaseId) -> bool {
        self.pinned.contains(id)
    }

    /// Record one use of a style
    ///
    /// Pinned styles are exempt from recency tracking; recording one is a
    /// no-op.
    pub async fn record_use(&mut self, id: CaseId) {
        if self.pinned.contains(&id) {
            return;
        }
        self.recent.record(id);
        self.persist_recent().await;
    }

    /// Pin a style, removing it from the recent window if present
    pub async fn pin(&mut self, id: CaseId) {
        if self.recent.remove(&id) {
            self.persist_recent().await;
        }
        if self.pinned.pin(id) {
            self.persist_pinned().await;
        }
    }

    /// Unpin a style; no-op when it was not pinned
    pub async fn unpin(&mut self, id: &CaseId) {
        if self.pinned.unpin(id) {
            self.persist_pinned().await;
        }
    }

    /// Remove a style from the recent window
    pub async fn remove_recent(&mut self, id: &CaseId) {
        if self.recent.remove(id) {
            self.persist_recent().await;
        }
    }

    /// Empty the recent window
    pub async fn clear_recent(&mut self) {
        if !self.recent.is_empty() {
            self.recent.clear();
            self.persist_recent().await;
        }
    }

    /// Empty the pinned list
    pub async fn clear_pinned(&mut self) {
        if !self.pinned.is_empty() {
            self.pinned.clear();
            self.persist_pinned().await;
        }
    }

    /// Launcher ordering over a registry: pinned, then recent, then the
    /// remaining registry entries in registration order
    pub fn sections(&self, registry: &CaseRegistry) -> StyleSections {
        let others = registry
            .ids()
            .filter(|id| !self.pinned.contains(id) && !self.recent.contains(id))
            .cloned()
            .collect();
        StyleSections {
            pinned: self.pinned.items().to_vec(),
            recent: self.recent.items().to_vec(),
            others,
        }
    }

    async fn persist_pinned(&self) {
        if let Err(err) = self.lists.save_list(PINNED_KEY, self.pinned.items()).await {
            warn!("failed to persist pinned styles: {}", err);
        }
    }

    async fn persist_recent(&self) {
        if let Err(err) = self.lists.save_list(RECENT_KEY, self.recent.items()).await {
            warn!("failed to persist recent styles: {}", err);
        }
    }
}

/// Display ordering produced by [`StyleTracker::sections`]
#[derive(Debug, Clone)]
pub struct StyleSections {
    /// Pinned styles, newest pin first
    pub pinned: Vec<CaseId>,
    /// Recently used styles, most recent first
    pub recent: Vec<CaseId>,
    /// Remaining registry styles in registration order
    pub others: Vec<CaseId>,
}
