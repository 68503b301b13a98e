//! Persistence adapter for the ranked lists
//!
//! Bridges the in-memory lists and the preference store. Each list lives
//! under one key as a JSON array of identifier strings, a stable,
//! order-preserving, round-trippable encoding.

use super::PreferenceStore;
use crate::cases::CaseId;
use crate::error::RecaseResult;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Load/save ordered identifier lists through a shared store handle
#[derive(Clone)]
pub struct ListStore {
    store: Arc<dyn PreferenceStore>,
}

impl ListStore {
    /// Create an adapter over an injected store handle
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// Load the list stored under `key`
    ///
    /// An absent key yields an empty list. A value that fails to
    /// deserialize is logged and degrades to an empty list for that key
    /// only; it never takes the rest of the subsystem down.
    pub async fn load_list(&self, key: &str) -> Vec<CaseId> {
        let raw = match self.store.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("failed to read {} list from store: {}", key, err);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(ids) => ids.into_iter().map(CaseId::new).collect(),
            Err(err) => {
                warn!("malformed {} list in store, starting empty: {}", key, err);
                Vec::new()
            }
        }
    }

    /// Serialize `items` and write them under `key`
    pub async fn save_list(&self, key: &str, items: &[CaseId]) -> RecaseResult<()> {
        let ids: Vec<&str> = items.iter().map(CaseId::as_str).collect();
        let raw = serde_json::to_string(&ids)?;
        self.store.set(key, &raw).await
    }
}

impl fmt::Debug for ListStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListStore").finish_non_exhaustive()
    }
}
