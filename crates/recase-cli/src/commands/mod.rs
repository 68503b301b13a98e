//! CLI command handlers

pub mod convert;
pub mod pins;
pub mod recents;
pub mod styles;

use recase_core::{JsonFileStore, PreferenceStore, StyleTracker};
use std::path::PathBuf;
use std::sync::Arc;

/// Open the preference store and load the tracker from it
pub(crate) async fn load_tracker(store_path: PathBuf) -> StyleTracker {
    let store: Arc<dyn PreferenceStore> = Arc::new(JsonFileStore::new(store_path));
    StyleTracker::load(store).await
}
