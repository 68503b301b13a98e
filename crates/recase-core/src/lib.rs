//! Recase core library
//!
//! This crate provides the core functionality for recase: the case-style
//! registry type consumed from the host, the ranked-list memory for pinned
//! and recently used styles, and the scoped preference store both lists are
//! persisted through.

pub mod cases;
pub mod error;
pub mod ranking;
pub mod store;
pub mod transform;

// Re-export commonly used types
pub use cases::{CaseId, CaseRegistry, CaseStyle};
pub use error::{RecaseError, RecaseResult};
pub use ranking::{
    DEFAULT_RECENT_CAPACITY, PINNED_KEY, PinnedList, RECENT_KEY, RecentList, StyleSections,
    StyleTracker,
};
pub use store::{JsonFileStore, ListStore, MemoryStore, PreferenceStore};
pub use transform::apply_to_lines;
