//! Preference store backends
//!
//! A scoped string key-value capability used purely as a preferences
//! cache. Two implementations: an in-memory map for tests and ephemeral
//! runs, and a single JSON file for durable storage. Durability is
//! best-effort; callers treat writes as fire-and-forget.

mod lists;

pub use lists::ListStore;

use crate::error::{RecaseError, RecaseResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::RwLock;
use tracing::warn;

/// Scoped key-value store capability
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Read the value stored under `key`, if any
    async fn get(&self, key: &str) -> RecaseResult<Option<String>>;

    /// Write `value` under `key`
    async fn set(&self, key: &str, value: &str) -> RecaseResult<()>;
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceStore for MemoryStore {
    async fn get(&self, key: &str) -> RecaseResult<Option<String>> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> RecaseResult<()> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a single JSON file holding a string-to-string map
///
/// The parent directory is created on first write. A file that fails to
/// parse is treated as empty; corrupt preferences must not take the tool
/// down.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store over the given file path
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_map(&self) -> RecaseResult<HashMap<String, String>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(HashMap::new());
            }
            Err(err) => {
                return Err(RecaseError::io(
                    format!("failed to read preference store: {}", err),
                    Some(self.path.display().to_string()),
                ));
            }
        };

        match serde_json::from_str(&content) {
            Ok(map) => Ok(map),
            Err(err) => {
                warn!(
                    "preference store {} is corrupt, starting empty: {}",
                    self.path.display(),
                    err
                );
                Ok(HashMap::new())
            }
        }
    }

    async fn write_map(&self, map: &HashMap<String, String>) -> RecaseResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(|err| {
                RecaseError::io(
                    format!("failed to create store directory: {}", err),
                    Some(parent.display().to_string()),
                )
            })?;
        }

        let content = serde_json::to_string_pretty(map)?;
        fs::write(&self.path, content).await.map_err(|err| {
            RecaseError::io(
                format!("failed to write preference store: {}", err),
                Some(self.path.display().to_string()),
            )
        })
    }
}

#[async_trait]
impl PreferenceStore for JsonFileStore {
    async fn get(&self, key: &str) -> RecaseResult<Option<String>> {
        let mut map = self.read_map().await?;
        Ok(map.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> RecaseResult<()> {
        let mut map = self.read_map().await?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map).await
    }
}
