//! Preference store location

use std::path::PathBuf;
use tracing::debug;

/// File name of the preferences store inside the data directory
pub const STORE_FILE: &str = "preferences.json";

/// Resolve the preferences file path
///
/// Priority: explicit override (flag or `RECASE_STORE_PATH`), then
/// `$RECASE_DATA_DIR`, then the platform data directory.
pub fn store_path(override_path: Option<PathBuf>) -> PathBuf {
    let path = if let Some(path) = override_path {
        path
    } else if let Ok(dir) = std::env::var("RECASE_DATA_DIR") {
        PathBuf::from(dir).join(STORE_FILE)
    } else {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("recase")
            .join(STORE_FILE)
    };
    debug!("using preference store at {}", path.display());
    path
}
