//! Error types for recase operations

use thiserror::Error;

/// Result type alias for recase operations
pub type RecaseResult<T> = Result<T, RecaseError>;

/// Main error type for recase
///
/// Every error is terminal for the user action that triggered it; nothing
/// here is retried. Malformed persisted state never surfaces as an error at
/// all: the store adapter degrades it to an empty list.
#[derive(Error, Debug, Clone)]
pub enum RecaseError {
    /// Neither the argument, stdin, nor the clipboard yielded any text
    #[error("no input: nothing on the clipboard and no text supplied")]
    NoInput,

    /// The requested case style is not in the registry
    #[error("unknown case style: {name}")]
    UnknownCase { name: String },

    /// Preference store read/write failure
    #[error("store error: {message}")]
    Store { message: String },

    /// Clipboard access failure
    #[error("clipboard error: {message}")]
    Clipboard { message: String },

    /// JSON serialization/deserialization failure
    #[error("JSON error: {message}")]
    Json { message: String },

    /// File or terminal I/O failure
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },
}

impl RecaseError {
    /// Create an unknown-case error
    pub fn unknown_case(name: impl Into<String>) -> Self {
        Self::UnknownCase { name: name.into() }
    }

    /// Create a store error
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    /// Create a clipboard error
    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::Clipboard {
            message: message.into(),
        }
    }

    /// Create an IO error with an optional associated path
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }
}

impl From<std::io::Error> for RecaseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            path: None,
        }
    }
}

impl From<serde_json::Error> for RecaseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json {
            message: err.to_string(),
        }
    }
}
