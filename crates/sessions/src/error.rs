//! Error types for session storage.

use std::path::PathBuf;

/// Errors produced while reading saved sessions.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read session storage at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no saved session for '{username}' on {endpoint}")]
    NotFound { endpoint: String, username: String },

    #[error("corrupt session record {}: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid username: {0:?}")]
    InvalidUsername(String),

    #[error("could not determine the data directory")]
    NoDataDir,
}
