//! Saved-session lookup.
//!
//! Sessions live under `<data root>/codegame/games/<escaped endpoint>/<username>.json`.
//! This crate only ever reads them; the tools that create player sessions
//! own writing and deleting.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::StoreError;
use crate::escape::path_escape;
use crate::record::SessionRecord;

/// Read access to saved player sessions, keyed by server endpoint and username.
pub trait SessionSource {
    /// Returns `true` if sessions may have been saved for `endpoint`.
    fn has_sessions(&self, endpoint: &str) -> Result<bool, StoreError> {
        Ok(!self.list_usernames(endpoint)?.is_empty())
    }

    /// Lists the usernames with a saved session for `endpoint`.
    fn list_usernames(&self, endpoint: &str) -> Result<Vec<String>, StoreError>;

    /// Loads the session saved for `username` on `endpoint`.
    fn load_session(&self, endpoint: &str, username: &str) -> Result<SessionRecord, StoreError>;
}

/// Filesystem-backed session store.
#[derive(Debug, Clone)]
pub struct SessionStore {
    games_dir: PathBuf,
}

impl SessionStore {
    /// Creates a store rooted at `data_root` (sessions are read from
    /// `data_root/codegame/games`).
    pub fn new(data_root: impl AsRef<Path>) -> Self {
        Self {
            games_dir: data_root.as_ref().join("codegame").join("games"),
        }
    }

    /// Creates a store rooted at the platform data directory.
    pub fn open_default() -> Result<Self, StoreError> {
        default_data_root().map(Self::new).ok_or(StoreError::NoDataDir)
    }

    /// Directory holding every saved endpoint.
    pub fn games_dir(&self) -> &Path {
        &self.games_dir
    }

    /// Directory holding the sessions of one endpoint.
    pub fn endpoint_dir(&self, endpoint: &str) -> PathBuf {
        self.games_dir.join(path_escape(endpoint))
    }

    /// Path of the record for `username` on `endpoint`.
    pub fn record_path(&self, endpoint: &str, username: &str) -> Result<PathBuf, StoreError> {
        validate_username(username)?;
        Ok(self.endpoint_dir(endpoint).join(format!("{username}.json")))
    }
}

impl SessionSource for SessionStore {
    fn has_sessions(&self, endpoint: &str) -> Result<bool, StoreError> {
        let dir = self.endpoint_dir(endpoint);
        match std::fs::metadata(&dir) {
            Ok(meta) => Ok(meta.is_dir()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => Err(StoreError::Io { path: dir, source }),
        }
    }

    fn list_usernames(&self, endpoint: &str) -> Result<Vec<String>, StoreError> {
        let dir = self.endpoint_dir(endpoint);
        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(endpoint, "no session directory");
                return Ok(Vec::new());
            }
            Err(source) => return Err(StoreError::Io { path: dir, source }),
        };

        let mut usernames = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| StoreError::Io {
                path: dir.clone(),
                source,
            })?;
            let path = entry.path();
            if !path.is_file() || path.extension().is_none_or(|ext| ext != "json") {
                trace!(path = %path.display(), "skipping non-session entry");
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                usernames.push(stem.to_string());
            }
        }
        usernames.sort();

        debug!(endpoint, count = usernames.len(), "listed saved sessions");
        Ok(usernames)
    }

    fn load_session(&self, endpoint: &str, username: &str) -> Result<SessionRecord, StoreError> {
        let path = self.record_path(endpoint, username)?;
        let data = match std::fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound {
                    endpoint: endpoint.to_string(),
                    username: username.to_string(),
                });
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        let record = serde_json::from_str(&data)
            .map_err(|source| StoreError::Corrupt { path: path.clone(), source })?;
        debug!(endpoint, username, "loaded saved session");
        Ok(record)
    }
}

/// Returns the platform application-data root (`$XDG_DATA_HOME` or
/// `~/.local/share` on Linux, `%LOCALAPPDATA%` on Windows).
pub fn default_data_root() -> Option<PathBuf> {
    dirs::data_local_dir()
}

/// Rejects usernames that would leave the endpoint directory.
fn validate_username(username: &str) -> Result<(), StoreError> {
    let invalid = username.is_empty()
        || username == "."
        || username == ".."
        || username.contains(['/', '\\', '\0']);
    if invalid {
        return Err(StoreError::InvalidUsername(username.to_string()));
    }
    Ok(())
}
