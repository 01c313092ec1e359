//! Saved CodeGame player sessions.
//!
//! Provides read-only lookup of the credential files other CodeGame tools
//! write when a player joins a game, so the debug console can attach to a
//! player without retyping its secret.

pub mod error;
pub mod escape;
pub mod record;
pub mod store;

pub use error::StoreError;
pub use escape::{path_escape, path_unescape};
pub use record::SessionRecord;
pub use store::{SessionSource, SessionStore, default_data_root};
