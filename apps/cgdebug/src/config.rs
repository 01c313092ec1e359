//! Console configuration.
//!
//! Optional TOML file:
//! - Linux: `~/.config/codegame/debug.toml`
//! - macOS: `~/Library/Application Support/codegame/debug.toml`
//! - Windows: `%APPDATA%/codegame/debug.toml`
//!
//! A missing file means defaults; the file is never created.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use cgdebug_protocol::{Severity, SeverityFilter};

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Severities pre-selected in the severity menu.
    #[serde(default = "default_severities")]
    pub severities: Vec<Severity>,

    /// Colorize the rendered log.
    #[serde(default = "default_true")]
    pub color: bool,

    /// Clear the terminal before the log banner.
    #[serde(default = "default_true")]
    pub clear_screen: bool,

    /// Overrides the application-data root holding saved sessions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

fn default_severities() -> Vec<Severity> {
    SeverityFilter::default().iter().collect()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            severities: default_severities(),
            color: default_true(),
            clear_screen: default_true(),
            data_dir: None,
        }
    }
}

impl Config {
    /// Loads the configuration from the platform config directory.
    pub fn load() -> anyhow::Result<Self> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("no config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads the configuration at `path`, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Severities pre-selected in the severity menu.
    pub fn severity_filter(&self) -> SeverityFilter {
        self.severities.iter().copied().collect()
    }
}

/// Returns the platform-specific configuration file path.
fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("codegame").join("debug.toml"))
}
