//! Runtime configuration.
//!
//! The base URL of the backend is resolved in order: the `LIBRIS_API_URL`
//! environment variable, then `~/.config/libris/config.json`, then the
//! built-in localhost default.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Default backend address when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable overriding the backend address.
pub const API_URL_ENV: &str = "LIBRIS_API_URL";

/// Resolved application configuration.
///
/// # Example
///
/// ```ignore
/// use libris::config::Config;
///
/// let config = Config::default().with_api_url("http://10.0.0.5:8000");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the library backend
    pub api_url: String,
    /// Poll interval for dashboard refresh, in seconds
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
}

fn default_refresh_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            refresh_secs: default_refresh_secs(),
        }
    }
}

impl Config {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend base URL.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set the dashboard refresh interval.
    pub fn with_refresh_secs(mut self, secs: u64) -> Self {
        self.refresh_secs = secs;
        self
    }

    /// Resolve configuration: env var, then config file, then defaults.
    pub fn load() -> Self {
        let mut config = Self::from_file().unwrap_or_default();

        if let Ok(url) = std::env::var(API_URL_ENV) {
            let url = url.trim().to_string();
            if !url.is_empty() {
                debug!(%url, "api url taken from environment");
                config.api_url = url;
            }
        }

        config
    }

    /// Path of the on-disk config file, if a config directory exists.
    pub fn file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("libris").join("config.json"))
    }

    fn from_file() -> Option<Self> {
        Self::from_path(&Self::file_path()?)
    }

    /// Load from a specific file; None when missing or malformed.
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(config) => {
                debug!(path = %path.display(), "loaded config file");
                Some(config)
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "ignoring malformed config file");
                None
            }
        }
    }
}
