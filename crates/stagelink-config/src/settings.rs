//! Live-server settings.
//!
//! Controls the live-session server URL, the channel joined by this client,
//! the generated user identity, and the heartbeat cadence.
//!
//! # Configuration
//!
//! ```toml
//! [live]
//! server_url = "http://studio.example.com"
//! channel_id = "Studio"
//! user_prefix = "StudioUser"
//! heartbeat_interval_ms = 500
//! ```
//!
//! # Environment Variables
//!
//! - `STAGELINK_SERVER_URL` - Override the live server base URL
//! - `STAGELINK_PRIORITIZE_CONFIG` - Prefer the configured URL over the
//!   environment variable ("1"/"true")

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default live server base URL when neither config nor env provide one.
pub const DEFAULT_SERVER_URL: &str = "http://localhost";

/// Default channel joined when starting a live session.
pub const DEFAULT_CHANNEL_ID: &str = "Studio";

/// Default prefix for generated user identities.
pub const DEFAULT_USER_PREFIX: &str = "StudioUser";

/// Default heartbeat cadence in milliseconds.
pub const DEFAULT_HEARTBEAT_MS: u64 = 500;

/// Environment variable overriding the live server base URL.
pub const SERVER_URL_ENV: &str = "STAGELINK_SERVER_URL";

/// Environment variable that flips URL precedence back to the config file.
pub const PRIORITIZE_CONFIG_ENV: &str = "STAGELINK_PRIORITIZE_CONFIG";

/// Path appended to the base URL to reach the live-session endpoint.
pub const LIVE_ENDPOINT: &str = "/workspace/live";

/// Top-level config file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StagelinkConfig {
    /// Initial workspace root. Empty when absent.
    pub workspace_path: Option<String>,

    /// Live-server settings.
    pub live: LiveSettings,
}

impl StagelinkConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

/// Live-server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveSettings {
    /// Live server base URL.
    /// Default: unset (falls back to `STAGELINK_SERVER_URL`, then
    /// `http://localhost`).
    pub server_url: Option<String>,

    /// Channel joined when starting a live session.
    /// Default: `"Studio"`
    pub channel_id: String,

    /// Prefix for generated user identities.
    /// Default: `"StudioUser"`
    pub user_prefix: String,

    /// Heartbeat cadence in milliseconds.
    /// Default: 500
    pub heartbeat_interval_ms: u64,
}

impl Default for LiveSettings {
    fn default() -> Self {
        Self {
            server_url: None,
            channel_id: DEFAULT_CHANNEL_ID.to_string(),
            user_prefix: DEFAULT_USER_PREFIX.to_string(),
            heartbeat_interval_ms: DEFAULT_HEARTBEAT_MS,
        }
    }
}

impl LiveSettings {
    /// Create settings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the live server base URL.
    pub fn with_server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Set the channel joined when starting a live session.
    pub fn with_channel_id(mut self, channel: impl Into<String>) -> Self {
        self.channel_id = channel.into();
        self
    }

    /// Set the prefix for generated user identities.
    pub fn with_user_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_prefix = prefix.into();
        self
    }

    /// Set the heartbeat cadence.
    pub fn with_heartbeat_interval(mut self, interval: Duration) -> Self {
        self.heartbeat_interval_ms = interval.as_millis() as u64;
        self
    }

    /// Get the heartbeat cadence as a [`Duration`].
    pub fn heartbeat_interval(&self) -> Duration {
        Duration::from_millis(self.heartbeat_interval_ms)
    }

    /// Get the effective live server base URL.
    ///
    /// Resolution order:
    /// 1. `STAGELINK_SERVER_URL` environment variable, unless
    ///    `STAGELINK_PRIORITIZE_CONFIG` is set and a configured URL exists
    /// 2. Configured `server_url` value
    /// 3. `STAGELINK_SERVER_URL` again (as a fallback when config preferred
    ///    but absent)
    /// 4. Default: `http://localhost`
    pub fn effective_server_url(&self) -> String {
        let env_url = std::env::var(SERVER_URL_ENV)
            .ok()
            .filter(|url| !url.is_empty());
        let configured = self
            .server_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .map(str::to_string);
        let prefer_config = std::env::var(PRIORITIZE_CONFIG_ENV)
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        if let Some(env_url) = &env_url {
            if !prefer_config {
                return env_url.clone();
            }
        }
        if let Some(configured) = configured {
            return configured;
        }
        env_url.unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
    }

    /// Get the effective live-session endpoint URL (base URL + live path).
    pub fn live_url(&self) -> String {
        let base = self.effective_server_url();
        format!("{}{}", base.trim_end_matches('/'), LIVE_ENDPOINT)
    }
}

/// Load a config from a specific file path.
///
/// A missing file yields the default config; a present but malformed file is
/// an error.
pub fn load_config(path: &Path) -> Result<StagelinkConfig> {
    if !path.exists() {
        return Ok(StagelinkConfig::default());
    }
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.display().to_string(),
        source: e,
    })?;
    StagelinkConfig::from_toml(&contents)
}
