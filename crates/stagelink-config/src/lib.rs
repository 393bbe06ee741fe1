//! Configuration for the Stagelink live-session bridge.
//!
//! Provides:
//! - [`WorkspaceConfig`]: the mutable workspace root read by path
//!   classification and session control (empty = unset)
//! - [`LiveSettings`]: TOML-backed live-server settings with env-var
//!   overrides for the server URL
//! - [`load_config`]: file loading with graceful handling of a missing file

pub mod error;
pub mod settings;
pub mod workspace;

pub use error::{ConfigError, Result};
pub use settings::{
    DEFAULT_CHANNEL_ID, DEFAULT_HEARTBEAT_MS, DEFAULT_SERVER_URL, DEFAULT_USER_PREFIX,
    LIVE_ENDPOINT, LiveSettings, PRIORITIZE_CONFIG_ENV, SERVER_URL_ENV, StagelinkConfig,
    load_config,
};
pub use workspace::WorkspaceConfig;
