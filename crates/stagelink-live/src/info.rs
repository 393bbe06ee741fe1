//! Connection parameters for a live session.

use serde::{Deserialize, Serialize};
use stagelink_config::LiveSettings;

/// Immutable connection parameters passed when starting a live session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveSessionInfo {
    /// Live-session endpoint URL.
    pub live_url: String,

    /// Asset storage URL. Empty when the live server handles storage itself.
    pub storage_url: String,

    /// Channel joined by this client.
    pub channel_id: String,

    /// Identity presented to the live server.
    pub user_id: String,
}

impl LiveSessionInfo {
    /// Build session info from live-server settings.
    ///
    /// The endpoint URL comes from the settings' effective server URL
    /// (env override included); the user id is the configured prefix plus a
    /// random v4 UUID, unique per start.
    pub fn from_settings(settings: &LiveSettings) -> Self {
        Self {
            live_url: settings.live_url(),
            storage_url: String::new(),
            channel_id: settings.channel_id.clone(),
            user_id: format!("{}_{}", settings.user_prefix, uuid::Uuid::new_v4()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_settings() {
        let settings = LiveSettings::new()
            .with_server_url("http://studio.local")
            .with_channel_id("Blender")
            .with_user_prefix("BlenderUser");

        let info = LiveSessionInfo::from_settings(&settings);
        assert_eq!(info.live_url, "http://studio.local/workspace/live");
        assert_eq!(info.storage_url, "");
        assert_eq!(info.channel_id, "Blender");
        assert!(info.user_id.starts_with("BlenderUser_"));
    }

    #[test]
    fn test_user_id_unique_per_start() {
        let settings = LiveSettings::new().with_server_url("http://studio.local");
        let a = LiveSessionInfo::from_settings(&settings);
        let b = LiveSessionInfo::from_settings(&settings);
        assert_ne!(a.user_id, b.user_id);
    }
}
