//! CLI command handlers.

pub mod classify;
pub mod config;
pub mod open;
pub mod unresolve;

use stagelink_config::LiveSettings;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Workspace root in effect (flag, env, or config file). Empty = unset.
    pub workspace_root: String,
    /// Live-server settings from the config file.
    pub settings: LiveSettings,
    /// Output as JSON for scripting.
    pub json_output: bool,
}
