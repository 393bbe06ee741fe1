//! Session lifecycle states.

use serde::{Deserialize, Serialize};

/// Lifecycle state of the live session.
///
/// Stopped is both the initial state and the only re-enterable resting
/// state; there is no terminal state. Transitions happen only through
/// `start()`, `stop()`, and the heartbeat `tick()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    /// No session underway. Heartbeat is not registered.
    Stopped,
    /// Start requested; waiting for the backend connection to come up.
    Starting,
    /// Connected; heartbeat drives keep-alive work.
    Active,
    /// Stop requested; teardown completes on the next tick.
    Stopping,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::Stopped => write!(f, "stopped"),
            SessionState::Starting => write!(f, "starting"),
            SessionState::Active => write!(f, "active"),
            SessionState::Stopping => write!(f, "stopping"),
        }
    }
}
