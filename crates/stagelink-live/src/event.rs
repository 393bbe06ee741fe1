//! Session lifecycle notifications.

use serde::{Deserialize, Serialize};

/// Event emitted when the session changes state asynchronously.
///
/// Events fan out to every subscriber of
/// [`LiveSessionController::subscribe`](crate::LiveSessionController::subscribe).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum SessionEvent {
    /// The backend connection came up; the session is now active.
    Activated,
    /// Teardown completed; the session returned to stopped.
    Stopped,
    /// The connection attempt failed; the session returned to stopped.
    /// Retry is an explicit host action.
    ConnectionFailed { reason: String },
    /// An active session dropped unexpectedly; the session returned to
    /// stopped.
    SessionLost { reason: String },
}

impl std::fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionEvent::Activated => write!(f, "activated"),
            SessionEvent::Stopped => write!(f, "stopped"),
            SessionEvent::ConnectionFailed { reason } => {
                write!(f, "connection failed: {}", reason)
            }
            SessionEvent::SessionLost { reason } => write!(f, "session lost: {}", reason),
        }
    }
}
