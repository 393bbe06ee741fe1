//! Live-session error types.

use thiserror::Error;

/// Result type alias for live-session operations.
pub type Result<T> = std::result::Result<T, LiveError>;

/// Errors that can occur when controlling a live session.
#[derive(Debug, Error)]
pub enum LiveError {
    /// Start attempted with no workspace root set. Configure a workspace and
    /// retry.
    #[error("no workspace configured — set a workspace path before starting live mode")]
    NoWorkspaceConfigured,

    /// The backend refused the connection attempt outright.
    #[error("live backend refused connection: {0}")]
    Backend(String),
}
