//! Bridge error types.

use stagelink_live::LiveError;
use stagelink_resolver::ResolveError;
use thiserror::Error;

/// Result type alias for bridge operations.
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Errors surfaced by the bridge.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Path resolution rejected the input.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Live-session control failed.
    #[error(transparent)]
    Live(#[from] LiveError),
}
