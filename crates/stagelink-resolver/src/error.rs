//! Resolver error types.

use thiserror::Error;

/// Result type alias for resolver operations.
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Errors that can occur when rewriting a path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The path is not inside the configured live workspace. Callers are
    /// expected to classify first; hitting this is a caller error.
    #[error("path '{0}' is not inside the configured live workspace")]
    NotInWorkspace(String),
}
