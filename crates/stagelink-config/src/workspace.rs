//! Workspace root state shared between path resolution and session control.

use parking_lot::RwLock;

/// The currently configured live workspace root.
///
/// The root is a logical path prefix naming the shared live-editing space.
/// An empty root means no workspace is configured, in which case nothing is
/// redirected into the live session. The value is guarded by a lock so a
/// replacement is always observed whole; readers never see a partial update.
///
/// No filesystem validation happens here. Whether the root exists on disk is
/// a consumer concern.
#[derive(Debug, Default)]
pub struct WorkspaceConfig {
    root: RwLock<String>,
}

impl WorkspaceConfig {
    /// Create a config with no workspace set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config with an initial workspace root.
    pub fn with_root(root: impl Into<String>) -> Self {
        Self {
            root: RwLock::new(root.into()),
        }
    }

    /// Replace the workspace root.
    ///
    /// Accepts any string, including empty (meaning "unset"). Takes effect
    /// immediately for subsequent classification and rewriting; paths already
    /// rewritten are unaffected.
    pub fn set_workspace_path(&self, path: impl Into<String>) {
        *self.root.write() = path.into();
    }

    /// Get the current workspace root. Empty when unset.
    pub fn workspace_path(&self) -> String {
        self.root.read().clone()
    }

    /// Whether a workspace root is currently set.
    pub fn is_configured(&self) -> bool {
        !self.root.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unset() {
        let config = WorkspaceConfig::new();
        assert_eq!(config.workspace_path(), "");
        assert!(!config.is_configured());
    }

    #[test]
    fn test_set_and_read_back() {
        let config = WorkspaceConfig::new();
        config.set_workspace_path("/live/project");

        assert_eq!(config.workspace_path(), "/live/project");
        assert!(config.is_configured());
    }

    #[test]
    fn test_empty_unsets() {
        let config = WorkspaceConfig::with_root("/live/project");
        config.set_workspace_path("");

        assert!(!config.is_configured());
    }

    #[test]
    fn test_replacement_is_whole() {
        let config = WorkspaceConfig::with_root("/live/a");
        config.set_workspace_path("/live/b");

        assert_eq!(config.workspace_path(), "/live/b");
    }
}
