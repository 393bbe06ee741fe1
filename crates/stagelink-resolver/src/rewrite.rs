//! Rewriting live-addressable paths into their canonical session form.

use crate::classify::{live_root, normalize_separators};
use crate::error::{ResolveError, Result};

/// Rewrite a live-addressable path into the canonical form the live backend
/// expects: forward-slash separated, relative to the workspace root, with no
/// leading or trailing slash. The workspace root itself rewrites to the
/// empty string.
///
/// Callers are expected to check [`is_live_path`](crate::is_live_path)
/// first; a path outside the workspace fails with
/// [`ResolveError::NotInWorkspace`].
///
/// Rejoining the root with the returned form reproduces the original path up
/// to separator normalization.
pub fn unresolve(path: &str, root: &str) -> Result<String> {
    let normalized = normalize_separators(path);
    let canonical = live_root(root).and_then(|root| {
        if normalized.is_empty() {
            return None;
        }
        match normalized.strip_prefix(root.as_ref()) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => {
                Some(rest.trim_matches('/').to_string())
            }
            _ => None,
        }
    });
    canonical.ok_or_else(|| ResolveError::NotInWorkspace(path.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::is_live_path;

    #[test]
    fn test_strips_root() {
        assert_eq!(
            unresolve("/live/project/scene.usd", "/live/project").unwrap(),
            "scene.usd"
        );
    }

    #[test]
    fn test_nested_path() {
        assert_eq!(
            unresolve("/live/project/assets/tex/wood.png", "/live/project").unwrap(),
            "assets/tex/wood.png"
        );
    }

    #[test]
    fn test_root_itself_is_empty_canonical() {
        assert_eq!(unresolve("/live/project", "/live/project").unwrap(), "");
    }

    #[test]
    fn test_backslash_input() {
        assert_eq!(
            unresolve("\\live\\project\\scene.usd", "/live/project").unwrap(),
            "scene.usd"
        );
    }

    #[test]
    fn test_outside_root_fails() {
        let err = unresolve("/local/scene.usd", "/live/project").unwrap_err();
        assert_eq!(
            err,
            ResolveError::NotInWorkspace("/local/scene.usd".to_string())
        );
    }

    #[test]
    fn test_unset_root_fails() {
        assert!(unresolve("/live/project/scene.usd", "").is_err());
    }

    #[test]
    fn test_sibling_prefix_fails() {
        assert!(unresolve("/live/projectX/scene.usd", "/live/project").is_err());
    }

    #[test]
    fn test_round_trip() {
        let root = "/live/project";
        for path in [
            "/live/project",
            "/live/project/scene.usd",
            "/live/project/assets/tex/wood.png",
            "\\live\\project\\layers\\fx.usda",
        ] {
            assert!(is_live_path(path, root));
            let canonical = unresolve(path, root).unwrap();
            // The root itself has the empty canonical form; joining drops
            // the empty segment.
            let rejoined = if canonical.is_empty() {
                root.to_string()
            } else {
                format!("{}/{}", root, canonical)
            };
            assert_eq!(rejoined, normalize_separators(path).as_ref());
        }
    }
}
