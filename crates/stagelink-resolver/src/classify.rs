//! Classification of host paths against the live workspace root.

use std::borrow::Cow;

/// Normalize path separators to forward slashes.
///
/// Comparison and rewriting work on the normalized form so results are
/// deterministic across platforms. Borrows when no backslash is present.
pub fn normalize_separators(path: &str) -> Cow<'_, str> {
    if path.contains('\\') {
        Cow::Owned(path.replace('\\', "/"))
    } else {
        Cow::Borrowed(path)
    }
}

/// The workspace root in comparable form: separators normalized, trailing
/// slashes dropped. `None` when the root is empty or consists only of
/// separators (both mean "no workspace configured").
pub(crate) fn live_root(root: &str) -> Option<Cow<'_, str>> {
    let normalized = normalize_separators(root);
    let trimmed_len = normalized.trim_end_matches('/').len();
    if trimmed_len == 0 {
        return None;
    }
    Some(match normalized {
        Cow::Borrowed(s) => Cow::Borrowed(&s[..trimmed_len]),
        Cow::Owned(mut s) => {
            s.truncate(trimmed_len);
            Cow::Owned(s)
        }
    })
}

/// Whether `path` falls inside the live workspace named by `root`, and
/// therefore cannot be resolved as an ordinary local path.
///
/// Pure function of its arguments: no filesystem I/O, safe to call on every
/// path the host resolves. Matching is case-sensitive and segment-aware, so
/// `/live/projectX` is not inside the root `/live/project`. The root itself
/// is live-addressable. Always false when the root is unset or the path is
/// empty.
pub fn is_live_path(path: &str, root: &str) -> bool {
    let Some(root) = live_root(root) else {
        return false;
    };
    if path.is_empty() {
        return false;
    }
    let path = normalize_separators(path);
    match path.strip_prefix(root.as_ref()) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_root_matches_nothing() {
        assert!(!is_live_path("/live/project/scene.usd", ""));
        assert!(!is_live_path("/local/scene.usd", ""));
    }

    #[test]
    fn test_path_under_root() {
        assert!(is_live_path("/live/project/scene.usd", "/live/project"));
        assert!(is_live_path("/live/project/sub/dir/scene.usd", "/live/project"));
    }

    #[test]
    fn test_path_outside_root() {
        assert!(!is_live_path("/local/scene.usd", "/live/project"));
    }

    #[test]
    fn test_root_itself_is_live() {
        assert!(is_live_path("/live/project", "/live/project"));
    }

    #[test]
    fn test_empty_path() {
        assert!(!is_live_path("", "/live/project"));
    }

    #[test]
    fn test_segment_boundary() {
        // A sibling sharing the root as a string prefix is not inside it.
        assert!(!is_live_path("/live/projectX/scene.usd", "/live/project"));
        assert!(!is_live_path("/live/project2", "/live/project"));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!is_live_path("/Live/Project/scene.usd", "/live/project"));
    }

    #[test]
    fn test_backslash_normalization() {
        assert!(is_live_path("\\live\\project\\scene.usd", "/live/project"));
        assert!(is_live_path("/live/project/scene.usd", "\\live\\project"));
    }

    #[test]
    fn test_trailing_slash_on_root() {
        assert!(is_live_path("/live/project/scene.usd", "/live/project/"));
        assert!(is_live_path("/live/project", "/live/project/"));
    }

    #[test]
    fn test_separator_only_root_is_unset() {
        assert!(!is_live_path("/live/project/scene.usd", "/"));
        assert!(!is_live_path("/live/project/scene.usd", "\\"));
    }

    #[test]
    fn test_normalize_separators_borrows_when_clean() {
        assert!(matches!(
            normalize_separators("/live/project"),
            Cow::Borrowed(_)
        ));
        assert_eq!(normalize_separators("a\\b\\c"), "a/b/c");
    }
}
