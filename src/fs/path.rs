//! Path utilities
//!
//! Pure string operations on slash-separated paths. Nothing here touches the
//! tree; resolution against actual nodes lives in `tree.rs`.

/// Split a path into its name segments, dropping empty and `.` segments.
///
/// `..` is kept as-is; use [`normalize_path`] when it should be collapsed.
pub fn segments(path: &str) -> Vec<&str> {
    path.split('/')
        .filter(|p| !p.is_empty() && *p != ".")
        .collect()
}

/// Normalize a path by resolving `.` and `..` components.
///
/// The result is always absolute. `..` at the root stays at the root.
pub fn normalize_path(path: &str) -> String {
    let mut resolved: Vec<&str> = Vec::new();
    for part in segments(path) {
        if part == ".." {
            resolved.pop();
        } else {
            resolved.push(part);
        }
    }
    if resolved.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", resolved.join("/"))
    }
}

/// Join `target` onto `base` and normalize.
///
/// An absolute `target` replaces `base` entirely.
pub fn resolve_path(base: &str, target: &str) -> String {
    if target.starts_with('/') {
        normalize_path(target)
    } else if base == "/" {
        normalize_path(&format!("/{}", target))
    } else {
        normalize_path(&format!("{}/{}", base, target))
    }
}

/// Check that `name` can be used as a single path segment.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/foo/bar"), "/foo/bar");
        assert_eq!(normalize_path("/foo/../bar"), "/bar");
        assert_eq!(normalize_path("/foo/./bar"), "/foo/bar");
        assert_eq!(normalize_path("/foo/bar/.."), "/foo");
        assert_eq!(normalize_path("/foo/bar/../.."), "/");
        assert_eq!(normalize_path("/foo//bar/"), "/foo/bar");
        assert_eq!(normalize_path("/../.."), "/");
    }

    #[test]
    fn test_resolve_relative() {
        assert_eq!(resolve_path("/", "fs"), "/fs");
        assert_eq!(resolve_path("/fs", "inner"), "/fs/inner");
        assert_eq!(resolve_path("/fs/inner", ".."), "/fs");
        assert_eq!(resolve_path("/fs", "./inner/"), "/fs/inner");
    }

    #[test]
    fn test_resolve_absolute_replaces_base() {
        assert_eq!(resolve_path("/fs/inner", "/other"), "/other");
        assert_eq!(resolve_path("/fs", "/"), "/");
    }

    #[test]
    fn test_segments() {
        assert_eq!(segments("fs/inner/"), vec!["fs", "inner"]);
        assert_eq!(segments("./fs/demo1"), vec!["fs", "demo1"]);
        assert_eq!(segments("/"), Vec::<&str>::new());
        assert_eq!(segments("a/../b"), vec!["a", "..", "b"]);
    }

    #[test]
    fn test_is_valid_name() {
        assert!(is_valid_name("new_folder"));
        assert!(is_valid_name(".hidden"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("."));
        assert!(!is_valid_name(".."));
        assert!(!is_valid_name("a/b"));
    }
}
