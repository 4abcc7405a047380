//! In-Memory Tree
//!
//! The virtual filesystem built from an archive's member list. Every command
//! goes through [`FsTree::lookup`] or [`FsTree::resolve_dir`] instead of
//! walking the tree on its own.

use std::collections::BTreeMap;
use std::fmt;

use super::path::{is_valid_name, normalize_path, segments};
use super::types::{FsError, FsNode, Lookup};

/// An absolute, normalized path known to name a directory of some tree.
///
/// Only [`FsTree::resolve_dir`] and [`DirPath::root`] produce values, so a
/// `DirPath` held by the shell always pointed at an existing directory when
/// it was committed. Directories are never removed, so it stays valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirPath(String);

impl DirPath {
    pub fn root() -> Self {
        DirPath("/".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }
}

impl fmt::Display for DirPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tree of directories and file markers rooted at `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsTree {
    root: BTreeMap<String, FsNode>,
}

impl FsTree {
    /// Create a tree holding only the root directory.
    pub fn new() -> Self {
        Self { root: BTreeMap::new() }
    }

    /// Insert one archive member.
    ///
    /// Missing intermediate directories are created; an intermediate that was
    /// loaded as a file is turned into a directory. A directory member never
    /// clears children that are already present. Returns `false` when the
    /// member was skipped because its path names the root or climbs out of it.
    pub fn insert_member(&mut self, path: &str, is_directory: bool) -> bool {
        let parts = segments(path);
        let Some((last, parents)) = parts.split_last() else {
            return false;
        };
        if parts.iter().any(|p| *p == "..") {
            log::warn!("skipping archive member outside the root: {}", path);
            return false;
        }

        let mut current = &mut self.root;
        for part in parents {
            let node = current
                .entry(part.to_string())
                .or_insert_with(FsNode::empty_dir);
            if node.is_file() {
                *node = FsNode::empty_dir();
            }
            let FsNode::Directory(children) = node else {
                return false;
            };
            current = children;
        }

        if is_directory {
            let node = current
                .entry(last.to_string())
                .or_insert_with(FsNode::empty_dir);
            if node.is_file() {
                *node = FsNode::empty_dir();
            }
        } else {
            current.insert(last.to_string(), FsNode::File);
        }
        true
    }

    /// Look up a path, relative paths being taken from the root.
    pub fn lookup(&self, path: &str) -> Lookup<'_> {
        let normalized = normalize_path(path);
        let mut current = &self.root;
        let mut parts = segments(&normalized).into_iter().peekable();
        while let Some(part) = parts.next() {
            match current.get(part) {
                Some(FsNode::Directory(children)) => current = children,
                Some(FsNode::File) if parts.peek().is_none() => return Lookup::File,
                _ => return Lookup::Missing,
            }
        }
        Lookup::Directory(current)
    }

    /// Resolve a path to a directory, producing a committed [`DirPath`].
    pub fn resolve_dir(&self, path: &str) -> Result<DirPath, FsError> {
        let normalized = normalize_path(path);
        match self.lookup(&normalized) {
            Lookup::Directory(_) => Ok(DirPath(normalized)),
            Lookup::File => Err(FsError::NotDirectory {
                path: normalized,
                operation: "chdir".to_string(),
            }),
            Lookup::Missing => Err(FsError::NotFound {
                path: normalized,
                operation: "chdir".to_string(),
            }),
        }
    }

    /// Child names of `dir` in sorted order.
    pub fn list(&self, dir: &DirPath) -> Result<Vec<&str>, FsError> {
        match self.lookup(dir.as_str()) {
            Lookup::Directory(children) => Ok(children.keys().map(String::as_str).collect()),
            Lookup::File => Err(FsError::NotDirectory {
                path: dir.to_string(),
                operation: "scandir".to_string(),
            }),
            Lookup::Missing => Err(FsError::NotFound {
                path: dir.to_string(),
                operation: "scandir".to_string(),
            }),
        }
    }

    /// Check whether `dir` has a child called `name`.
    pub fn contains(&self, dir: &DirPath, name: &str) -> bool {
        match self.lookup(dir.as_str()) {
            Lookup::Directory(children) => children.contains_key(name),
            _ => false,
        }
    }

    /// Create an empty directory `name` inside `dir`.
    pub fn create_dir(&mut self, dir: &DirPath, name: &str) -> Result<(), FsError> {
        if !is_valid_name(name) {
            return Err(FsError::InvalidName {
                name: name.to_string(),
                operation: "mkdir".to_string(),
            });
        }
        let children = self.dir_mut(dir).ok_or_else(|| FsError::NotFound {
            path: dir.to_string(),
            operation: "mkdir".to_string(),
        })?;
        if children.contains_key(name) {
            return Err(FsError::AlreadyExists {
                path: join_child(dir, name),
                operation: "mkdir".to_string(),
            });
        }
        children.insert(name.to_string(), FsNode::empty_dir());
        Ok(())
    }

    /// Total number of nodes below the root.
    pub fn node_count(&self) -> usize {
        fn count(children: &BTreeMap<String, FsNode>) -> usize {
            children
                .values()
                .map(|node| 1 + node.children().map_or(0, count))
                .sum()
        }
        count(&self.root)
    }

    fn dir_mut(&mut self, dir: &DirPath) -> Option<&mut BTreeMap<String, FsNode>> {
        let mut current = &mut self.root;
        for part in segments(dir.as_str()) {
            current = match current.get_mut(part) {
                Some(FsNode::Directory(children)) => children,
                _ => return None,
            };
        }
        Some(current)
    }
}

impl Default for FsTree {
    fn default() -> Self {
        Self::new()
    }
}

fn join_child(dir: &DirPath, name: &str) -> String {
    if dir.is_root() {
        format!("/{}", name)
    } else {
        format!("{}/{}", dir, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_tree() -> FsTree {
        let mut tree = FsTree::new();
        tree.insert_member("fs/demo1", false);
        tree.insert_member("fs/demo2", false);
        tree.insert_member("fs/inner/", true);
        tree
    }

    #[test]
    fn test_insert_creates_intermediate_dirs() {
        let mut tree = FsTree::new();
        assert!(tree.insert_member("a/b/c.txt", false));
        assert!(tree.lookup("/a").is_directory());
        assert!(tree.lookup("/a/b").is_directory());
        assert_eq!(tree.lookup("/a/b/c.txt"), Lookup::File);
    }

    #[test]
    fn test_insert_skips_root_and_escaping_members() {
        let mut tree = FsTree::new();
        assert!(!tree.insert_member("./", true));
        assert!(!tree.insert_member("/", true));
        assert!(!tree.insert_member("../etc/passwd", false));
        assert_eq!(tree.node_count(), 0);
    }

    #[test]
    fn test_directory_member_keeps_existing_children() {
        let mut tree = FsTree::new();
        tree.insert_member("fs/demo1", false);
        tree.insert_member("fs/", true);
        assert_eq!(tree.lookup("/fs/demo1"), Lookup::File);
    }

    #[test]
    fn test_intermediate_file_becomes_directory() {
        let mut tree = FsTree::new();
        tree.insert_member("fs", false);
        tree.insert_member("fs/demo1", false);
        assert!(tree.lookup("/fs").is_directory());
        assert_eq!(tree.lookup("/fs/demo1"), Lookup::File);
    }

    #[test]
    fn test_lookup_through_file_is_missing() {
        let tree = demo_tree();
        assert_eq!(tree.lookup("/fs/demo1/x"), Lookup::Missing);
        assert_eq!(tree.lookup("/nope"), Lookup::Missing);
        assert!(tree.lookup("/").is_directory());
    }

    #[test]
    fn test_resolve_dir() {
        let tree = demo_tree();
        assert_eq!(tree.resolve_dir("/fs/inner").unwrap().as_str(), "/fs/inner");
        assert_eq!(tree.resolve_dir("/fs/inner/..").unwrap().as_str(), "/fs");
        assert!(matches!(
            tree.resolve_dir("/fs/demo1"),
            Err(FsError::NotDirectory { .. })
        ));
        assert!(matches!(
            tree.resolve_dir("/missing"),
            Err(FsError::NotFound { .. })
        ));
    }

    #[test]
    fn test_list_is_sorted() {
        let mut tree = FsTree::new();
        tree.insert_member("zeta", false);
        tree.insert_member("alpha/", true);
        tree.insert_member("Beta", false);
        let names = tree.list(&DirPath::root()).unwrap();
        assert_eq!(names, vec!["Beta", "alpha", "zeta"]);
    }

    #[test]
    fn test_create_dir() {
        let mut tree = demo_tree();
        let fs_dir = tree.resolve_dir("/fs").unwrap();
        tree.create_dir(&fs_dir, "new_folder").unwrap();
        assert!(tree.lookup("/fs/new_folder").is_directory());
        assert_eq!(
            tree.list(&fs_dir).unwrap(),
            vec!["demo1", "demo2", "inner", "new_folder"]
        );
    }

    #[test]
    fn test_create_dir_conflict_does_not_overwrite() {
        let mut tree = demo_tree();
        let fs_dir = tree.resolve_dir("/fs").unwrap();
        let err = tree.create_dir(&fs_dir, "demo1").unwrap_err();
        assert_eq!(
            err,
            FsError::AlreadyExists {
                path: "/fs/demo1".to_string(),
                operation: "mkdir".to_string(),
            }
        );
        assert_eq!(tree.lookup("/fs/demo1"), Lookup::File);
    }

    #[test]
    fn test_create_dir_rejects_bad_names() {
        let mut tree = demo_tree();
        let root = DirPath::root();
        for name in ["", ".", "..", "a/b"] {
            assert!(matches!(
                tree.create_dir(&root, name),
                Err(FsError::InvalidName { .. })
            ));
        }
    }

    #[test]
    fn test_node_count() {
        assert_eq!(demo_tree().node_count(), 4);
    }
}
