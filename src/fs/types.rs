//! File System Types
//!
//! Core types for the virtual file system tree.

use std::collections::BTreeMap;
use thiserror::Error;

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("ENOENT: no such file or directory, {operation} '{path}'")]
    NotFound { path: String, operation: String },

    #[error("EEXIST: file already exists, {operation} '{path}'")]
    AlreadyExists { path: String, operation: String },

    #[error("ENOTDIR: not a directory, {operation} '{path}'")]
    NotDirectory { path: String, operation: String },

    #[error("EINVAL: invalid name, {operation} '{name}'")]
    InvalidName { name: String, operation: String },
}

/// A node of the tree.
///
/// Directories own their children keyed by name. Files carry nothing: only
/// the name and kind of archive members are modeled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsNode {
    File,
    Directory(BTreeMap<String, FsNode>),
}

impl FsNode {
    pub fn empty_dir() -> Self {
        FsNode::Directory(BTreeMap::new())
    }

    pub fn is_file(&self) -> bool {
        matches!(self, FsNode::File)
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, FsNode::Directory(_))
    }

    /// Children of a directory, `None` for files.
    pub fn children(&self) -> Option<&BTreeMap<String, FsNode>> {
        match self {
            FsNode::Directory(children) => Some(children),
            FsNode::File => None,
        }
    }
}

/// Outcome of looking a path up in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// Some segment does not exist, or a file appears before the last segment.
    Missing,
    File,
    Directory(&'a BTreeMap<String, FsNode>),
}

impl<'a> Lookup<'a> {
    pub fn is_directory(&self) -> bool {
        matches!(self, Lookup::Directory(_))
    }
}
