//! File System Module
//!
//! The in-memory tree the shell navigates. It is built once from archive
//! metadata and afterwards only grows through `mkdir`.

pub mod loader;
pub mod path;
pub mod tree;
pub mod types;

pub use loader::{load_tar, load_tree};
pub use path::{normalize_path, resolve_path};
pub use tree::{DirPath, FsTree};
pub use types::*;
