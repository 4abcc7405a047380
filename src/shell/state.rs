use crate::fs::{DirPath, FsError, FsTree};

/// The tree plus the current directory, owned by one shell.
///
/// The current directory can only be replaced through [`ShellState::change_dir`],
/// which resolves the target first, so it always names a directory.
#[derive(Debug, Clone)]
pub struct ShellState {
    tree: FsTree,
    cwd: DirPath,
}

impl ShellState {
    pub fn new(tree: FsTree) -> Self {
        Self { tree, cwd: DirPath::root() }
    }

    pub fn cwd(&self) -> &DirPath {
        &self.cwd
    }

    pub fn tree(&self) -> &FsTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut FsTree {
        &mut self.tree
    }

    /// Resolve `path` and commit it as the current directory.
    ///
    /// On failure the current directory is left untouched.
    pub fn change_dir(&mut self, path: &str) -> Result<&DirPath, FsError> {
        self.cwd = self.tree.resolve_dir(path)?;
        Ok(&self.cwd)
    }

    pub fn reset_to_root(&mut self) {
        self.cwd = DirPath::root();
    }
}
