//! Filesystem Loader
//!
//! Builds an [`FsTree`] from an archive's member list, in archive order.

use std::path::Path;

use crate::archive::{ArchiveError, ArchiveSource, TarArchive};

use super::tree::FsTree;

/// Build a tree from every member of `source`.
pub fn load_tree<S: ArchiveSource + ?Sized>(source: &mut S) -> Result<FsTree, ArchiveError> {
    let mut tree = FsTree::new();
    let mut loaded = 0usize;
    let mut skipped = 0usize;
    while let Some(member) = source.next_member()? {
        if tree.insert_member(&member.path, member.is_directory) {
            loaded += 1;
        } else {
            log::debug!("skipped archive member '{}'", member.path);
            skipped += 1;
        }
    }
    log::info!(
        "loaded {} archive members ({} skipped), {} nodes",
        loaded,
        skipped,
        tree.node_count()
    );
    Ok(tree)
}

/// Open a tar (optionally gzip-compressed) archive and build its tree.
pub fn load_tar(path: impl AsRef<Path>) -> Result<FsTree, ArchiveError> {
    let path = path.as_ref();
    log::debug!("opening archive {}", path.display());
    let mut archive = TarArchive::open(path)?;
    load_tree(&mut archive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::testutil::{gzip, TarBuilder};
    use crate::archive::{ArchiveMember, MemberList};
    use crate::fs::Lookup;
    use std::io::Write;

    #[test]
    fn test_every_member_is_reachable_with_its_kind() {
        let members = vec![
            ArchiveMember::file("fs/demo1"),
            ArchiveMember::file("fs/demo2"),
            ArchiveMember::directory("fs/inner/"),
            ArchiveMember::file("/docs/readme.md"),
            ArchiveMember::directory("docs/guides"),
            ArchiveMember::file("./top.txt"),
        ];
        let tree = load_tree(&mut MemberList::new(members.clone())).unwrap();
        for member in &members {
            let found = tree.lookup(&member.path);
            if member.is_directory {
                assert!(found.is_directory(), "{} should be a directory", member.path);
            } else {
                assert_eq!(found, Lookup::File, "{} should be a file", member.path);
            }
        }
    }

    #[test]
    fn test_load_tar_file() {
        let bytes = TarBuilder::new()
            .file("fs/demo1", b"1")
            .file("fs/demo2", b"2")
            .dir("fs/inner")
            .finish();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&bytes).unwrap();

        let tree = load_tar(file.path()).unwrap();
        assert!(tree.lookup("/fs/inner").is_directory());
        assert_eq!(tree.lookup("/fs/demo1"), Lookup::File);
    }

    #[test]
    fn test_load_tar_gz_file() {
        let bytes = TarBuilder::new().file("a/b.txt", b"").finish();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&gzip(&bytes)).unwrap();

        let tree = load_tar(file.path()).unwrap();
        assert_eq!(tree.lookup("/a/b.txt"), Lookup::File);
    }

    #[test]
    fn test_missing_archive_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_tar(dir.path().join("missing.tar"));
        assert!(matches!(result, Err(ArchiveError::Io(_))));
    }
}
