//! Archive Sources
//!
//! The loader only needs each member's path and whether it is a directory.
//! Any format that can produce that sequence implements [`ArchiveSource`].

pub mod tar;

#[cfg(test)]
pub(crate) mod testutil;

use std::io;
use thiserror::Error;

pub use self::tar::TarArchive;

/// Errors raised while reading an archive's member list.
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("cannot read archive: {0}")]
    Io(#[from] io::Error),

    #[error("invalid tar header checksum at offset {offset}")]
    InvalidHeader { offset: u64 },

    #[error("unexpected end of archive while reading '{path}'")]
    Truncated { path: String },

    #[error("corrupt gzip stream: {0}")]
    Decompress(#[source] io::Error),
}

/// One entry of an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveMember {
    pub path: String,
    pub is_directory: bool,
}

impl ArchiveMember {
    pub fn file(path: impl Into<String>) -> Self {
        Self { path: path.into(), is_directory: false }
    }

    pub fn directory(path: impl Into<String>) -> Self {
        Self { path: path.into(), is_directory: true }
    }
}

/// Sequential access to an archive's members, in archive order.
pub trait ArchiveSource {
    /// Read the next member, `None` once the archive is exhausted.
    fn next_member(&mut self) -> Result<Option<ArchiveMember>, ArchiveError>;

    /// Read all remaining members.
    fn members(&mut self) -> Result<Vec<ArchiveMember>, ArchiveError> {
        let mut members = Vec::new();
        while let Some(member) = self.next_member()? {
            members.push(member);
        }
        Ok(members)
    }
}

/// A member list held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemberList {
    members: std::vec::IntoIter<ArchiveMember>,
}

impl MemberList {
    pub fn new(members: Vec<ArchiveMember>) -> Self {
        Self { members: members.into_iter() }
    }
}

impl FromIterator<ArchiveMember> for MemberList {
    fn from_iter<I: IntoIterator<Item = ArchiveMember>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl ArchiveSource for MemberList {
    fn next_member(&mut self) -> Result<Option<ArchiveMember>, ArchiveError> {
        Ok(self.members.next())
    }
}
