//! virtual-shell - A shell simulator over an archive's directory tree
//!
//! The archive's member list is loaded into an in-memory tree once; a small
//! command interpreter (`ls`, `cd`, `mkdir`, `chmod`, `chown`, `exit`) then
//! navigates and extends it. Output goes to a pluggable line sink.

pub mod archive;
pub mod commands;
pub mod fs;
pub mod logging;
pub mod session;
pub mod shell;

pub use archive::{ArchiveError, ArchiveMember, ArchiveSource, MemberList, TarArchive};
pub use fs::{DirPath, FsError, FsNode, FsTree, Lookup};
pub use session::{SessionConfig, SessionError};
pub use shell::{BufferSink, ConsoleSink, Locale, OutputSink, Shell, ShellStatus};
