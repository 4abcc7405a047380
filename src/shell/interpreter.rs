//! Command Interpreter
//!
//! Splits a command line into a verb and its arguments, dispatches to the
//! registered command and forwards the resulting lines to an output sink.

use std::path::Path;

use crate::archive::{ArchiveError, ArchiveSource};
use crate::commands::{CommandContext, CommandRegistry, CommandResult};
use crate::fs::{load_tar, load_tree, DirPath, FsTree};

use super::messages::Locale;
use super::output::OutputSink;
use super::state::ShellState;

/// Exit code reported for unknown verbs.
pub const EXIT_COMMAND_NOT_FOUND: i32 = 127;

/// Whether the session should keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellStatus {
    Continue,
    Exit,
}

/// One interactive session over one tree.
pub struct Shell {
    state: ShellState,
    registry: CommandRegistry,
    locale: Locale,
    exited: bool,
}

impl Shell {
    pub fn new(tree: FsTree) -> Self {
        Self {
            state: ShellState::new(tree),
            registry: CommandRegistry::with_builtins(),
            locale: Locale::default(),
            exited: false,
        }
    }

    /// Build the tree from any archive source.
    pub fn from_source<S: ArchiveSource + ?Sized>(source: &mut S) -> Result<Self, ArchiveError> {
        Ok(Self::new(load_tree(source)?))
    }

    /// Build the tree from a tar or tar.gz file.
    pub fn from_tar(path: impl AsRef<Path>) -> Result<Self, ArchiveError> {
        Ok(Self::new(load_tar(path)?))
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn cwd(&self) -> &DirPath {
        self.state.cwd()
    }

    pub fn tree(&self) -> &FsTree {
        self.state.tree()
    }

    pub fn has_exited(&self) -> bool {
        self.exited
    }

    /// Execute one command line, emitting its output to `out`.
    pub fn execute(&mut self, line: &str, out: &mut dyn OutputSink) -> ShellStatus {
        let result = self.run(line);
        for l in &result.lines {
            out.emit_line(l);
        }
        if result.exit_session {
            ShellStatus::Exit
        } else {
            ShellStatus::Continue
        }
    }

    /// Execute one command line and return its result without emitting it.
    pub fn run(&mut self, line: &str) -> CommandResult {
        if self.exited {
            log::warn!("ignoring '{}': session already exited", line.trim());
            return CommandResult::exit();
        }

        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return CommandResult::success(Vec::new());
        };
        let args: Vec<String> = words.map(str::to_string).collect();

        let Some(command) = self.registry.get(verb) else {
            log::debug!("unknown command '{}'", verb);
            return CommandResult::with_exit_code(
                vec![self.locale.command_not_found(verb)],
                EXIT_COMMAND_NOT_FOUND,
            );
        };

        log::debug!("{} {:?} (cwd {})", verb, args, self.state.cwd());
        let result = command.execute(CommandContext {
            args: &args,
            state: &mut self.state,
            locale: self.locale,
        });

        if result.exit_session {
            self.cleanup();
            self.exited = true;
        }
        result
    }

    /// Release session resources before exit. Nothing is held yet.
    fn cleanup(&mut self) {
        log::debug!("session cleanup (cwd {})", self.state.cwd());
    }
}
