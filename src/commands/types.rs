// src/commands/types.rs
use crate::shell::{Locale, ShellState};

/// Result of running one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Lines for the output sink, errors included.
    pub lines: Vec<String>,
    pub exit_code: i32,
    /// Set by `exit`: the session should end.
    pub exit_session: bool,
}

impl CommandResult {
    pub fn success(lines: Vec<String>) -> Self {
        Self { lines, exit_code: 0, exit_session: false }
    }

    pub fn line(line: impl Into<String>) -> Self {
        Self::success(vec![line.into()])
    }

    pub fn error(line: impl Into<String>) -> Self {
        Self::with_exit_code(vec![line.into()], 1)
    }

    pub fn with_exit_code(lines: Vec<String>, exit_code: i32) -> Self {
        Self { lines, exit_code, exit_session: false }
    }

    pub fn exit() -> Self {
        Self { lines: Vec::new(), exit_code: 0, exit_session: true }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Execution context handed to a command.
pub struct CommandContext<'a> {
    pub args: &'a [String],
    pub state: &'a mut ShellState,
    pub locale: Locale,
}

impl<'a> CommandContext<'a> {
    /// The n-th argument, if given.
    pub fn arg(&self, n: usize) -> Option<&'a str> {
        self.args.get(n).map(String::as_str)
    }
}

pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;
    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult;
}
