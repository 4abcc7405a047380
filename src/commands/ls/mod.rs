// src/commands/ls/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::FsError;

/// Lists the current directory, one name per line in sorted order.
/// Arguments are ignored.
pub struct LsCommand;

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let locale = ctx.locale;
        let cwd = ctx.state.cwd();
        match ctx.state.tree().list(cwd) {
            Ok(names) if names.is_empty() => CommandResult::line(locale.empty_directory()),
            Ok(names) => CommandResult::success(names.into_iter().map(String::from).collect()),
            Err(FsError::NotDirectory { .. }) => CommandResult::error(locale.not_a_directory()),
            Err(e) => {
                log::warn!("cannot list current directory: {}", e);
                CommandResult::error(locale.directory_not_found())
            }
        }
    }
}
