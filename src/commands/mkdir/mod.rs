// src/commands/mkdir/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::FsError;

/// Creates one empty directory in the current directory.
pub struct MkdirCommand;

impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let locale = ctx.locale;
        let name = ctx.arg(0).unwrap_or("");
        if name.is_empty() {
            return CommandResult::error(locale.mkdir_missing_operand());
        }

        let cwd = ctx.state.cwd().clone();
        match ctx.state.tree_mut().create_dir(&cwd, name) {
            Ok(()) => CommandResult::line(locale.dir_created(name)),
            Err(FsError::AlreadyExists { .. }) => CommandResult::error(locale.dir_exists(name)),
            Err(FsError::InvalidName { .. }) => {
                CommandResult::error(locale.invalid_dir_name(name))
            }
            Err(e) => {
                log::warn!("mkdir in {}: {}", cwd, e);
                CommandResult::error(locale.directory_not_found())
            }
        }
    }
}
