//! cd - Change directory
//!
//! - `cd` / `cd /` - go to the root
//! - `cd <path>` - relative to the current directory, or absolute;
//!   `.` and `..` are collapsed before the target is checked

use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::resolve_path;

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let locale = ctx.locale;
        let target = ctx.arg(0).unwrap_or("/");

        if target == "/" {
            ctx.state.reset_to_root();
            return CommandResult::line(locale.moved_to("/"));
        }

        let normalized = resolve_path(ctx.state.cwd().as_str(), target);
        match ctx.state.change_dir(&normalized) {
            Ok(dir) => {
                log::debug!("cd: now in {}", dir);
                CommandResult::line(locale.moved_to(dir.as_str()))
            }
            Err(e) => {
                log::debug!("cd: {}", e);
                CommandResult::error(locale.no_such_directory(target))
            }
        }
    }
}
