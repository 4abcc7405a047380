// src/commands/chown/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};

/// `chown USER GROUP NAME`: reports the change if NAME exists in the current
/// directory. Ownership is not tracked.
pub struct ChownCommand;

impl Command for ChownCommand {
    fn name(&self) -> &'static str {
        "chown"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let locale = ctx.locale;
        let (Some(user), Some(group), Some(name)) = (ctx.arg(0), ctx.arg(1), ctx.arg(2)) else {
            return CommandResult::error(locale.not_enough_arguments("chown"));
        };

        if ctx.state.tree().contains(ctx.state.cwd(), name) {
            CommandResult::line(locale.owner_changed(name, user, group))
        } else {
            CommandResult::error(locale.chown_not_found(name))
        }
    }
}
