use crate::commands::{Command, CommandContext, CommandResult};

/// Ends the session. The shell runs its cleanup hook before reporting it.
pub struct ExitCommand;

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::exit()
    }
}
