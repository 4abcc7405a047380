// src/commands/chmod/mod.rs
use regex_lite::Regex;
use std::sync::OnceLock;

use crate::commands::{Command, CommandContext, CommandResult};

/// `chmod MODE NAME`: validates the mode and checks that NAME exists in the
/// current directory. Modes are not stored anywhere.
pub struct ChmodCommand;

impl Command for ChmodCommand {
    fn name(&self) -> &'static str {
        "chmod"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let locale = ctx.locale;
        let (Some(mode), Some(name)) = (ctx.arg(0), ctx.arg(1)) else {
            return CommandResult::error(locale.not_enough_arguments("chmod"));
        };

        if !is_valid_mode(mode) {
            return CommandResult::error(locale.invalid_mode(mode));
        }

        if ctx.state.tree().contains(ctx.state.cwd(), name) {
            CommandResult::line(locale.mode_changed(name, mode))
        } else {
            CommandResult::error(locale.chmod_not_found(name))
        }
    }
}

/// Octal (`755`, `0644`) or symbolic (`u+x`, `go-w,a=r`) modes.
fn is_valid_mode(mode: &str) -> bool {
    static MODE_RE: OnceLock<Option<Regex>> = OnceLock::new();
    MODE_RE
        .get_or_init(|| {
            Regex::new(r"^(?:[0-7]{1,4}|[ugoa]*[+\-=][rwxXst]*(?:,[ugoa]*[+\-=][rwxXst]*)*)$").ok()
        })
        .as_ref()
        .is_some_and(|re| re.is_match(mode))
}
