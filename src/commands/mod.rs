// src/commands/mod.rs
pub mod cd;
pub mod chmod;
pub mod chown;
pub mod exit_cmd;
pub mod ls;
pub mod mkdir;
pub mod registry;
pub mod types;

pub use registry::CommandRegistry;
pub use types::{Command, CommandContext, CommandResult};
