//! Shell Module
//!
//! The command interpreter and the pieces it talks to: current-directory
//! state, the message catalog and output sinks.

pub mod interpreter;
pub mod messages;
pub mod output;
pub mod state;

pub use interpreter::{Shell, ShellStatus, EXIT_COMMAND_NOT_FOUND};
pub use messages::Locale;
pub use output::{BufferSink, ConsoleSink, OutputSink};
pub use state::ShellState;
