//! CLI module for podar
//!
//! Argument definitions, command handlers, and output utilities.

mod args;
mod commands;
mod logging;

pub use args::{Cli, Command, GenerateArgs, OutputFormat, PruneArgs};
pub use commands::run_command;
pub use logging::LogLevel;
