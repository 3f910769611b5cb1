//! CLI command implementations

mod generate;
mod prune;

#[cfg(test)]
mod tests;

use crate::cli::{Cli, Command, LogLevel};

/// Pick the output level from the global flags; quiet wins over verbose.
fn select_level(quiet: bool, verbose: bool) -> LogLevel {
    if quiet {
        LogLevel::Quiet
    } else if verbose {
        LogLevel::Verbose
    } else {
        LogLevel::Normal
    }
}

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = select_level(cli.quiet, cli.verbose);

    match cli.command {
        Command::Generate(args) => generate::run_generate(args, log_level),
        Command::Prune(args) => prune::run_prune(args, log_level),
    }
}
