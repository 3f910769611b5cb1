//! Podar CLI
//!
//! Demo entry point for the greedy distance-matrix pruner.
//!
//! # Usage
//!
//! ```bash
//! # Print a random 10x10 distance matrix
//! podar generate --size 10 --seed 42
//!
//! # Generate and prune with a cutoff
//! podar prune --size 10 --cutoff 0.05 --seed 42
//!
//! # Keep the 5 most different items, report as JSON
//! podar prune --size 20 --cutoff 1.0 --retain 5 --format json
//! ```

use clap::Parser;
use podar::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
