//! Generate command implementation

use crate::cli::logging::log;
use crate::cli::{GenerateArgs, LogLevel};
use crate::generate::random_matrix;
use crate::render::render_matrix;

pub fn run_generate(args: GenerateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Verbose,
        &format!("Generating a {0}x{0} distance matrix", args.size),
    );

    let matrix = random_matrix(args.size, args.seed);
    log(level, LogLevel::Normal, &render_matrix(&matrix));
    Ok(())
}
