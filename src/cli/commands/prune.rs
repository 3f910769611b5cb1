//! Prune command implementation

use crate::cli::logging::log;
use crate::cli::{LogLevel, OutputFormat, PruneArgs};
use crate::generate::random_matrix;
use crate::prune::{prune_with, PruneConfig, PruneReport};
use crate::render::{render_kept, render_log, render_matrix};

pub fn run_prune(args: PruneArgs, level: LogLevel) -> Result<(), String> {
    let matrix = random_matrix(args.size, args.seed);

    if args.format == OutputFormat::Text {
        log(level, LogLevel::Normal, "Input matrix:");
        log(level, LogLevel::Normal, &render_matrix(&matrix));
    }

    let mut config = PruneConfig::new(args.cutoff);
    if let Some(retain) = args.retain {
        config = config.with_retain(retain);
    }

    let outcome = prune_with(matrix, &config).map_err(|e| format!("Prune failed: {e}"))?;

    match args.format {
        OutputFormat::Text => {
            for record in &outcome.log {
                log(
                    level,
                    LogLevel::Verbose,
                    &format!(
                        "Removed {} with pairwise distance {:.2} and average distance {:.4}",
                        record.label, record.pairwise_distance, record.average_distance
                    ),
                );
            }
            log(level, LogLevel::Normal, "Removal log:");
            log(level, LogLevel::Normal, &render_log(&outcome.log));
            log(level, LogLevel::Normal, "Kept:");
            log(level, LogLevel::Normal, &render_kept(&outcome.matrix));
            log(level, LogLevel::Normal, "Surviving matrix:");
            log(level, LogLevel::Normal, &render_matrix(&outcome.matrix));
        }
        OutputFormat::Json => {
            // Bypasses the log gate: stdout must hold exactly one JSON
            // document regardless of --verbose/--quiet.
            let report = PruneReport::new(args.cutoff, &outcome);
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| format!("Report serialization failed: {e}"))?;
            println!("{json}");
        }
    }

    Ok(())
}
