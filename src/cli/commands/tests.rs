//! CLI command tests
//!
//! Dispatch and output-level coverage for `run_command`.

use super::*;
use crate::cli::{GenerateArgs, OutputFormat, PruneArgs};

fn prune_args(cutoff: f64) -> PruneArgs {
    PruneArgs {
        size: 6,
        cutoff,
        seed: Some(42),
        retain: None,
        format: OutputFormat::Text,
    }
}

#[test]
fn test_select_level_defaults_to_normal() {
    assert_eq!(select_level(false, false), LogLevel::Normal);
}

#[test]
fn test_select_level_verbose() {
    assert_eq!(select_level(false, true), LogLevel::Verbose);
}

#[test]
fn test_select_level_quiet_wins_over_verbose() {
    assert_eq!(select_level(true, false), LogLevel::Quiet);
    assert_eq!(select_level(true, true), LogLevel::Quiet);
}

#[test]
fn test_run_command_generate() {
    let cli = Cli {
        command: Command::Generate(GenerateArgs { size: 5, seed: Some(1) }),
        verbose: false,
        quiet: true,
    };
    assert!(run_command(cli).is_ok());
}

#[test]
fn test_run_command_prune() {
    let cli = Cli {
        command: Command::Prune(prune_args(0.05)),
        verbose: false,
        quiet: true,
    };
    assert!(run_command(cli).is_ok());
}

#[test]
fn test_run_command_prune_json_quiet() {
    let mut args = prune_args(0.05);
    args.format = OutputFormat::Json;
    let cli = Cli {
        command: Command::Prune(args),
        verbose: false,
        quiet: true,
    };
    assert!(run_command(cli).is_ok());
}

#[test]
fn test_run_command_prune_invalid_cutoff() {
    let cli = Cli {
        command: Command::Prune(prune_args(1.5)),
        verbose: false,
        quiet: true,
    };
    let err = run_command(cli).expect_err("cutoff above 1.0 should fail");
    assert!(err.contains("Prune failed"));
    assert!(err.contains("Invalid cutoff"));
}
