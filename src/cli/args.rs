//! CLI argument types

use clap::{Parser, Subcommand};

/// Podar: greedy distance-matrix pruning
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "podar")]
#[command(version)]
#[command(about = "Prune a pairwise-distance matrix until every remaining pair exceeds a cutoff")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output (per-removal narration)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Generate and print a random distance matrix
    Generate(GenerateArgs),

    /// Generate a random distance matrix and prune it
    Prune(PruneArgs),
}

/// Arguments for the generate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct GenerateArgs {
    /// Number of items in the matrix
    #[arg(short = 'n', long, default_value = "10")]
    pub size: usize,

    /// Random seed for a reproducible matrix
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the prune command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct PruneArgs {
    /// Number of items in the generated matrix
    #[arg(short = 'n', long, default_value = "10")]
    pub size: usize,

    /// Distance cutoff: pairs at or below it are candidates for removal
    #[arg(short, long, default_value = "0.05")]
    pub cutoff: f64,

    /// Random seed for a reproducible matrix
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop once only this many items remain
    #[arg(long)]
    pub retain: Option<usize>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {s}. Valid formats: text, json")),
        }
    }
}
