//! Pruning error types

use thiserror::Error;

/// Errors raised during a pruning run
#[derive(Debug, Error)]
pub enum PruneError {
    #[error("Invalid cutoff: {0} (must be in [0.0, 1.0])")]
    InvalidCutoff(f64),

    #[error("Average distance is undefined for a matrix with fewer than 2 items")]
    NoComparisons,

    #[error("Unknown or removed label: {0}")]
    UnknownLabel(String),

    #[error("Tie-breaker called with no tied pairs")]
    EmptyTieSet,
}

/// Result type for pruning operations
pub type Result<T> = std::result::Result<T, PruneError>;
