//! Greedy pruning engine
//!
//! Repeatedly removes the most redundant member of the closest pair until the
//! smallest remaining distance exceeds the cutoff.

mod engine;
mod error;
mod tie;

pub use engine::{prune, prune_with, PruneConfig, PruneOutcome, PruneReport, RemovalRecord};
pub use error::{PruneError, Result};
pub use tie::{average_distance, break_tie};
