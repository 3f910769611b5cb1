//! Podar: greedy distance-matrix pruning
//!
//! Reduces a symmetric pairwise-distance matrix by repeatedly discarding the
//! item involved in the current smallest distance, until every remaining pair
//! is further apart than a cutoff. Useful for de-duplicating near-identical
//! entities (e.g. near-identical genomes) while keeping maximal diversity.
//!
//! The algorithm is a greedy heuristic, not a minimal vertex cover: each pass
//! finds the global minimum off-diagonal distance, breaks ties by removing
//! the item with the lowest average distance to the rest of the population
//! (the most redundant one), and re-scans. Re-scanning after every removal is
//! deliberate so later passes see updated averages.
//!
//! ```
//! use podar::matrix::DistanceMatrix;
//! use podar::prune::prune;
//!
//! let labels = vec!["A".to_string(), "B".to_string(), "C".to_string()];
//! let rows = vec![
//!     vec![0.0, 0.02, 0.08],
//!     vec![0.02, 0.0, 0.07],
//!     vec![0.08, 0.07, 0.0],
//! ];
//! let matrix = DistanceMatrix::from_rows(labels, rows).unwrap();
//! let outcome = prune(matrix, 0.05).unwrap();
//! assert_eq!(outcome.matrix.len(), 2);
//! assert_eq!(outcome.log[0].label, "B");
//! ```

pub mod cli;
pub mod generate;
pub mod matrix;
pub mod prune;
pub mod render;

pub use matrix::{DistanceMatrix, MatrixError};
pub use prune::{prune, prune_with, PruneConfig, PruneError, PruneOutcome, RemovalRecord};
