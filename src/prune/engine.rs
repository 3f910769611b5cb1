//! The pruning loop
//!
//! Each pass scans every live off-diagonal cell for the global minimum
//! distance, collects all pairs tied at that minimum, and (if the minimum is
//! still at or below the cutoff) removes the tie-breaker's pick. The matrix
//! is re-scanned from scratch after every removal — a one-pass rank-and-cut
//! would be cheaper, but re-scanning lets each decision see the averages of
//! the matrix as it currently stands. Cost is O(k·n²) for k removals.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::matrix::DistanceMatrix;

use super::error::{PruneError, Result};
use super::tie::break_tie_indices;

/// One eliminated item, in the state the matrix was in when it went.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemovalRecord {
    /// Label of the removed item.
    pub label: String,
    /// The global minimum distance that triggered the removal.
    pub pairwise_distance: f64,
    /// The item's mean distance to the rest of the population at that moment.
    pub average_distance: f64,
}

/// Configuration for a pruning run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PruneConfig {
    /// Pairs at or below this distance are candidates for elimination.
    cutoff: f64,
    /// Optional floor on the surviving item count; pruning stops early once
    /// only this many items remain.
    retain: Option<usize>,
}

impl PruneConfig {
    /// Create a configuration with the given distance cutoff.
    pub fn new(cutoff: f64) -> Self {
        Self { cutoff, retain: None }
    }

    /// Stop pruning once only `n` items remain, even if close pairs are left.
    ///
    /// Useful for "keep the N most different items" workflows where the
    /// target is a sample size rather than a distance guarantee.
    pub fn with_retain(mut self, n: usize) -> Self {
        self.retain = Some(n);
        self
    }

    /// Get the distance cutoff.
    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Get the retain floor, if any.
    pub fn retain(&self) -> Option<usize> {
        self.retain
    }
}

/// Everything a pruning run produces: the surviving matrix and the ordered
/// log of what was removed, when, and why.
#[derive(Debug, Clone)]
pub struct PruneOutcome {
    pub matrix: DistanceMatrix,
    pub log: Vec<RemovalRecord>,
}

/// Serializable summary of a finished run, for machine-readable output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PruneReport {
    pub cutoff: f64,
    pub removed: Vec<RemovalRecord>,
    pub kept: Vec<String>,
}

impl PruneReport {
    /// Summarize a finished run.
    pub fn new(cutoff: f64, outcome: &PruneOutcome) -> Self {
        Self {
            cutoff,
            removed: outcome.log.clone(),
            kept: outcome.matrix.labels().map(str::to_string).collect(),
        }
    }
}

/// Prune with a plain cutoff. See [`prune_with`].
pub fn prune(matrix: DistanceMatrix, cutoff: f64) -> Result<PruneOutcome> {
    prune_with(matrix, &PruneConfig::new(cutoff))
}

/// Run the greedy elimination loop to completion.
///
/// Terminates when the minimum off-diagonal distance exceeds the cutoff,
/// when fewer than 2 items remain, or when the configured retain floor is
/// reached. A minimum exactly equal to the cutoff does NOT terminate: such a
/// pair is still too close and stays eligible for removal.
pub fn prune_with(mut matrix: DistanceMatrix, config: &PruneConfig) -> Result<PruneOutcome> {
    if !(0.0..=1.0).contains(&config.cutoff) {
        return Err(PruneError::InvalidCutoff(config.cutoff));
    }

    let mut log = Vec::new();
    loop {
        if let Some(floor) = config.retain {
            if matrix.len() <= floor {
                break;
            }
        }
        // No off-diagonal cells left to compare.
        let Some(scan) = scan_minimum(&matrix) else {
            break;
        };
        if scan.minimum > config.cutoff {
            break;
        }
        let (loser, average) = break_tie_indices(&scan.tied, &matrix)?;
        let label = matrix.label_at(loser).to_string();
        matrix.remove_index(loser);
        log.push(RemovalRecord {
            label,
            pairwise_distance: scan.minimum,
            average_distance: average,
        });
        // Scan state is rebuilt from scratch on the next pass.
    }
    Ok(PruneOutcome { matrix, log })
}

/// Result of one full off-diagonal scan.
struct Scan {
    minimum: f64,
    /// Canonical `(i, j)` pairs (`i < j`) tied at the minimum. Rebuilt every
    /// iteration; the canonical key makes {i,j} and {j,i} collide.
    tied: BTreeSet<(usize, usize)>,
}

/// Find the global minimum off-diagonal distance and every pair achieving it.
///
/// Equality is exact: the generating domain pre-truncates distances to two
/// decimal places, so tied cells carry bit-identical values. Returns `None`
/// when fewer than 2 items are live.
fn scan_minimum(matrix: &DistanceMatrix) -> Option<Scan> {
    let live: Vec<usize> = matrix.live_indices().collect();
    let mut minimum = f64::INFINITY;
    let mut tied = BTreeSet::new();
    for (a, &i) in live.iter().enumerate() {
        for &j in &live[a + 1..] {
            let value = matrix.value(i, j);
            if value < minimum {
                minimum = value;
                tied.clear();
                tied.insert((i, j));
            } else if value == minimum {
                tied.insert((i, j));
            }
        }
    }
    if tied.is_empty() {
        None
    } else {
        Some(Scan { minimum, tied })
    }
}
