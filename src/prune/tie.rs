//! Redundancy scoring and tie-breaking
//!
//! When several pairs share the current minimum distance, exactly one item
//! must go. The rule: score every item appearing in a tied pair by its mean
//! distance to the rest of the live population, and remove the one with the
//! lowest mean. An item close to everything else on average is the most
//! redundant and the safest to discard first.

use std::collections::BTreeSet;

use crate::matrix::DistanceMatrix;

use super::error::{PruneError, Result};

/// Mean distance from `label` to every other live item.
///
/// Excludes the self-comparison cell. Fails with
/// [`PruneError::NoComparisons`] when fewer than 2 items are live, and
/// [`PruneError::UnknownLabel`] when `label` is missing or already removed.
pub fn average_distance(matrix: &DistanceMatrix, label: &str) -> Result<f64> {
    let i = matrix
        .index_of(label)
        .ok_or_else(|| PruneError::UnknownLabel(label.to_string()))?;
    average_index(matrix, i)
}

/// Choose the item to remove from a set of pairs tied at the minimum distance.
///
/// Every item named by a tied pair is scored with [`average_distance`] over
/// the full current matrix (not just the tied members); the minimum score
/// loses. Equal scores resolve to the lexicographically smallest label so the
/// outcome never depends on pair ordering.
pub fn break_tie(tied: &[(String, String)], matrix: &DistanceMatrix) -> Result<(String, f64)> {
    let mut candidates = BTreeSet::new();
    for (a, b) in tied {
        candidates.insert(a.as_str());
        candidates.insert(b.as_str());
    }
    let mut loser: Option<(&str, f64)> = None;
    for label in candidates {
        let score = average_distance(matrix, label)?;
        loser = Some(match loser {
            Some(best) if !beats(score, label, best) => best,
            _ => (label, score),
        });
    }
    match loser {
        Some((label, score)) => Ok((label.to_string(), score)),
        None => Err(PruneError::EmptyTieSet),
    }
}

/// Index-space scorer used by the engine's inner loop.
pub(crate) fn average_index(matrix: &DistanceMatrix, i: usize) -> Result<f64> {
    if matrix.len() < 2 {
        return Err(PruneError::NoComparisons);
    }
    let sum: f64 = matrix
        .live_indices()
        .filter(|&j| j != i)
        .map(|j| matrix.value(i, j))
        .sum();
    Ok(sum / (matrix.len() - 1) as f64)
}

/// Index-space tie-break used by the engine's inner loop.
///
/// `tied` holds canonical `(i, j)` pairs with `i < j`; the BTreeSet gives a
/// deterministic candidate order, and equal averages fall back to label
/// comparison.
pub(crate) fn break_tie_indices(
    tied: &BTreeSet<(usize, usize)>,
    matrix: &DistanceMatrix,
) -> Result<(usize, f64)> {
    let mut candidates = BTreeSet::new();
    for &(i, j) in tied {
        candidates.insert(i);
        candidates.insert(j);
    }
    let mut loser: Option<(usize, f64)> = None;
    for idx in candidates {
        let score = average_index(matrix, idx)?;
        loser = Some(match loser {
            Some((best_idx, best_score))
                if !beats(score, matrix.label_at(idx), (matrix.label_at(best_idx), best_score)) =>
            {
                (best_idx, best_score)
            }
            _ => (idx, score),
        });
    }
    loser.ok_or(PruneError::EmptyTieSet)
}

/// True if `(score, label)` should replace the current best candidate.
fn beats(score: f64, label: &str, best: (&str, f64)) -> bool {
    let (best_label, best_score) = best;
    score < best_score || (score == best_score && label < best_label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn matrix(labels: &[&str], rows: Vec<Vec<f64>>) -> DistanceMatrix {
        DistanceMatrix::from_rows(labels.iter().map(|s| s.to_string()).collect(), rows)
            .expect("valid matrix")
    }

    fn four_items() -> DistanceMatrix {
        // A-B=0.01 A-C=0.05 A-D=0.09 B-C=0.02 B-D=0.08 C-D=0.03
        matrix(
            &["A", "B", "C", "D"],
            vec![
                vec![0.0, 0.01, 0.05, 0.09],
                vec![0.01, 0.0, 0.02, 0.08],
                vec![0.05, 0.02, 0.0, 0.03],
                vec![0.09, 0.08, 0.03, 0.0],
            ],
        )
    }

    #[test]
    fn test_average_distance() {
        let m = four_items();
        assert_relative_eq!(average_distance(&m, "A").unwrap(), 0.05, epsilon = 1e-12);
        assert_relative_eq!(average_distance(&m, "B").unwrap(), 0.11 / 3.0);
        assert_relative_eq!(average_distance(&m, "D").unwrap(), 0.20 / 3.0);
    }

    #[test]
    fn test_average_distance_excludes_removed() {
        let mut m = four_items();
        m.remove("B");
        // A's neighbours are now C and D only.
        assert_relative_eq!(average_distance(&m, "A").unwrap(), (0.05 + 0.09) / 2.0);
    }

    #[test]
    fn test_average_distance_unknown_label() {
        let m = four_items();
        assert!(matches!(
            average_distance(&m, "Z"),
            Err(PruneError::UnknownLabel(_))
        ));
    }

    #[test]
    fn test_average_distance_single_item() {
        let m = matrix(&["A"], vec![vec![0.0]]);
        assert!(matches!(
            average_distance(&m, "A"),
            Err(PruneError::NoComparisons)
        ));
    }

    #[test]
    fn test_break_tie_picks_lowest_average() {
        let m = four_items();
        // avg(A)=0.05, avg(B)=0.0366.. -> B is the more redundant one.
        let (loser, score) =
            break_tie(&[("A".to_string(), "B".to_string())], &m).expect("tie resolved");
        assert_eq!(loser, "B");
        assert_relative_eq!(score, 0.11 / 3.0);
    }

    #[test]
    fn test_break_tie_scores_all_tied_members() {
        let m = four_items();
        let tied = vec![
            ("A".to_string(), "B".to_string()),
            ("C".to_string(), "D".to_string()),
        ];
        let (loser, _) = break_tie(&tied, &m).expect("tie resolved");
        assert_eq!(loser, "B");
    }

    #[test]
    fn test_break_tie_equal_scores_lexicographic() {
        // Fully uniform distances: every average ties, so the smallest label goes.
        let m = matrix(
            &["C", "A", "B"],
            vec![
                vec![0.0, 0.02, 0.02],
                vec![0.02, 0.0, 0.02],
                vec![0.02, 0.02, 0.0],
            ],
        );
        let tied = vec![
            ("C".to_string(), "A".to_string()),
            ("C".to_string(), "B".to_string()),
            ("A".to_string(), "B".to_string()),
        ];
        let (loser, score) = break_tie(&tied, &m).expect("tie resolved");
        assert_eq!(loser, "A");
        assert_relative_eq!(score, 0.02);
    }

    #[test]
    fn test_break_tie_empty_set() {
        let m = four_items();
        assert!(matches!(break_tie(&[], &m), Err(PruneError::EmptyTieSet)));
    }

    #[test]
    fn test_break_tie_indices_matches_labels() {
        let m = four_items();
        let mut tied = BTreeSet::new();
        tied.insert((0, 1)); // A-B
        let (idx, score) = break_tie_indices(&tied, &m).expect("tie resolved");
        assert_eq!(m.label_at(idx), "B");
        assert_relative_eq!(score, 0.11 / 3.0);
    }
}
