//! Dense symmetric distance matrix with arena-style removal
//!
//! Rows and columns are never physically deleted during a pruning run:
//! removal flips a bit in a `removed` mask, and the full table is only
//! compacted when the caller asks for it via [`DistanceMatrix::to_rows`].
//! This keeps per-removal cost O(1) instead of shuffling the whole buffer
//! after every eliminated item.

use std::collections::HashSet;

use super::error::{MatrixError, Result};

/// Square symmetric table of pairwise distances over string labels.
///
/// Invariants, enforced once at construction and preserved by removal:
/// - every value is finite and in `[0, 1]`
/// - the diagonal is zero
/// - `value(i, j) == value(j, i)` for all pairs
///
/// Label order is the insertion order of the input rows and never changes;
/// iteration over live items is therefore deterministic.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    labels: Vec<String>,
    /// Row-major `dim * dim` buffer over the *original* index space.
    values: Vec<f64>,
    removed: Vec<bool>,
    live: usize,
}

impl DistanceMatrix {
    /// Build and validate a matrix from labels and row vectors.
    ///
    /// Validation covers label/row agreement, squareness, label uniqueness,
    /// value range, zero diagonal, and exact symmetry. Nothing is retained on
    /// failure, so the caller's input is never left half-consumed into an
    /// invalid matrix.
    pub fn from_rows(labels: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self> {
        let dim = labels.len();
        if rows.len() != dim {
            return Err(MatrixError::LabelCountMismatch { labels: dim, rows: rows.len() });
        }

        let mut seen = HashSet::with_capacity(dim);
        for label in &labels {
            if !seen.insert(label.as_str()) {
                return Err(MatrixError::DuplicateLabel(label.clone()));
            }
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != dim {
                return Err(MatrixError::NotSquare(i, row.len(), dim));
            }
            for (j, &value) in row.iter().enumerate() {
                if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                    return Err(MatrixError::OutOfRange { row: i, col: j, value });
                }
            }
            if rows[i][i] != 0.0 {
                return Err(MatrixError::NonZeroDiagonal(i, rows[i][i]));
            }
        }

        // Symmetry last, once both triangles are known to be well-formed.
        for i in 0..dim {
            for j in (i + 1)..dim {
                if rows[i][j] != rows[j][i] {
                    return Err(MatrixError::Asymmetric {
                        row: i,
                        col: j,
                        upper: rows[i][j],
                        lower: rows[j][i],
                    });
                }
            }
        }

        let mut values = Vec::with_capacity(dim * dim);
        for row in &rows {
            values.extend_from_slice(row);
        }
        Ok(Self::from_parts(labels, values))
    }

    /// Assemble a matrix from pre-validated parts.
    ///
    /// Used by the generator, whose output is symmetric, zero-diagonal, and
    /// range-bounded by construction.
    pub(crate) fn from_parts(labels: Vec<String>, values: Vec<f64>) -> Self {
        let dim = labels.len();
        debug_assert_eq!(values.len(), dim * dim);
        Self { labels, values, removed: vec![false; dim], live: dim }
    }

    /// Number of live (not yet removed) items.
    pub fn len(&self) -> usize {
        self.live
    }

    /// True when no live items remain.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Live labels in original insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels
            .iter()
            .zip(&self.removed)
            .filter(|(_, &gone)| !gone)
            .map(|(label, _)| label.as_str())
    }

    /// True if `label` names a live item.
    pub fn contains(&self, label: &str) -> bool {
        self.index_of(label).is_some()
    }

    /// Distance between two live labels, `None` if either is missing or removed.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.index_of(a)?;
        let j = self.index_of(b)?;
        Some(self.value(i, j))
    }

    /// Remove one item's row and column. Returns false if the label is
    /// unknown or already removed.
    pub fn remove(&mut self, label: &str) -> bool {
        match self.index_of(label) {
            Some(i) => {
                self.remove_index(i);
                true
            }
            None => false,
        }
    }

    /// Compact the live rows into owned labels + row vectors.
    pub fn to_rows(&self) -> (Vec<String>, Vec<Vec<f64>>) {
        let live: Vec<usize> = self.live_indices().collect();
        let labels = live.iter().map(|&i| self.labels[i].clone()).collect();
        let rows = live
            .iter()
            .map(|&i| live.iter().map(|&j| self.value(i, j)).collect())
            .collect();
        (labels, rows)
    }

    pub(crate) fn live_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.removed
            .iter()
            .enumerate()
            .filter(|(_, &gone)| !gone)
            .map(|(i, _)| i)
    }

    pub(crate) fn value(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.labels.len() + j]
    }

    pub(crate) fn label_at(&self, i: usize) -> &str {
        &self.labels[i]
    }

    pub(crate) fn remove_index(&mut self, i: usize) {
        debug_assert!(!self.removed[i], "index {i} removed twice");
        self.removed[i] = true;
        self.live -= 1;
    }

    pub(crate) fn index_of(&self, label: &str) -> Option<usize> {
        self.labels
            .iter()
            .position(|l| l == label)
            .filter(|&i| !self.removed[i])
    }
}
