//! Matrix construction error types

use thiserror::Error;

/// Errors detected while validating input for a [`super::DistanceMatrix`].
///
/// All variants are construction-time failures: a matrix that validates
/// successfully cannot reach an invalid state afterwards.
#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("Label count {labels} does not match row count {rows}")]
    LabelCountMismatch { labels: usize, rows: usize },

    #[error("Row {0} has {1} columns, expected {2}")]
    NotSquare(usize, usize, usize),

    #[error("Duplicate label: {0}")]
    DuplicateLabel(String),

    #[error("Distance [{row}][{col}] = {value} is not in [0, 1]")]
    OutOfRange { row: usize, col: usize, value: f64 },

    #[error("Diagonal entry [{0}][{0}] = {1} is not zero")]
    NonZeroDiagonal(usize, f64),

    #[error("Matrix is not symmetric: [{row}][{col}] = {upper} but [{col}][{row}] = {lower}")]
    Asymmetric {
        row: usize,
        col: usize,
        upper: f64,
        lower: f64,
    },
}

/// Result type for matrix construction
pub type Result<T> = std::result::Result<T, MatrixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_error_display() {
        let err = MatrixError::LabelCountMismatch { labels: 3, rows: 2 };
        assert!(format!("{err}").contains("does not match"));

        let err = MatrixError::NotSquare(1, 2, 3);
        assert!(format!("{err}").contains("expected 3"));

        let err = MatrixError::DuplicateLabel("A".to_string());
        assert!(format!("{err}").contains("Duplicate label"));
        assert!(format!("{err}").contains('A'));

        let err = MatrixError::OutOfRange { row: 0, col: 1, value: 1.5 };
        assert!(format!("{err}").contains("not in [0, 1]"));

        let err = MatrixError::NonZeroDiagonal(2, 0.3);
        assert!(format!("{err}").contains("not zero"));

        let err = MatrixError::Asymmetric { row: 0, col: 1, upper: 0.1, lower: 0.2 };
        assert!(format!("{err}").contains("not symmetric"));
    }
}
