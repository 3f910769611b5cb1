//! Symmetric distance-matrix storage and validation

mod dense;
mod error;

pub use dense::DistanceMatrix;
pub use error::{MatrixError, Result};
