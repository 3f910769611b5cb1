//! Synthetic distance-matrix generation
//!
//! Produces a random symmetric table for demos and testing. There is no
//! structure behind the numbers, just randomized pairwise distances. Values
//! are drawn from [0, 0.10) and floored to two decimal places, which keeps
//! the output readable and makes ties likely enough to exercise the
//! tie-breaker on small matrices.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::matrix::DistanceMatrix;

/// Upper bound (exclusive) for generated distances.
const DISTANCE_SPAN: f64 = 0.10;

/// Generate an `n`-item random distance matrix with spreadsheet-style labels
/// (A..Z, then AA, AB, ...). Pass a seed for a reproducible table.
pub fn random_matrix(n: usize, seed: Option<u64>) -> DistanceMatrix {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let labels: Vec<String> = (0..n).map(spreadsheet_label).collect();

    // Fill the upper triangle, mirror into the lower; diagonal stays zero.
    let mut values = vec![0.0; n * n];
    for i in 0..n {
        for j in (i + 1)..n {
            let distance = truncate2(rng.random_range(0.0..DISTANCE_SPAN));
            values[i * n + j] = distance;
            values[j * n + i] = distance;
        }
    }
    DistanceMatrix::from_parts(labels, values)
}

/// Floor `x` to two decimal places.
pub fn truncate2(x: f64) -> f64 {
    (x * 100.0).floor() / 100.0
}

/// Spreadsheet column name for a zero-based index: A..Z, AA, AB, ...
fn spreadsheet_label(mut index: usize) -> String {
    let mut chars = Vec::new();
    loop {
        chars.push(b'A' + (index % 26) as u8);
        index /= 26;
        if index == 0 {
            break;
        }
        index -= 1;
    }
    chars.reverse();
    String::from_utf8(chars).unwrap_or_default()
}
