//! Human-readable table rendering
//!
//! Pure string producers for CLI output: a bordered psql-style grid for the
//! matrix, a removal-log table, and a kept-items listing. Distances are shown
//! to two decimal places, matching the precision of the generating domain.

use crate::matrix::DistanceMatrix;
use crate::prune::RemovalRecord;

/// Render the live rows of a matrix as a bordered grid with a label header
/// row and a label column.
pub fn render_matrix(matrix: &DistanceMatrix) -> String {
    let (labels, rows) = matrix.to_rows();
    if labels.is_empty() {
        return "(empty matrix)".to_string();
    }

    let label_width = labels.iter().map(String::len).max().unwrap_or(1);
    // Value cells hold "0.00"; widen if a label header is longer.
    let cell_width = labels.iter().map(String::len).max().unwrap_or(4).max(4);

    let mut out = String::new();
    let border = grid_border(label_width, cell_width, labels.len());

    out.push_str(&border);
    out.push_str(&format!("| {:<label_width$} |", ""));
    for label in &labels {
        out.push_str(&format!(" {label:<cell_width$} |"));
    }
    out.push('\n');
    out.push_str(&border);

    for (label, row) in labels.iter().zip(&rows) {
        out.push_str(&format!("| {label:<label_width$} |"));
        for value in row {
            out.push_str(&format!(" {value:<cell_width$.2} |"));
        }
        out.push('\n');
    }
    out.push_str(&border);
    out
}

/// Render the removal log as a bordered table, one row per eliminated item.
pub fn render_log(log: &[RemovalRecord]) -> String {
    if log.is_empty() {
        return "(nothing removed)".to_string();
    }
    let label_width = log
        .iter()
        .map(|r| r.label.len())
        .max()
        .unwrap_or(1)
        .max("removed".len());

    let header = format!("| {:<label_width$} | pairwise | average  |", "removed");
    let border = format!("+-{:-<label_width$}-+----------+----------+\n", "");

    let mut out = String::new();
    out.push_str(&border);
    out.push_str(&header);
    out.push('\n');
    out.push_str(&border);
    for record in log {
        out.push_str(&format!(
            "| {:<label_width$} | {:<8.2} | {:<8.4} |\n",
            record.label, record.pairwise_distance, record.average_distance
        ));
    }
    out.push_str(&border);
    out
}

/// One label per line, for the final "kept" report.
pub fn render_kept(matrix: &DistanceMatrix) -> String {
    matrix.labels().collect::<Vec<_>>().join("\n")
}

fn grid_border(label_width: usize, cell_width: usize, columns: usize) -> String {
    let mut border = format!("+-{:-<label_width$}-+", "");
    for _ in 0..columns {
        border.push_str(&format!("-{:-<cell_width$}-+", ""));
    }
    border.push('\n');
    border
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> DistanceMatrix {
        DistanceMatrix::from_rows(
            vec!["A".to_string(), "B".to_string()],
            vec![vec![0.0, 0.07], vec![0.07, 0.0]],
        )
        .expect("valid matrix")
    }

    #[test]
    fn test_render_matrix_layout() {
        let text = render_matrix(&two_by_two());
        let lines: Vec<&str> = text.lines().collect();
        // Border, header, border, two rows, border.
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with('+'));
        assert!(lines[1].contains("A"));
        assert!(lines[1].contains("B"));
        assert!(lines[3].contains("0.00"));
        assert!(lines[3].contains("0.07"));
        // All lines share one width.
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
    }

    #[test]
    fn test_render_matrix_empty() {
        let empty = DistanceMatrix::from_rows(Vec::new(), Vec::new()).expect("empty is valid");
        assert_eq!(render_matrix(&empty), "(empty matrix)");
    }

    #[test]
    fn test_render_matrix_skips_removed() {
        let mut m = two_by_two();
        m.remove("A");
        let text = render_matrix(&m);
        assert!(!text.contains("0.07"));
        assert!(text.contains("B"));
    }

    #[test]
    fn test_render_log() {
        let log = vec![RemovalRecord {
            label: "B".to_string(),
            pairwise_distance: 0.01,
            average_distance: 0.0367,
        }];
        let text = render_log(&log);
        assert!(text.contains("removed"));
        assert!(text.contains("B"));
        assert!(text.contains("0.01"));
        assert!(text.contains("0.0367"));
    }

    #[test]
    fn test_render_log_empty() {
        assert_eq!(render_log(&[]), "(nothing removed)");
    }

    #[test]
    fn test_render_kept() {
        let m = two_by_two();
        assert_eq!(render_kept(&m), "A\nB");
    }
}
