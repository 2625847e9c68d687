//! Header row detection for delimited text.
//!
//! The heuristic compares how numeric the first two rows look: a header row
//! is mostly labels, so its numeric-cell density should fall below the first
//! data row's. Callers can override the outcome with an explicit force flag
//! or disable detection entirely; see the dispatcher configuration.

use crate::sheet::infer::parses_as_number;

/// Decide whether row 0 is a header row.
///
/// Returns `false` when fewer than two rows exist. Otherwise returns `true`
/// iff row 0's numeric-cell ratio is strictly less than row 1's; equal
/// ratios mean no header.
pub fn detect_header_row(rows: &[Vec<String>]) -> bool {
    if rows.len() < 2 {
        return false;
    }
    numeric_ratio(&rows[0]) < numeric_ratio(&rows[1])
}

fn numeric_ratio(row: &[String]) -> f64 {
    if row.is_empty() {
        return 0.0;
    }
    let numeric = row
        .iter()
        .filter(|field| parses_as_number(field.trim()))
        .count();
    numeric as f64 / row.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_label_row_over_numeric_row() {
        let rows = rows(&[&["Name", "Age"], &["Bob", "30"]]);
        assert!(detect_header_row(&rows));
    }

    #[test]
    fn test_equal_ratios_are_not_a_header() {
        let rows = rows(&[&["1", "2"], &["3", "4"]]);
        assert!(!detect_header_row(&rows));
    }

    #[test]
    fn test_single_row_is_not_a_header() {
        let rows = rows(&[&["Name", "Age"]]);
        assert!(!detect_header_row(&rows));
    }

    #[test]
    fn test_numeric_first_row_is_not_a_header() {
        let rows = rows(&[&["1", "2"], &["a", "b"]]);
        assert!(!detect_header_row(&rows));
    }
}
