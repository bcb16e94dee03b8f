//! Test data generators for creating synthetic raster-like data.
//!
//! These generators create predictable, verifiable test data patterns
//! that can be used across the test suite.

use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;

/// The value the synthetic raster generators place at `(row, col)`.
///
/// Each cell value is calculated as: `row * 10 + col / 100`
///
/// This makes it easy to verify that data is being windowed correctly by
/// recomputing the expected value for any position. Values stay far below
/// the NEO no-data sentinel, so every generated cell parses as present.
pub fn formula_value(row: usize, col: usize) -> f64 {
    row as f64 * 10.0 + col as f64 / 100.0
}

/// Creates a CSV raster where every cell holds [`formula_value`].
///
/// # Arguments
///
/// * `rows` - Number of raster rows (CSV lines)
/// * `cols` - Number of raster columns per line
///
/// # Example
///
/// ```
/// use test_utils::formula_csv;
///
/// let csv = formula_csv(2, 3);
/// assert_eq!(csv.lines().count(), 2);
/// assert!(csv.starts_with("0,0.01,0.02"));
/// ```
pub fn formula_csv(rows: usize, cols: usize) -> String {
    csv_raster(rows, cols, |row, col| Some(formula_value(row, col)))
}

/// Creates a CSV raster from a per-cell closure.
///
/// Cells where the closure returns `None` are written as the NEO no-data
/// sentinel `99999.0`, which the extractor treats as absent.
pub fn csv_raster<F>(rows: usize, cols: usize, cell: F) -> String
where
    F: Fn(usize, usize) -> Option<f64>,
{
    let mut out = String::new();
    for row in 0..rows {
        let line: Vec<String> = (0..cols)
            .map(|col| match cell(row, col) {
                Some(value) => trim_float(value),
                None => "99999.0".to_string(),
            })
            .collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}

/// Creates a formula CSV raster with no-data sentinels at given positions.
///
/// # Arguments
///
/// * `rows` - Number of raster rows
/// * `cols` - Number of raster columns
/// * `missing` - List of `(row, col)` positions written as the sentinel
pub fn csv_with_missing(rows: usize, cols: usize, missing: &[(usize, usize)]) -> String {
    csv_raster(rows, cols, |row, col| {
        if missing.contains(&(row, col)) {
            None
        } else {
            Some(formula_value(row, col))
        }
    })
}

/// Gzip-compress bytes the way the NEO archive serves its CSV files.
///
/// Useful for building `.CSV.gz` fixtures for fetcher tests.
pub fn gzip_bytes(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .expect("writing to an in-memory encoder cannot fail");
    encoder
        .finish()
        .expect("finishing an in-memory encoder cannot fail")
}

fn trim_float(value: f64) -> String {
    // CSV fixtures read better without trailing ".0" on whole numbers.
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
