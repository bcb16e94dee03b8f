//! Windowed extraction from NEO CSV rasters.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use ocean_common::GridWindow;

use crate::error::Result;
use crate::grid::RegionGrid;

/// Values at or above this magnitude mark cells with no retrieval.
pub const NO_DATA_THRESHOLD: f64 = 99999.0;

/// Parse one CSV token into a present cell value.
///
/// Unparseable tokens, non-finite numbers and the archive's no-data sentinel
/// all come back as `None`.
pub fn parse_cell_token(token: &str) -> Option<f64> {
    let value: f64 = token.parse().ok()?;
    if !value.is_finite() || value >= NO_DATA_THRESHOLD {
        return None;
    }
    Some(value)
}

/// Read the windowed portion of a CSV raster from `reader`.
///
/// Rows before the window are skipped, and nothing past the window's last row
/// is read. Rows shorter than the window are padded with missing values; a
/// file with fewer rows than the window simply yields a shorter grid.
pub fn read_region_grid<R: BufRead>(reader: R, window: &GridWindow) -> Result<RegionGrid> {
    let width = window.width();
    let mut data = Vec::new();
    let mut height = 0usize;

    for (row_idx, line) in reader.lines().enumerate() {
        let line = line?;
        if window.contains_row(row_idx) {
            let line = line.trim_end_matches('\r');
            let tokens: Vec<&str> = line.split(',').collect();
            if tokens.len() <= window.col_end {
                debug!(
                    row = row_idx,
                    columns = tokens.len(),
                    expected = window.col_end + 1,
                    "short raster row, padding with missing values"
                );
            }
            for col in window.col_start..=window.col_end {
                data.push(tokens.get(col).and_then(|token| parse_cell_token(token)));
            }
            height += 1;
        }
        if row_idx >= window.row_end {
            break;
        }
    }

    Ok(RegionGrid::new(width, height, data))
}

/// Read the windowed portion of a CSV raster file.
pub fn read_region_grid_from_path(path: &Path, window: &GridWindow) -> Result<RegionGrid> {
    let file = File::open(path)?;
    read_region_grid(BufReader::new(file), window)
}
