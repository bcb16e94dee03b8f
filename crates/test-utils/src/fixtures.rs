//! Common test fixtures for pipeline tests.
//!
//! This module provides pre-built months, cells, and aggregates that
//! represent common shapes in the derived data.

use features::{Cell, CellMetrics, MonthStats};
use ocean_common::MonthId;

/// Common month identifiers for testing.
pub mod months {
    /// Default pipeline start month
    pub const START: &str = "2024-09";

    /// Final month of a twelve-month run starting at [`START`]
    pub const END: &str = "2025-08";
}

/// Parse a month fixture, panicking on malformed input.
pub fn month(text: &str) -> MonthId {
    text.parse().expect("fixture month must be YYYY-MM")
}

/// Build a cell with the given position, channels, and activity.
///
/// Window indices and normalized metrics are zeroed; neither participates in
/// any aggregate or export.
pub fn cell(lat: f64, lon: f64, sst: f64, chl: f64, front: f64, activity: f64) -> Cell {
    Cell {
        row: 0,
        col: 0,
        lat,
        lon,
        sst,
        chl,
        front,
        activity,
        metrics: CellMetrics {
            sst_norm: 0.0,
            chl_norm: 0.0,
            front_norm: 0.0,
        },
    }
}

/// Build month aggregates without cells, for selection-level tests.
pub fn stats_with_means(
    month_text: &str,
    sst_mean: f64,
    chl_mean: f64,
    front_mean: f64,
    activity_mean: f64,
    hotspot_count: usize,
) -> MonthStats {
    MonthStats {
        month: month(month_text),
        cells: Vec::new(),
        sst_mean,
        chl_mean,
        front_mean,
        activity_mean,
        hotspot_count,
    }
}

/// A small populated month with four cells spanning the activity range.
///
/// The cells are ordered warmest-first and two of them clear the hotspot
/// threshold. The stored means match the cells exactly:
/// sst 23.125, chl 0.725, front 0.1225, activity 0.555.
pub fn sample_month(month_text: &str) -> MonthStats {
    MonthStats {
        month: month(month_text),
        cells: vec![
            cell(44.95, -79.95, 26.0, 0.8, 0.12, 0.91),
            cell(44.85, -79.85, 24.5, 1.4, 0.3, 0.72),
            cell(44.75, -79.75, 22.0, 0.5, 0.05, 0.41),
            cell(44.65, -79.65, 20.0, 0.2, 0.02, 0.18),
        ],
        sst_mean: 23.125,
        chl_mean: 0.725,
        front_mean: 0.1225,
        activity_mean: 0.555,
        hotspot_count: 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_parses() {
        assert_eq!(month(months::START).to_string(), "2024-09");
        assert_eq!(month(months::END).to_string(), "2025-08");
    }

    #[test]
    fn test_sample_month_is_self_consistent() {
        let stats = sample_month(months::START);
        let count = stats.cells.len() as f64;

        let sst_mean = stats.cells.iter().map(|c| c.sst).sum::<f64>() / count;
        assert!((sst_mean - stats.sst_mean).abs() < 1e-9);

        let hotspots = stats.cells.iter().filter(|c| c.activity >= 0.7).count();
        assert_eq!(hotspots, stats.hotspot_count);
    }
}
