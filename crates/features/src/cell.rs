//! Cell-level and month-level feature records.

use ocean_common::MonthId;

/// Normalized channel scores for one cell, each rounded to 3 decimals.
///
/// Scores are min-max normalized over the cells that survived derivation for
/// the month, so every value lands in `[0, 1]`. A channel with no spread
/// across the month normalizes to `0` everywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub sst_norm: f64,
    pub chl_norm: f64,
    pub front_norm: f64,
}

/// One surviving grid cell with its raw channels and derived features.
///
/// `row` and `col` index into the extracted region grid (window-local).
/// `lat` and `lon` are the cell center in degrees, rounded to 3 decimals.
/// `sst` and `chl` keep their raw raster values; `front` is the gradient
/// magnitude rounded to 4 decimals and `activity` the composite index
/// rounded to 3.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub lat: f64,
    pub lon: f64,
    pub sst: f64,
    pub chl: f64,
    pub front: f64,
    pub activity: f64,
    pub metrics: CellMetrics,
}

/// Derived features and aggregates for one calendar month.
///
/// Means are taken over the surviving cells: `sst_mean` and `chl_mean` over
/// the raw values (rounded to 3), `front_mean` over the rounded fronts
/// (rounded to 4), `activity_mean` over the rounded activities (rounded
/// to 3). A month with no surviving cells carries `0.0` for every mean and
/// zero hotspots.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthStats {
    pub month: MonthId,
    pub cells: Vec<Cell>,
    pub sst_mean: f64,
    pub chl_mean: f64,
    pub front_mean: f64,
    pub activity_mean: f64,
    pub hotspot_count: usize,
}
