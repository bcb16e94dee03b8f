//! Per-cell ecological features derived from paired NEO rasters.
//!
//! The deriver pairs a sea-surface-temperature grid with a chlorophyll grid
//! for one month, keeps the cells where both channels are present, computes a
//! frontal-gradient magnitude from SST central differences, normalizes each
//! channel over the surviving cells, and folds the channels into a composite
//! activity index with per-month aggregates.

pub mod cell;
pub mod derive;

pub use cell::{Cell, CellMetrics, MonthStats};
pub use derive::{
    derive_month, ACTIVITY_WEIGHT_CHL, ACTIVITY_WEIGHT_FRONT, ACTIVITY_WEIGHT_SST,
    HOTSPOT_THRESHOLD,
};
