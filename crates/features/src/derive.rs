//! Month-level feature derivation from paired raster grids.

use neo_csv::RegionGrid;
use ocean_common::{round_to, GridWindow, MonthId, RasterSpec};
use tracing::{debug, warn};

use crate::cell::{Cell, CellMetrics, MonthStats};

/// Weight of the normalized SST channel in the activity index.
pub const ACTIVITY_WEIGHT_SST: f64 = 0.55;
/// Weight of the normalized chlorophyll channel in the activity index.
pub const ACTIVITY_WEIGHT_CHL: f64 = 0.35;
/// Weight of the normalized front channel in the activity index.
pub const ACTIVITY_WEIGHT_FRONT: f64 = 0.10;

/// Cells with an activity index at or above this count as hotspots.
pub const HOTSPOT_THRESHOLD: f64 = 0.7;

/// Paired cell values before normalization.
struct Sample {
    row: usize,
    col: usize,
    lat: f64,
    lon: f64,
    sst: f64,
    chl: f64,
    front: f64,
}

/// Derive the feature cells and aggregates for one month.
///
/// A cell survives only if both grids carry a value at its position and the
/// SST gradient magnitude there is finite. Normalization spans exactly the
/// surviving cells, so the composite index is relative to the month itself.
pub fn derive_month(
    month: MonthId,
    sst: &RegionGrid,
    chl: &RegionGrid,
    spec: &RasterSpec,
    window: &GridWindow,
) -> MonthStats {
    let mut samples = Vec::new();

    for row in 0..sst.height {
        for col in 0..sst.width {
            let (Some(sst_val), Some(chl_val)) = (sst.get(row, col), chl.get(row, col)) else {
                continue;
            };

            let front = front_gradient(sst, row, col, sst_val, spec);
            if !front.is_finite() {
                continue;
            }

            samples.push(Sample {
                row,
                col,
                lat: round_to(spec.row_to_lat(window.row_start + row), 3),
                lon: round_to(spec.col_to_lon(window.col_start + col), 3),
                sst: sst_val,
                chl: chl_val,
                front,
            });
        }
    }

    if samples.is_empty() {
        warn!(%month, "no cells with both channels present");
        return MonthStats {
            month,
            cells: Vec::new(),
            sst_mean: 0.0,
            chl_mean: 0.0,
            front_mean: 0.0,
            activity_mean: 0.0,
            hotspot_count: 0,
        };
    }

    let (sst_min, sst_max) = min_max(samples.iter().map(|s| s.sst));
    let (chl_min, chl_max) = min_max(samples.iter().map(|s| s.chl));
    let (front_min, front_max) = min_max(samples.iter().map(|s| s.front));

    let cells: Vec<Cell> = samples
        .into_iter()
        .map(|s| {
            let sst_norm = normalize(s.sst, sst_min, sst_max);
            let chl_norm = normalize(s.chl, chl_min, chl_max);
            let front_norm = normalize(s.front, front_min, front_max);
            let activity = ACTIVITY_WEIGHT_SST * sst_norm
                + ACTIVITY_WEIGHT_CHL * chl_norm
                + ACTIVITY_WEIGHT_FRONT * front_norm;

            Cell {
                row: s.row,
                col: s.col,
                lat: s.lat,
                lon: s.lon,
                sst: s.sst,
                chl: s.chl,
                front: s.front,
                activity: round_to(activity, 3),
                metrics: CellMetrics {
                    sst_norm: round_to(sst_norm, 3),
                    chl_norm: round_to(chl_norm, 3),
                    front_norm: round_to(front_norm, 3),
                },
            }
        })
        .collect();

    let count = cells.len() as f64;
    let sst_mean = round_to(cells.iter().map(|c| c.sst).sum::<f64>() / count, 3);
    let chl_mean = round_to(cells.iter().map(|c| c.chl).sum::<f64>() / count, 3);
    let front_mean = round_to(cells.iter().map(|c| c.front).sum::<f64>() / count, 4);
    let activity_mean = round_to(cells.iter().map(|c| c.activity).sum::<f64>() / count, 3);
    let hotspot_count = cells
        .iter()
        .filter(|c| c.activity >= HOTSPOT_THRESHOLD)
        .count();

    debug!(
        %month,
        cells = cells.len(),
        hotspots = hotspot_count,
        "derived month features"
    );

    MonthStats {
        month,
        cells,
        sst_mean,
        chl_mean,
        front_mean,
        activity_mean,
        hotspot_count,
    }
}

/// Central-difference gradient magnitude at one SST cell, rounded to 4.
///
/// Neighbours that are off-grid or absent fall back to the centre value, so
/// edge cells see a one-sided difference at half weight.
fn front_gradient(
    grid: &RegionGrid,
    row: usize,
    col: usize,
    center: f64,
    spec: &RasterSpec,
) -> f64 {
    let left = if col > 0 { grid.get(row, col - 1) } else { None }.unwrap_or(center);
    let right = grid.get(row, col + 1).unwrap_or(center);
    let up = if row > 0 { grid.get(row - 1, col) } else { None }.unwrap_or(center);
    let down = grid.get(row + 1, col).unwrap_or(center);

    let dx = (right - left) / (2.0 * spec.lon_step());
    let dy = (down - up) / (2.0 * spec.lat_step());
    round_to((dx * dx + dy * dy).sqrt(), 4)
}

fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        return 0.0;
    }
    (value - min) / (max - min)
}

fn min_max<I: Iterator<Item = f64>>(values: I) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
        (min.min(v), max.max(v))
    })
}
