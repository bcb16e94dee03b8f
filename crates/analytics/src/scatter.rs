//! Scatter-cloud sampling with percentile tagging.

use features::MonthStats;
use ocean_common::{round_half_up, round_to};

/// Default cap on sampled scatter points.
pub const DEFAULT_SCATTER_LIMIT: usize = 800;

/// Fraction of the sampled activity distribution above which points are
/// tagged as top-decile.
pub const TAG_PERCENTILE: f64 = 0.9;

/// One sampled cell, flattened across the chronological run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub lat: f64,
    pub lon: f64,
    pub sst: f64,
    pub chl: f64,
    pub front: f64,
    pub activity: f64,
    pub tagged: bool,
}

/// Flatten the months chronologically and thin the cloud to `limit` points.
///
/// The stride is `total / limit` floored at 1, so small clouds pass through
/// whole. SST is rounded to 2 decimals, chlorophyll and front to 3; the
/// activity keeps its stored rounding. Points at or above the 90th
/// percentile of the sampled activities are tagged.
pub fn sample_scatter(months: &[MonthStats], limit: usize) -> Vec<ScatterPoint> {
    if limit == 0 {
        return Vec::new();
    }

    let merged: Vec<ScatterPoint> = months
        .iter()
        .flat_map(|month| {
            month.cells.iter().map(|cell| ScatterPoint {
                lat: cell.lat,
                lon: cell.lon,
                sst: round_to(cell.sst, 2),
                chl: round_to(cell.chl, 3),
                front: round_to(cell.front, 3),
                activity: cell.activity,
                tagged: false,
            })
        })
        .collect();

    let step = (merged.len() / limit).max(1);
    let mut sampled: Vec<ScatterPoint> = merged.into_iter().step_by(step).take(limit).collect();

    let activities: Vec<f64> = sampled.iter().map(|point| point.activity).collect();
    let threshold = percentile(&activities, TAG_PERCENTILE);
    for point in &mut sampled {
        point.tagged = point.activity >= threshold;
    }

    sampled
}

/// Nearest-rank percentile with a round-half-up index.
///
/// `target` is a fraction in `[0, 1]`; out-of-range targets clamp to the
/// ends. An empty slice yields 0.
pub fn percentile(values: &[f64], target: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let last = sorted.len() as i64 - 1;
    let index = round_half_up(target * last as f64).clamp(0, last) as usize;
    sorted[index]
}
