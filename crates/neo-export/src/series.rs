//! Chart series and cloud exports derived from the monthly run.

use analytics::{diet_breakdown, CorrelationMatrix, ScatterPoint};
use features::MonthStats;
use ocean_common::round_to;

use crate::wire::{
    AnalyticsSeries, CorrelationCellWire, CorrelationMatrixWire, DietSlice, HotspotTrendPoint,
    PresencePoint, ScatterExportPoint, SeasonalPoint,
};

/// Published labels of the diet proxy slices, in export order.
const DIET_LABELS: [&str; 4] = [
    "Thermal structure",
    "Chlorophyll productivity",
    "Frontal shear",
    "Telemetry baseline",
];

/// Build the chart series every timeline entry embeds.
pub fn build_analytics_series(months: &[MonthStats]) -> AnalyticsSeries {
    let shark_presence_vs_temp = months
        .iter()
        .map(|month| PresencePoint {
            hour: month.month.label(),
            sst: round_to(month.sst_mean, 2),
            shark_presence: round_to(month.activity_mean, 3),
        })
        .collect();

    let hotspot_trends = months
        .iter()
        .map(|month| HotspotTrendPoint {
            day: month.month.label(),
            hotspots: month.hotspot_count,
        })
        .collect();

    AnalyticsSeries {
        shark_presence_vs_temp,
        hotspot_trends,
        diet_breakdown: diet_slices(months),
    }
}

fn diet_slices(months: &[MonthStats]) -> Vec<DietSlice> {
    let diet = diet_breakdown(months);
    let percentages = [
        diet.thermal_pct,
        diet.chlorophyll_pct,
        diet.frontal_pct,
        diet.telemetry_pct,
    ];

    DIET_LABELS
        .iter()
        .zip(percentages)
        .map(|(&label, pct)| DietSlice {
            kind: label.to_string(),
            pct,
        })
        .collect()
}

/// Build the seasonal series shared by every region key.
pub fn build_seasonal_series(months: &[MonthStats]) -> Vec<SeasonalPoint> {
    months
        .iter()
        .map(|month| SeasonalPoint {
            date: month.month.iso_date(),
            shark_activity: round_to(month.activity_mean, 3),
            sst: round_to(month.sst_mean, 2),
        })
        .collect()
}

/// Attach export ids to the sampled scatter cloud.
pub fn build_scatter_export(points: &[ScatterPoint]) -> Vec<ScatterExportPoint> {
    points
        .iter()
        .enumerate()
        .map(|(index, point)| ScatterExportPoint {
            id: format!("pt-{}", index),
            lat: point.lat,
            lon: point.lon,
            temperature: point.sst,
            chlorophyll: point.chl,
            sea_level_anomaly: round_to(point.front, 3),
            shark_activity: round_to(point.activity, 3),
            tagged: point.tagged,
        })
        .collect()
}

/// Reshape the correlation matrix into its wire form.
pub fn correlation_wire(matrix: &CorrelationMatrix) -> CorrelationMatrixWire {
    CorrelationMatrixWire {
        variables: matrix.variables,
        cells: matrix
            .cells
            .iter()
            .map(|cell| CorrelationCellWire {
                x: cell.x,
                y: cell.y,
                value: cell.value,
            })
            .collect(),
    }
}
