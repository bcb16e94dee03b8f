//! Map layer selection for one scenario month.

use features::{Cell, MonthStats};
use ocean_common::{fmt_fixed, round_half_up, round_to};

use crate::wire::{ChlLayer, HotspotLayer, LayerSet, TempLayer};

/// How many cells each layer keeps.
const TEMP_LAYER_CELLS: usize = 12;
const CHL_LAYER_CELLS: usize = 12;
const HOTSPOT_LAYER_CELLS: usize = 8;

/// Source line for layers derived from both input products.
pub const DERIVED_SOURCE: &str = "Derived from NASA NEO SST & Chlorophyll";

/// Attribution lines for the exported layers.
#[derive(Debug, Clone)]
pub struct SourceInfo {
    pub sst: String,
    pub chlorophyll: String,
}

/// Build the three map layers for a scenario month.
///
/// Each layer keeps the top cells of its channel, in descending order, so a
/// month with fewer cells than the cap exports them all. Ordering ties keep
/// their grid order.
pub fn build_layers(stats: &MonthStats, scenario_id: &str, sources: &SourceInfo) -> LayerSet {
    let timestamp = stats.month.iso_timestamp();

    let sea_surface_temperature = top_cells(&stats.cells, TEMP_LAYER_CELLS, |cell| cell.sst)
        .into_iter()
        .enumerate()
        .map(|(index, cell)| TempLayer {
            id: format!("{}-sst-{}", scenario_id, index),
            lat: cell.lat,
            lng: cell.lon,
            temperature: round_to(cell.sst, 2),
            anomaly: round_to(cell.sst - stats.sst_mean, 2),
            depth_range: [0, 200],
            timestamp: timestamp.clone(),
            source: sources.sst.clone(),
        })
        .collect();

    let phytoplankton = top_cells(&stats.cells, CHL_LAYER_CELLS, |cell| cell.chl)
        .into_iter()
        .enumerate()
        .map(|(index, cell)| ChlLayer {
            id: format!("{}-chl-{}", scenario_id, index),
            lat: cell.lat,
            lng: cell.lon,
            chlorophyll: round_to(cell.chl, 3),
            bloom_anomaly: round_to(cell.chl - stats.chl_mean, 3),
            depth_range: [0, 60],
            timestamp: timestamp.clone(),
            source: sources.chlorophyll.clone(),
        })
        .collect();

    let shark_hotspots = top_cells(&stats.cells, HOTSPOT_LAYER_CELLS, |cell| cell.activity)
        .into_iter()
        .enumerate()
        .map(|(index, cell)| HotspotLayer {
            id: format!("{}-hotspot-{}", scenario_id, index),
            lat: cell.lat,
            lng: cell.lon,
            confidence: round_to(cell.activity.clamp(0.1, 0.99), 2),
            diet_signal: format!(
                "Energy index +{}%",
                round_half_up((cell.activity - 0.5) * 100.0)
            ),
            supporting_drivers: vec![
                format!("SST {} degC", fmt_fixed(cell.sst, 1)),
                format!("Chl {} mg/m^3", fmt_fixed(cell.chl, 2)),
                format!("Front {} units", fmt_fixed(cell.front, 2)),
            ],
            depth_range: [40, 220],
            timestamp: timestamp.clone(),
            source: DERIVED_SOURCE.to_string(),
        })
        .collect();

    LayerSet {
        sea_surface_temperature,
        phytoplankton,
        shark_hotspots,
    }
}

/// Up to `count` cells in descending `key` order; the sort is stable.
fn top_cells(cells: &[Cell], count: usize, key: impl Fn(&Cell) -> f64) -> Vec<&Cell> {
    let mut ordered: Vec<&Cell> = cells.iter().collect();
    ordered.sort_by(|a, b| key(b).total_cmp(&key(a)));
    ordered.truncate(count);
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{cell, stats_with_means};

    fn sources() -> SourceInfo {
        SourceInfo {
            sst: "NASA NEO MODIS Aqua SST (MYD28M)".to_string(),
            chlorophyll: "NASA NEO MODIS Aqua Chlorophyll (MY1DMM_CHLORA)".to_string(),
        }
    }

    /// Twenty cells with SST descending as chlorophyll rises.
    fn crowded_month() -> MonthStats {
        let mut stats = stats_with_means("2024-09", 25.0, 0.5, 0.12, 0.5, 3);
        stats.cells = (0..20)
            .map(|i| {
                cell(
                    40.0 + i as f64 * 0.1,
                    -70.0,
                    30.0 - i as f64,
                    0.1 + i as f64 * 0.05,
                    0.1,
                    0.3 + i as f64 * 0.02,
                )
            })
            .collect();
        stats
    }

    #[test]
    fn test_layer_caps_and_ids() {
        let layers = build_layers(&crowded_month(), "gulf_stream", &sources());

        assert_eq!(layers.sea_surface_temperature.len(), 12);
        assert_eq!(layers.phytoplankton.len(), 12);
        assert_eq!(layers.shark_hotspots.len(), 8);
        assert_eq!(layers.sea_surface_temperature[0].id, "gulf_stream-sst-0");
        assert_eq!(layers.phytoplankton[11].id, "gulf_stream-chl-11");
        assert_eq!(layers.shark_hotspots[7].id, "gulf_stream-hotspot-7");
    }

    #[test]
    fn test_temperature_layer_sorts_descending() {
        let layers = build_layers(&crowded_month(), "gulf_stream", &sources());

        let temps: Vec<f64> = layers
            .sea_surface_temperature
            .iter()
            .map(|l| l.temperature)
            .collect();
        assert_eq!(temps[0], 30.0);
        assert_eq!(temps[11], 19.0);
        assert!(temps.windows(2).all(|pair| pair[0] >= pair[1]));

        // Anomaly is against the month mean.
        assert_eq!(layers.sea_surface_temperature[0].anomaly, 5.0);
    }

    #[test]
    fn test_chlorophyll_layer_picks_richest_cells() {
        let layers = build_layers(&crowded_month(), "gulf_stream", &sources());

        // Chlorophyll rises with the cell index, so the last cell wins.
        assert_eq!(layers.phytoplankton[0].chlorophyll, 1.05);
        assert_eq!(layers.phytoplankton[0].bloom_anomaly, 0.55);
        assert_eq!(
            layers.phytoplankton[0].source,
            "NASA NEO MODIS Aqua Chlorophyll (MY1DMM_CHLORA)"
        );
    }

    #[test]
    fn test_hotspot_confidence_is_clamped() {
        let mut stats = stats_with_means("2024-09", 25.0, 0.5, 0.12, 0.5, 1);
        stats.cells = vec![
            cell(40.0, -70.0, 25.0, 0.5, 0.1, 0.995),
            cell(40.1, -70.0, 25.0, 0.5, 0.1, 0.05),
        ];

        let layers = build_layers(&stats, "gulf_stream_warm", &sources());
        assert_eq!(layers.shark_hotspots[0].confidence, 0.99);
        assert_eq!(layers.shark_hotspots[1].confidence, 0.1);
    }

    #[test]
    fn test_diet_signal_keeps_plus_sign_for_negative_deltas() {
        let mut stats = stats_with_means("2024-09", 25.0, 0.5, 0.12, 0.5, 0);
        stats.cells = vec![cell(40.0, -70.0, 25.0, 0.5, 0.1, 0.3)];

        let layers = build_layers(&stats, "gulf_stream", &sources());
        assert_eq!(layers.shark_hotspots[0].diet_signal, "Energy index +-20%");
    }

    #[test]
    fn test_supporting_drivers_fixed_width() {
        let mut stats = stats_with_means("2024-09", 25.0, 0.5, 0.12, 0.5, 0);
        stats.cells = vec![cell(40.0, -70.0, 26.0, 0.5, 0.1234, 0.8)];

        let layers = build_layers(&stats, "gulf_stream", &sources());
        assert_eq!(
            layers.shark_hotspots[0].supporting_drivers,
            vec![
                "SST 26.0 degC".to_string(),
                "Chl 0.50 mg/m^3".to_string(),
                "Front 0.12 units".to_string(),
            ]
        );
        assert_eq!(layers.shark_hotspots[0].source, DERIVED_SOURCE);
    }

    #[test]
    fn test_small_month_exports_all_cells() {
        let mut stats = stats_with_means("2024-09", 25.0, 0.5, 0.12, 0.5, 0);
        stats.cells = vec![
            cell(40.0, -70.0, 25.0, 0.5, 0.1, 0.5),
            cell(40.1, -70.0, 24.0, 0.4, 0.1, 0.4),
        ];

        let layers = build_layers(&stats, "gulf_stream", &sources());
        assert_eq!(layers.sea_surface_temperature.len(), 2);
        assert_eq!(layers.phytoplankton.len(), 2);
        assert_eq!(layers.shark_hotspots.len(), 2);
    }

    #[test]
    fn test_timestamp_is_first_of_month() {
        let layers = build_layers(&crowded_month(), "gulf_stream", &sources());
        assert_eq!(
            layers.sea_surface_temperature[0].timestamp,
            "2024-09-01T00:00:00Z"
        );
    }
}
