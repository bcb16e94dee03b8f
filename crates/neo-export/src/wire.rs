//! Serialized shapes of the generated data module.
//!
//! Field order mirrors the order the frontend reads these objects in, and
//! serde emits struct fields in declaration order, so reordering fields here
//! changes the published file.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One cell of the sea surface temperature layer.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TempLayer {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    /// Cell SST in degC, rounded to 2 decimals.
    pub temperature: f64,
    /// Difference from the month mean, rounded to 2 decimals.
    pub anomaly: f64,
    pub depth_range: [u32; 2],
    pub timestamp: String,
    pub source: String,
}

/// One cell of the phytoplankton layer.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChlLayer {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    /// Cell chlorophyll in mg/m^3, rounded to 3 decimals.
    pub chlorophyll: f64,
    /// Difference from the month mean, rounded to 3 decimals.
    pub bloom_anomaly: f64,
    pub depth_range: [u32; 2],
    pub timestamp: String,
    pub source: String,
}

/// One predicted hotspot cell.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotspotLayer {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    /// Activity index clamped into [0.1, 0.99], rounded to 2 decimals.
    pub confidence: f64,
    pub diet_signal: String,
    pub supporting_drivers: Vec<String>,
    pub depth_range: [u32; 2],
    pub timestamp: String,
    pub source: String,
}

/// The three map layers exported for one scenario month.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LayerSet {
    pub sea_surface_temperature: Vec<TempLayer>,
    pub phytoplankton: Vec<ChlLayer>,
    pub shark_hotspots: Vec<HotspotLayer>,
}

/// One point of the presence-versus-temperature chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PresencePoint {
    /// Month label, e.g. "Sep 2024". The chart axis is named `hour`.
    pub hour: String,
    pub sst: f64,
    pub shark_presence: f64,
}

/// One point of the hotspot count trend.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HotspotTrendPoint {
    /// Month label; the chart axis is named `day`.
    pub day: String,
    pub hotspots: usize,
}

/// One slice of the diet proxy split.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DietSlice {
    #[serde(rename = "type")]
    pub kind: String,
    pub pct: i64,
}

/// The chart series shared by every timeline entry.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSeries {
    pub shark_presence_vs_temp: Vec<PresencePoint>,
    pub hotspot_trends: Vec<HotspotTrendPoint>,
    pub diet_breakdown: Vec<DietSlice>,
}

/// A statistic with its change against the baseline month.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ValueDelta {
    pub value: f64,
    pub delta: f64,
}

/// An integer count with its change against the baseline month.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CountDelta {
    pub value: usize,
    pub delta: i64,
}

/// A banded label with the numeric change behind it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LevelDelta {
    pub label: String,
    pub delta: f64,
}

/// Headline statistics for one scenario month.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub shark_occurrence: ValueDelta,
    pub hotspots_found: CountDelta,
    pub avg_temperature: ValueDelta,
    pub phytoplankton_level: LevelDelta,
}

/// The derived-metric half of the concept blurb.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SatelliteMetric {
    pub name: String,
    pub definition: String,
    pub inputs: Vec<String>,
}

/// Static description of the proposed tag instrument.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConceptualModel {
    pub name: String,
    pub description: String,
    pub innovations: Vec<String>,
    pub new_satellite_metric: SatelliteMetric,
}

/// One point of the seasonal activity series.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalPoint {
    /// First day of the month, "YYYY-MM-01".
    pub date: String,
    pub shark_activity: f64,
    pub sst: f64,
}

/// One cell of the correlation heat map.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CorrelationCellWire {
    pub x: &'static str,
    pub y: &'static str,
    pub value: f64,
}

/// Dense correlation matrix with its variable order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CorrelationMatrixWire {
    pub variables: [&'static str; 4],
    pub cells: Vec<CorrelationCellWire>,
}

/// One exported scatter point.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScatterExportPoint {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    pub temperature: f64,
    pub chlorophyll: f64,
    pub sea_level_anomaly: f64,
    pub shark_activity: f64,
    pub tagged: bool,
}

/// A scenario's entry in the insight list.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InsightRegion {
    pub id: &'static str,
    pub label: &'static str,
    pub description: String,
}

/// Map filters of one timeline entry.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineFilters {
    pub depth_range: [u32; 2],
    /// Whole-degree window around the scenario month's SST mean, floored
    /// at 0.
    pub temperature_range: [i64; 2],
    pub time_filter: &'static str,
}

/// One entry of the simulation timeline.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub description: String,
    pub filters: TimelineFilters,
    pub layers: LayerSet,
    pub analytics: AnalyticsSeries,
    pub stats: SummaryStats,
    pub insight_key: &'static str,
}

/// Scenario-keyed export section.
///
/// Serializes as a JSON object whose keys appear in the order the pairs were
/// pushed, which for the assembled module is scenario catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionMap<T>(pub Vec<(&'static str, T)>);

impl<T: Serialize> Serialize for RegionMap<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
