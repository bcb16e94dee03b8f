//! Assembly and rendering of the importable data module.

use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tokio::fs;
use tracing::{info, instrument};

use analytics::{
    correlation_matrix, sample_scatter, select_scenarios, Scenario, SCENARIO_BASELINE,
    SCENARIO_NIGHT,
};
use features::MonthStats;

use crate::error::{ExportError, Result};
use crate::layers::{build_layers, SourceInfo};
use crate::series::{
    build_analytics_series, build_scatter_export, build_seasonal_series, correlation_wire,
};
use crate::stats::{
    build_insight_regions, build_summary_stats, conceptual_model, scenario_description,
};
use crate::wire::{
    AnalyticsSeries, ConceptualModel, CorrelationMatrixWire, InsightRegion, LayerSet, RegionMap,
    ScatterExportPoint, SeasonalPoint, SummaryStats, TimelineEntry, TimelineFilters,
};

/// Name the generated file reports in its header comment.
const GENERATOR_NAME: &str = "neo-pipeline";

/// Everything the generated module exports, in file order.
#[derive(Debug, Clone)]
pub struct DataModule {
    pub ocean_layers: LayerSet,
    pub analytics_series: AnalyticsSeries,
    pub summary_stats: SummaryStats,
    pub conceptual_model: ConceptualModel,
    pub seasonal_series_by_region: RegionMap<Vec<SeasonalPoint>>,
    pub correlation_matrices_by_region: RegionMap<CorrelationMatrixWire>,
    pub scatter_clouds_by_region: RegionMap<Vec<ScatterExportPoint>>,
    pub insight_regions: Vec<InsightRegion>,
    pub simulation_timeline: Vec<TimelineEntry>,
}

impl DataModule {
    /// Assemble the module from a chronological run of derived months.
    ///
    /// Every series inherits the run's order, so the caller must pass months
    /// chronologically. Fails on an empty run, since no scenario can be
    /// chosen from it.
    pub fn assemble(
        months: &[MonthStats],
        sources: &SourceInfo,
        scatter_limit: usize,
    ) -> Result<Self> {
        let scenarios = select_scenarios(months).ok_or(ExportError::EmptyRun)?;
        let baseline = scenarios[0].stats;

        let analytics_series = build_analytics_series(months);
        let scatter = sample_scatter(months, scatter_limit);
        let matrix = correlation_wire(&correlation_matrix(&scatter));
        let seasonal = build_seasonal_series(months);
        let scatter_export = build_scatter_export(&scatter);
        let simulation_timeline = build_timeline(&scenarios, &analytics_series, baseline, sources);

        Ok(Self {
            ocean_layers: build_layers(baseline, SCENARIO_BASELINE, sources),
            analytics_series,
            summary_stats: build_summary_stats(baseline, baseline),
            conceptual_model: conceptual_model(sources),
            seasonal_series_by_region: region_map(&scenarios, |_| seasonal.clone()),
            correlation_matrices_by_region: region_map(&scenarios, |_| matrix.clone()),
            scatter_clouds_by_region: region_map(&scenarios, |_| scatter_export.clone()),
            insight_regions: build_insight_regions(&scenarios),
            simulation_timeline,
        })
    }

    /// Render the importable JS module with the given generation time.
    ///
    /// Deterministic: the same module and timestamp always produce the same
    /// text.
    pub fn render(&self, generated_at: DateTime<Utc>) -> Result<String> {
        let sections: [(&str, String); 9] = [
            ("oceanLayers", to_pretty(&self.ocean_layers)?),
            ("analyticsSeries", to_pretty(&self.analytics_series)?),
            ("summaryStats", to_pretty(&self.summary_stats)?),
            ("conceptualModel", to_pretty(&self.conceptual_model)?),
            (
                "seasonalSeriesByRegion",
                to_pretty(&self.seasonal_series_by_region)?,
            ),
            (
                "correlationMatricesByRegion",
                to_pretty(&self.correlation_matrices_by_region)?,
            ),
            (
                "scatterCloudsByRegion",
                to_pretty(&self.scatter_clouds_by_region)?,
            ),
            ("insightRegions", to_pretty(&self.insight_regions)?),
            ("simulationTimeline", to_pretty(&self.simulation_timeline)?),
        ];

        let mut out = format!(
            "// Generated by {} on {}\n",
            GENERATOR_NAME,
            generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
        );
        for (index, (name, json)) in sections.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str("export const ");
            out.push_str(name);
            out.push_str(" = ");
            out.push_str(json);
            out.push_str(";\n");
        }

        Ok(out)
    }

    /// Render with the current time and write atomically to `path`.
    #[instrument(skip(self, path), fields(path = %path.display()))]
    pub async fn write(&self, path: &Path) -> Result<()> {
        let content = self.render(Utc::now())?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let partial = partial_path(path);
        fs::write(&partial, content.as_bytes()).await?;
        fs::rename(&partial, path).await?;

        info!(bytes = content.len(), "Data module written");
        Ok(())
    }
}

/// Timeline entries, one per scenario in catalog order.
fn build_timeline(
    scenarios: &[Scenario<'_>; 4],
    analytics: &AnalyticsSeries,
    reference: &MonthStats,
    sources: &SourceInfo,
) -> Vec<TimelineEntry> {
    scenarios
        .iter()
        .map(|scenario| TimelineEntry {
            id: scenario.id,
            label: scenario.label,
            description: scenario_description(scenario.id, scenario.stats),
            filters: TimelineFilters {
                depth_range: [0, 240],
                temperature_range: [
                    (scenario.stats.sst_mean - 2.0).floor().max(0.0) as i64,
                    (scenario.stats.sst_mean + 2.0).ceil() as i64,
                ],
                time_filter: if scenario.id == SCENARIO_NIGHT {
                    "night"
                } else {
                    "day"
                },
            },
            layers: build_layers(scenario.stats, scenario.id, sources),
            analytics: analytics.clone(),
            stats: build_summary_stats(scenario.stats, reference),
            insight_key: scenario.id,
        })
        .collect()
}

fn region_map<T>(
    scenarios: &[Scenario<'_>; 4],
    value: impl Fn(&Scenario<'_>) -> T,
) -> RegionMap<T> {
    RegionMap(
        scenarios
            .iter()
            .map(|scenario| (scenario.id, value(scenario)))
            .collect(),
    )
}

fn to_pretty<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".partial");
    PathBuf::from(name)
}
