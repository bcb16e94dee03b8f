//! End-to-end orchestration of one pipeline run.
//!
//! The run is strictly phased: every raster is fetched before any derivation
//! starts, months are derived in chronological order, and the data module is
//! written only once the whole run has been assembled. A failure anywhere
//! leaves the previous output untouched.

use anyhow::{Context, Result};
use tracing::info;

use features::{derive_month, MonthStats};
use ingestion::{RasterSource, RasterStore};
use neo_csv::{read_region_grid_from_path, RegionGrid};
use neo_export::{DataModule, SourceInfo};
use ocean_common::{DatasetSpec, GridWindow, MonthId};

use crate::config::PipelineConfig;

/// Run the full pipeline: fetch, derive, assemble, write.
pub async fn run<S: RasterSource>(config: &PipelineConfig, store: &RasterStore<S>) -> Result<()> {
    let months = config.months();
    let window = config.raster.window(&config.region);

    info!(
        start = %config.start_month,
        months = months.len(),
        rows = window.height(),
        cols = window.width(),
        "Starting pipeline run"
    );

    fetch_all(config, store, &months).await?;
    let derived = derive_all(config, store, &window, &months)?;

    let sources = SourceInfo {
        sst: config.sst.source.clone(),
        chlorophyll: config.chlorophyll.source.clone(),
    };
    let module = DataModule::assemble(&derived, &sources, config.scatter_limit)
        .context("Failed to assemble the data module")?;
    module
        .write(&config.output)
        .await
        .with_context(|| format!("Failed to write {}", config.output.display()))?;

    info!(path = %config.output.display(), "Pipeline run complete");
    Ok(())
}

/// Fill the cache, dataset-major so one product's months land together.
async fn fetch_all<S: RasterSource>(
    config: &PipelineConfig,
    store: &RasterStore<S>,
    months: &[MonthId],
) -> Result<()> {
    for dataset in [&config.sst, &config.chlorophyll] {
        for &month in months {
            store
                .ensure_raster(dataset, month)
                .await
                .with_context(|| format!("Failed to fetch {} for {}", dataset.code, month))?;
        }
    }
    Ok(())
}

/// Derive the feature set for every month of the run.
fn derive_all<S: RasterSource>(
    config: &PipelineConfig,
    store: &RasterStore<S>,
    window: &GridWindow,
    months: &[MonthId],
) -> Result<Vec<MonthStats>> {
    let mut derived = Vec::with_capacity(months.len());
    for &month in months {
        let sst = read_grid(store, &config.sst, month, window)?;
        let chl = read_grid(store, &config.chlorophyll, month, window)?;
        derived.push(derive_month(month, &sst, &chl, &config.raster, window));
    }
    Ok(derived)
}

fn read_grid<S: RasterSource>(
    store: &RasterStore<S>,
    dataset: &DatasetSpec,
    month: MonthId,
    window: &GridWindow,
) -> Result<RegionGrid> {
    let path = store.layout().csv_path(dataset, month);
    read_region_grid_from_path(&path, window)
        .with_context(|| format!("Failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use ingestion::{CacheLayout, FetchError};
    use ocean_common::dataset::datasets;
    use ocean_common::{RasterSpec, RegionBounds};
    use test_utils::{csv_raster, gzip_bytes};

    /// One cell per degree keeps the fixtures small: the default region maps
    /// to rows 45..=60 and columns 100..=120.
    fn test_config(root: &Path) -> PipelineConfig {
        PipelineConfig {
            base_url: "https://neo.test".to_string(),
            start_month: MonthId::parse("2024-09").unwrap(),
            month_count: 3,
            raw_dir: root.join("raw"),
            output: root.join("out").join("mockData.js"),
            scatter_limit: 50,
            region: RegionBounds::new(30, 45, -80, -60).unwrap(),
            raster: RasterSpec::new(1.0, 1.0, 180, 360).unwrap(),
            sst: datasets::neo_sst(),
            chlorophyll: datasets::neo_chlorophyll(),
        }
    }

    /// Serves synthetic archives: an SST field that warms southward and
    /// eastward, and a chlorophyll field that rises southward. Each month is
    /// shifted by its month number so the scenarios pick distinct months.
    struct FakeArchive {
        calls: Arc<AtomicUsize>,
    }

    impl FakeArchive {
        fn new() -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    calls: calls.clone(),
                },
                calls,
            )
        }
    }

    #[async_trait]
    impl RasterSource for FakeArchive {
        async fn fetch_archive(
            &self,
            dataset: &DatasetSpec,
            month: MonthId,
            destination: &Path,
        ) -> ingestion::Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let seed = month.month() as f64;
            let csv = match dataset.key.as_str() {
                "sst" => csv_raster(61, 121, move |row, col| {
                    Some(18.0 + seed + row as f64 * 0.05 + col as f64 * 0.01)
                }),
                _ => csv_raster(61, 121, move |row, _| {
                    Some(0.2 + seed * 0.05 + row as f64 * 0.01)
                }),
            };
            tokio::fs::write(destination, gzip_bytes(csv.as_bytes())).await?;
            Ok(())
        }
    }

    struct UnreachableArchive;

    #[async_trait]
    impl RasterSource for UnreachableArchive {
        async fn fetch_archive(
            &self,
            dataset: &DatasetSpec,
            month: MonthId,
            _destination: &Path,
        ) -> ingestion::Result<()> {
            Err(FetchError::RemoteStatus {
                url: format!("https://neo.test/{}/{}", dataset.code, month),
                status: 404,
            })
        }
    }

    #[tokio::test]
    async fn test_run_produces_data_module() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let (source, calls) = FakeArchive::new();
        let store = RasterStore::new(source, CacheLayout::new(&config.raw_dir));

        run(&config, &store).await.unwrap();

        // Two datasets, three months each.
        assert_eq!(calls.load(Ordering::SeqCst), 6);

        let content = std::fs::read_to_string(&config.output).unwrap();
        assert!(content.starts_with("// Generated by neo-pipeline on "));
        assert!(content.contains("export const oceanLayers = {"));
        assert!(content.contains("export const simulationTimeline = ["));
        assert!(content.ends_with(";\n"));
    }

    #[tokio::test]
    async fn test_months_appear_chronologically() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let (source, _calls) = FakeArchive::new();
        let store = RasterStore::new(source, CacheLayout::new(&config.raw_dir));

        run(&config, &store).await.unwrap();

        let content = std::fs::read_to_string(&config.output).unwrap();
        let sep = content.find("\"hour\": \"Sep 2024\"").unwrap();
        let oct = content.find("\"hour\": \"Oct 2024\"").unwrap();
        let nov = content.find("\"hour\": \"Nov 2024\"").unwrap();
        assert!(sep < oct && oct < nov);
    }

    #[tokio::test]
    async fn test_second_run_fetches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let (source, calls) = FakeArchive::new();
        let store = RasterStore::new(source, CacheLayout::new(&config.raw_dir));

        run(&config, &store).await.unwrap();
        let first = std::fs::read_to_string(&config.output).unwrap();
        run(&config, &store).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 6);

        // Identical output modulo the generated-on header.
        let second = std::fs::read_to_string(&config.output).unwrap();
        assert_eq!(
            first.lines().skip(1).collect::<Vec<_>>(),
            second.lines().skip(1).collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let store = RasterStore::new(UnreachableArchive, CacheLayout::new(&config.raw_dir));

        let err = run(&config, &store).await.unwrap_err();

        assert!(format!("{:#}", err).contains("Failed to fetch MYD28M for 2024-09"));
        assert!(!config.output.exists());
    }
}
