//! Pipeline run configuration.
//!
//! Defaults describe the standard Gulf Stream run. A YAML file and
//! command-line flags can override individual settings; flags win over the
//! file, the file wins over the defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use analytics::DEFAULT_SCATTER_LIMIT;
use ocean_common::dataset::datasets;
use ocean_common::{ConfigError, DatasetSpec, MonthId, RasterSpec, RegionBounds};

/// NEO archive host serving the monthly CSV products.
pub const DEFAULT_BASE_URL: &str = "https://neo.gsfc.nasa.gov";
/// First month of the standard run.
pub const DEFAULT_START_MONTH: &str = "2024-09";
/// Consecutive months in the standard run.
pub const DEFAULT_MONTH_COUNT: usize = 12;
/// Cache directory for downloaded rasters.
pub const DEFAULT_RAW_DIR: &str = "data/raw";
/// Path the generated data module is written to.
pub const DEFAULT_OUTPUT_FILE: &str = "src/data/mockData.js";

/// Optional overrides loaded from a YAML run file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub start_month: Option<String>,
    #[serde(default)]
    pub month_count: Option<usize>,
    #[serde(default)]
    pub raw_dir: Option<PathBuf>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub scatter_limit: Option<usize>,
    #[serde(default)]
    pub region: Option<RegionBounds>,
}

impl FileConfig {
    /// Load override settings from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: FileConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        debug!(path = %path.display(), "Loaded run configuration");
        Ok(config)
    }
}

/// Command-line overrides, applied on top of any file settings.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub start_month: Option<String>,
    pub month_count: Option<usize>,
    pub raw_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub scatter_limit: Option<usize>,
    pub region: Option<String>,
}

/// Fully resolved settings for one pipeline run.
///
/// Everything downstream reads from this bundle; nothing in the library
/// crates consults flags or environment variables.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub base_url: String,
    pub start_month: MonthId,
    pub month_count: usize,
    pub raw_dir: PathBuf,
    pub output: PathBuf,
    pub scatter_limit: usize,
    pub region: RegionBounds,
    pub raster: RasterSpec,
    pub sst: DatasetSpec,
    pub chlorophyll: DatasetSpec,
}

impl PipelineConfig {
    /// Combine defaults, file settings and command-line overrides.
    pub fn resolve(file: FileConfig, overrides: Overrides) -> Result<Self> {
        let start_text = overrides
            .start_month
            .or(file.start_month)
            .unwrap_or_else(|| DEFAULT_START_MONTH.to_string());
        let start_month = MonthId::parse(&start_text)?;

        let month_count = overrides
            .month_count
            .or(file.month_count)
            .unwrap_or(DEFAULT_MONTH_COUNT);
        if month_count == 0 {
            return Err(ConfigError::InvalidSetting {
                setting: "month_count".to_string(),
                message: "a run needs at least one month".to_string(),
            }
            .into());
        }

        let region = match overrides.region {
            Some(arg) => RegionBounds::from_arg_string(&arg)?,
            None => match file.region {
                Some(bounds) => {
                    bounds.validate()?;
                    bounds
                }
                None => default_region(),
            },
        };

        Ok(Self {
            base_url: overrides
                .base_url
                .or(file.base_url)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            start_month,
            month_count,
            raw_dir: overrides
                .raw_dir
                .or(file.raw_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RAW_DIR)),
            output: overrides
                .output
                .or(file.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE)),
            scatter_limit: overrides
                .scatter_limit
                .or(file.scatter_limit)
                .unwrap_or(DEFAULT_SCATTER_LIMIT),
            region,
            raster: RasterSpec::neo_0p1(),
            sst: datasets::neo_sst(),
            chlorophyll: datasets::neo_chlorophyll(),
        })
    }

    /// The consecutive months this run covers, in chronological order.
    pub fn months(&self) -> Vec<MonthId> {
        MonthId::sequence(self.start_month, self.month_count)
    }
}

/// Gulf Stream study region, 30-45 N by 80-60 W.
fn default_region() -> RegionBounds {
    RegionBounds {
        lat_min: 30,
        lat_max: 45,
        lon_min: -80,
        lon_max: -60,
    }
}
