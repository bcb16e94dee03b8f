//! NEO ocean activity pipeline.
//!
//! Downloads monthly NASA NEO rasters (sea surface temperature and
//! chlorophyll concentration), derives per-cell ecological features for a
//! fixed study region, and writes the aggregated results as one importable
//! JS data module.

mod config;
mod pipeline;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use ingestion::{CacheLayout, NeoArchiveSource, RasterStore};

use config::{FileConfig, Overrides, PipelineConfig};

#[derive(Parser, Debug)]
#[command(name = "pipeline")]
#[command(about = "Builds the ocean activity data module from NASA NEO rasters")]
struct Args {
    /// YAML file with run settings (flags still win)
    #[arg(long, env = "PIPELINE_CONFIG")]
    config: Option<PathBuf>,

    /// NEO archive base URL
    #[arg(long, env = "NEO_BASE_URL")]
    base_url: Option<String>,

    /// First month of the run (YYYY-MM)
    #[arg(long, env = "PIPELINE_START_MONTH")]
    start_month: Option<String>,

    /// Number of consecutive months to process
    #[arg(long, env = "PIPELINE_MONTH_COUNT")]
    month_count: Option<usize>,

    /// Region bounds as "latMin,latMax,lonMin,lonMax"
    #[arg(long)]
    region: Option<String>,

    /// Cache directory for downloaded rasters
    #[arg(long, env = "PIPELINE_RAW_DIR")]
    raw_dir: Option<PathBuf>,

    /// Path of the emitted data module
    #[arg(long, env = "PIPELINE_OUTPUT")]
    output: Option<PathBuf>,

    /// Maximum points in the exported scatter cloud
    #[arg(long)]
    scatter_limit: Option<usize>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(true)
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting NEO ocean pipeline");

    if let Err(error) = build(args).await {
        error!("Pipeline run failed: {error:#}");
        std::process::exit(1);
    }

    Ok(())
}

async fn build(args: Args) -> Result<()> {
    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };

    let overrides = Overrides {
        base_url: args.base_url,
        start_month: args.start_month,
        month_count: args.month_count,
        raw_dir: args.raw_dir,
        output: args.output,
        scatter_limit: args.scatter_limit,
        region: args.region,
    };

    let config = PipelineConfig::resolve(file, overrides)?;
    let source = NeoArchiveSource::new(&config.base_url)?;
    let store = RasterStore::new(source, CacheLayout::new(&config.raw_dir));

    pipeline::run(&config, &store).await
}
