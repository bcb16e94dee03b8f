//! Assembly and rendering of the importable ocean data module.
//!
//! The pipeline's single artifact is a JS module of named `export const`
//! sections: map layers, chart series, summary statistics, and the
//! scenario timeline. This crate holds the serialized shapes of those
//! sections, the builders that fill them from derived monthly features,
//! and the renderer that writes the final file.

pub mod error;
pub mod layers;
pub mod module;
pub mod series;
pub mod stats;
pub mod wire;

pub use error::{ExportError, Result};
pub use layers::{build_layers, SourceInfo, DERIVED_SOURCE};
pub use module::DataModule;
pub use series::{build_analytics_series, build_scatter_export, build_seasonal_series};
pub use stats::{build_summary_stats, scenario_description};
