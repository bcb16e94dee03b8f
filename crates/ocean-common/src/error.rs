//! Error types shared across the pipeline crates.

use thiserror::Error;

/// Result type alias using ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Fatal configuration problems, detected before any network or file work.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid region bounds: {0}")]
    InvalidBounds(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid raster spec: {0}")]
    InvalidRaster(String),

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("Invalid setting for '{setting}': {message}")]
    InvalidSetting { setting: String, message: String },
}
