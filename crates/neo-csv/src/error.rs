//! Error types for CSV raster extraction.

use thiserror::Error;

/// Errors that can occur while extracting a raster window.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to read raster: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;
