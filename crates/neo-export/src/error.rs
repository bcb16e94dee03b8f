//! Error types for module assembly and rendering.

use std::io;

use thiserror::Error;

/// Errors that can occur while assembling or writing the data module.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Cannot assemble a data module from an empty run of months")]
    EmptyRun,

    #[error("Failed to serialize export section: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write module: {0}")]
    Io(#[from] io::Error),
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
