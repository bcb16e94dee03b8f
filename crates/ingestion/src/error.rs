//! Error types for archive fetching.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while mirroring NEO archives into the local cache.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to download {url} (status {status})")]
    RemoteStatus { url: String, status: u16 },

    #[error("Failed to transfer archive: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decompress {}: {source}", path.display())]
    Decode { path: PathBuf, source: io::Error },

    #[error("Cache I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Result type for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;
