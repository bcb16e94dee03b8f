//! Archive download and local cache management for NASA NEO rasters.
//!
//! NEO serves each month of a dataset as a gzip-compressed CSV grid. This
//! crate mirrors those archives into a per-dataset cache directory and
//! unpacks them into the plain CSV files the rest of the pipeline reads.
//! A month whose unpacked CSV already exists is never fetched again, so an
//! interrupted run picks up where it stopped.

pub mod cache;
pub mod error;
pub mod source;
pub mod store;

pub use cache::CacheLayout;
pub use error::{FetchError, Result};
pub use source::{NeoArchiveSource, RasterSource};
pub use store::{decompress_gzip, RasterStore};
