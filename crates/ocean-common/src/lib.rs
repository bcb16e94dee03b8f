//! Common types and utilities shared across the NEO ocean pipeline crates.

pub mod bounds;
pub mod dataset;
pub mod error;
pub mod month;
pub mod raster;
pub mod round;

pub use bounds::RegionBounds;
pub use dataset::DatasetSpec;
pub use error::{ConfigError, ConfigResult};
pub use month::MonthId;
pub use raster::{GridWindow, RasterSpec};
pub use round::{fmt_fixed, round_half_up, round_to};
