//! NEO CSV raster reading.
//!
//! NEO publishes monthly rasters as gzipped CSV: one line per raster row
//! starting at +90 latitude, one comma-separated value per column starting
//! at -180 longitude, with large sentinel values standing in for cells that
//! have no retrieval.

pub mod error;
pub mod extract;
pub mod grid;

pub use error::{ExtractError, Result};
pub use extract::{
    parse_cell_token, read_region_grid, read_region_grid_from_path, NO_DATA_THRESHOLD,
};
pub use grid::RegionGrid;
