//! Global raster geometry and region windows.

use serde::{Deserialize, Serialize};

use crate::bounds::RegionBounds;
use crate::error::ConfigError;

/// Geometry of a regular global raster scanned north-to-south, west-to-east.
///
/// Row 0 sits just below +90 latitude, column 0 just east of -180 longitude.
/// Cell values are centred within their cells.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RasterSpec {
    /// Cells per degree of latitude
    pub lat_factor: f64,
    /// Cells per degree of longitude
    pub lon_factor: f64,
    /// Total rows in the global raster
    pub total_rows: usize,
    /// Total columns in the global raster
    pub total_cols: usize,
}

impl RasterSpec {
    /// Create a validated raster specification.
    pub fn new(
        lat_factor: f64,
        lon_factor: f64,
        total_rows: usize,
        total_cols: usize,
    ) -> Result<Self, ConfigError> {
        if !lat_factor.is_finite() || lat_factor <= 0.0 {
            return Err(ConfigError::InvalidRaster(format!(
                "latFactor must be a positive number, got {}",
                lat_factor
            )));
        }
        if !lon_factor.is_finite() || lon_factor <= 0.0 {
            return Err(ConfigError::InvalidRaster(format!(
                "lonFactor must be a positive number, got {}",
                lon_factor
            )));
        }
        if total_rows == 0 || total_cols == 0 {
            return Err(ConfigError::InvalidRaster(format!(
                "raster dimensions must be non-zero, got {}x{}",
                total_rows, total_cols
            )));
        }

        Ok(Self {
            lat_factor,
            lon_factor,
            total_rows,
            total_cols,
        })
    }

    /// NEO 0.1-degree monthly products: 1800 rows by 3600 columns.
    pub fn neo_0p1() -> Self {
        Self {
            lat_factor: 10.0,
            lon_factor: 10.0,
            total_rows: 1800,
            total_cols: 3600,
        }
    }

    /// Degrees of latitude spanned by one cell.
    pub fn lat_step(&self) -> f64 {
        1.0 / self.lat_factor
    }

    /// Degrees of longitude spanned by one cell.
    pub fn lon_step(&self) -> f64 {
        1.0 / self.lon_factor
    }

    /// Compute the inclusive row/column window covering a region.
    ///
    /// The window is clamped to the raster's valid index ranges, so a region
    /// touching the raster edge never produces out-of-range indices.
    pub fn window(&self, bounds: &RegionBounds) -> GridWindow {
        let row_start = ((90.0 - bounds.lat_max as f64) * self.lat_factor)
            .floor()
            .max(0.0) as usize;
        let row_end = (((90.0 - bounds.lat_min as f64) * self.lat_factor).ceil() as usize)
            .min(self.total_rows - 1);
        let col_start = ((bounds.lon_min as f64 + 180.0) * self.lon_factor)
            .floor()
            .max(0.0) as usize;
        let col_end = (((bounds.lon_max as f64 + 180.0) * self.lon_factor).ceil() as usize)
            .min(self.total_cols - 1);

        GridWindow {
            row_start,
            row_end,
            col_start,
            col_end,
        }
    }

    /// Latitude of the centre of a global row.
    pub fn row_to_lat(&self, row: usize) -> f64 {
        90.0 - (row as f64 + 0.5) / self.lat_factor
    }

    /// Longitude of the centre of a global column.
    pub fn col_to_lon(&self, col: usize) -> f64 {
        -180.0 + (col as f64 + 0.5) / self.lon_factor
    }
}

/// Inclusive row/column window inside a global raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridWindow {
    pub row_start: usize,
    pub row_end: usize,
    pub col_start: usize,
    pub col_end: usize,
}

impl GridWindow {
    /// Number of rows covered, both ends inclusive.
    pub fn height(&self) -> usize {
        self.row_end - self.row_start + 1
    }

    /// Number of columns covered, both ends inclusive.
    pub fn width(&self) -> usize {
        self.col_end - self.col_start + 1
    }

    /// Check whether a global row index falls inside the window.
    pub fn contains_row(&self, row: usize) -> bool {
        row >= self.row_start && row <= self.row_end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gulf_stream_region() -> RegionBounds {
        RegionBounds::new(30, 45, -80, -60).unwrap()
    }

    #[test]
    fn test_window_for_gulf_stream_region() {
        let spec = RasterSpec::neo_0p1();
        let window = spec.window(&gulf_stream_region());

        assert_eq!(window.row_start, 450);
        assert_eq!(window.row_end, 600);
        assert_eq!(window.col_start, 1000);
        assert_eq!(window.col_end, 1200);
        assert_eq!(window.height(), 151);
        assert_eq!(window.width(), 201);
    }

    #[test]
    fn test_window_round_trip_stays_near_region() {
        let spec = RasterSpec::neo_0p1();
        let bounds = gulf_stream_region();
        let window = spec.window(&bounds);

        // Every windowed cell centre lies within one cell width of the region.
        for row in window.row_start..=window.row_end {
            let lat = spec.row_to_lat(row);
            assert!(lat <= bounds.lat_max as f64 + spec.lat_step());
            assert!(lat >= bounds.lat_min as f64 - spec.lat_step());
        }
        for col in window.col_start..=window.col_end {
            let lon = spec.col_to_lon(col);
            assert!(lon >= bounds.lon_min as f64 - spec.lon_step());
            assert!(lon <= bounds.lon_max as f64 + spec.lon_step());
        }
    }

    #[test]
    fn test_window_clamps_at_raster_edges() {
        let spec = RasterSpec::neo_0p1();

        let north = RegionBounds::new(80, 90, -180, -170).unwrap();
        let window = spec.window(&north);
        assert_eq!(window.row_start, 0);
        assert_eq!(window.col_start, 0);

        let south = RegionBounds::new(-90, -80, 170, 180).unwrap();
        let window = spec.window(&south);
        assert_eq!(window.row_end, 1799);
        assert_eq!(window.col_end, 3599);
    }

    #[test]
    fn test_cell_centre_coordinates() {
        let spec = RasterSpec::neo_0p1();

        assert!((spec.row_to_lat(0) - 89.95).abs() < 1e-9);
        assert!((spec.row_to_lat(450) - 44.95).abs() < 1e-9);
        assert!((spec.col_to_lon(0) + 179.95).abs() < 1e-9);
        assert!((spec.col_to_lon(3599) - 179.95).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_spec_rejected() {
        assert!(RasterSpec::new(0.0, 10.0, 1800, 3600).is_err());
        assert!(RasterSpec::new(10.0, -1.0, 1800, 3600).is_err());
        assert!(RasterSpec::new(10.0, 10.0, 0, 3600).is_err());
    }

    #[test]
    fn test_contains_row() {
        let spec = RasterSpec::neo_0p1();
        let window = spec.window(&gulf_stream_region());

        assert!(window.contains_row(450));
        assert!(window.contains_row(600));
        assert!(!window.contains_row(449));
        assert!(!window.contains_row(601));
    }
}
