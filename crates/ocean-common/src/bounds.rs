//! Geographic region bounds.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A rectangular geographic region in whole degrees.
///
/// Latitudes are degrees north in [-90, 90], longitudes degrees east in
/// [-180, 180]. Validated once at startup and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionBounds {
    pub lat_min: i32,
    pub lat_max: i32,
    pub lon_min: i32,
    pub lon_max: i32,
}

impl RegionBounds {
    /// Create validated region bounds.
    pub fn new(
        lat_min: i32,
        lat_max: i32,
        lon_min: i32,
        lon_max: i32,
    ) -> Result<Self, ConfigError> {
        let bounds = Self {
            lat_min,
            lat_max,
            lon_min,
            lon_max,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Parse a region argument string: "latMin,latMax,lonMin,lonMax"
    pub fn from_arg_string(s: &str) -> Result<Self, ConfigError> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 4 {
            return Err(ConfigError::InvalidBounds(format!(
                "expected 'latMin,latMax,lonMin,lonMax', got '{}'",
                s
            )));
        }

        let mut values = [0i32; 4];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part.trim().parse().map_err(|_| {
                ConfigError::InvalidBounds(format!("'{}' is not a whole degree value", part))
            })?;
        }

        Self::new(values[0], values[1], values[2], values[3])
    }

    /// Check the ordering and range invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lat_min >= self.lat_max {
            return Err(ConfigError::InvalidBounds(format!(
                "latMin ({}) must be less than latMax ({})",
                self.lat_min, self.lat_max
            )));
        }
        if self.lon_min >= self.lon_max {
            return Err(ConfigError::InvalidBounds(format!(
                "lonMin ({}) must be less than lonMax ({})",
                self.lon_min, self.lon_max
            )));
        }
        if self.lat_min < -90 || self.lat_max > 90 {
            return Err(ConfigError::InvalidBounds(format!(
                "latitudes must lie within [-90, 90], got [{}, {}]",
                self.lat_min, self.lat_max
            )));
        }
        if self.lon_min < -180 || self.lon_max > 180 {
            return Err(ConfigError::InvalidBounds(format!(
                "longitudes must lie within [-180, 180], got [{}, {}]",
                self.lon_min, self.lon_max
            )));
        }
        Ok(())
    }

    /// Latitude span in degrees.
    pub fn lat_span(&self) -> i32 {
        self.lat_max - self.lat_min
    }

    /// Longitude span in degrees.
    pub fn lon_span(&self) -> i32 {
        self.lon_max - self.lon_min
    }

    /// Check if a coordinate lies within the region (inclusive edges).
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.lat_min as f64
            && lat <= self.lat_max as f64
            && lon >= self.lon_min as f64
            && lon <= self.lon_max as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_bounds() {
        let bounds = RegionBounds::new(30, 45, -80, -60).unwrap();
        assert_eq!(bounds.lat_span(), 15);
        assert_eq!(bounds.lon_span(), 20);
        assert!(bounds.contains(37.5, -70.0));
        assert!(!bounds.contains(50.0, -70.0));
    }

    #[test]
    fn test_inverted_latitudes_rejected() {
        let err = RegionBounds::new(45, 30, -80, -60).unwrap_err();
        assert!(err.to_string().contains("latMin"));
    }

    #[test]
    fn test_inverted_longitudes_rejected() {
        assert!(RegionBounds::new(30, 45, -60, -80).is_err());
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(RegionBounds::new(-95, 45, -80, -60).is_err());
        assert!(RegionBounds::new(30, 95, -80, -60).is_err());
        assert!(RegionBounds::new(30, 45, -190, -60).is_err());
        assert!(RegionBounds::new(30, 45, -80, 185).is_err());
    }

    #[test]
    fn test_parse_arg_string() {
        let bounds = RegionBounds::from_arg_string("30,45,-80,-60").unwrap();
        assert_eq!(bounds.lat_min, 30);
        assert_eq!(bounds.lat_max, 45);
        assert_eq!(bounds.lon_min, -80);
        assert_eq!(bounds.lon_max, -60);
    }

    #[test]
    fn test_parse_arg_string_rejects_garbage() {
        assert!(RegionBounds::from_arg_string("30,45,-80").is_err());
        assert!(RegionBounds::from_arg_string("30,45,-80,west").is_err());
        assert!(RegionBounds::from_arg_string("30.5,45,-80,-60").is_err());
    }
}
