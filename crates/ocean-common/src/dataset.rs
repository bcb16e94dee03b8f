//! Dataset descriptors for NEO archive products.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Describes one NEO raster product consumed by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSpec {
    /// Short key used in configuration and logs, e.g. "sst"
    pub key: String,
    /// NEO product code used in archive paths, e.g. "MYD28M"
    pub code: String,
    /// Provenance label surfaced in the published data module
    pub source: String,
}

impl DatasetSpec {
    /// Create a validated dataset descriptor.
    ///
    /// The code lands in filenames and URLs, so it is restricted to
    /// alphanumerics, underscores and hyphens.
    pub fn new(key: &str, code: &str, source: &str) -> Result<Self, ConfigError> {
        if key.is_empty() {
            return Err(ConfigError::InvalidDataset(
                "dataset key must not be empty".to_string(),
            ));
        }
        if code.is_empty()
            || !code
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ConfigError::InvalidDataset(format!(
                "dataset code '{}' must be non-empty alphanumeric/underscore/hyphen",
                code
            )));
        }
        if source.is_empty() {
            return Err(ConfigError::InvalidDataset(format!(
                "dataset '{}' is missing a source label",
                key
            )));
        }

        Ok(Self {
            key: key.to_string(),
            code: code.to_string(),
            source: source.to_string(),
        })
    }
}

/// Known NEO products.
pub mod datasets {
    use super::*;

    /// MODIS Aqua sea surface temperature, monthly.
    pub fn neo_sst() -> DatasetSpec {
        DatasetSpec {
            key: "sst".to_string(),
            code: "MYD28M".to_string(),
            source: "NASA NEO (MODIS Aqua SST)".to_string(),
        }
    }

    /// MODIS Aqua chlorophyll-a concentration, monthly.
    pub fn neo_chlorophyll() -> DatasetSpec {
        DatasetSpec {
            key: "chlorophyll".to_string(),
            code: "MY1DMM_CHLORA".to_string(),
            source: "NASA NEO (MODIS-Aqua Chlorophyll-a)".to_string(),
        }
    }
}
