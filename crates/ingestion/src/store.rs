//! Cache-aware download and unpacking of monthly rasters.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use bytes::Bytes;
use tokio::fs;
use tracing::{debug, instrument};

use ocean_common::{DatasetSpec, MonthId};

use crate::cache::{partial_path, CacheLayout};
use crate::error::{FetchError, Result};
use crate::source::RasterSource;

/// Fills the local cache from a [`RasterSource`] on demand.
///
/// The cache invariant is simple: once the unpacked CSV for a month exists,
/// that month is done and the store never issues another request for it. The
/// intermediate `.CSV.gz` archive is also kept, so a run that died between
/// download and unpacking resumes with decompression only.
pub struct RasterStore<S: RasterSource> {
    source: S,
    layout: CacheLayout,
}

impl<S: RasterSource> RasterStore<S> {
    pub fn new(source: S, layout: CacheLayout) -> Self {
        Self { source, layout }
    }

    pub fn layout(&self) -> &CacheLayout {
        &self.layout
    }

    /// Make sure the unpacked CSV grid for `dataset`/`month` exists locally.
    ///
    /// Returns the path of the CSV, downloading and decompressing only the
    /// pieces that are missing.
    #[instrument(skip(self), fields(dataset = %dataset.code, month = %month))]
    pub async fn ensure_raster(&self, dataset: &DatasetSpec, month: MonthId) -> Result<PathBuf> {
        let csv_path = self.layout.csv_path(dataset, month);
        if csv_path.exists() {
            debug!(path = %csv_path.display(), "CSV already cached, skipping");
            return Ok(csv_path);
        }

        fs::create_dir_all(self.layout.dataset_dir(dataset)).await?;

        let archive_path = self.layout.archive_path(dataset, month);
        if archive_path.exists() {
            debug!(path = %archive_path.display(), "Archive already cached, skipping download");
        } else {
            self.source
                .fetch_archive(dataset, month, &archive_path)
                .await?;
        }

        unpack_archive(&archive_path, &csv_path).await?;
        Ok(csv_path)
    }
}

/// Unpack a downloaded archive to its CSV path via a `.partial` sidecar.
///
/// A decode failure leaves the archive in place for inspection and reports
/// which file was corrupt.
async fn unpack_archive(archive_path: &Path, csv_path: &Path) -> Result<()> {
    let compressed = fs::read(archive_path).await?;
    let decompressed = decompress_gzip(&compressed).map_err(|source| FetchError::Decode {
        path: archive_path.to_path_buf(),
        source,
    })?;

    let partial = partial_path(csv_path);
    fs::write(&partial, &decompressed).await?;
    fs::rename(&partial, csv_path).await?;

    debug!(path = %csv_path.display(), bytes = decompressed.len(), "Archive unpacked");
    Ok(())
}

/// Decompress a gzip archive held in memory.
pub fn decompress_gzip(data: &[u8]) -> io::Result<Bytes> {
    let mut decoder = flate2::read::GzDecoder::new(data);
    let mut decompressed = Vec::new();
    decoder.read_to_end(&mut decompressed)?;
    Ok(Bytes::from(decompressed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::gzip_bytes;

    #[test]
    fn test_decompress_gzip_round_trip() {
        let original = b"24.5,25.1\n23.9,99999.0\n";
        let compressed = gzip_bytes(original);

        let result = decompress_gzip(&compressed).expect("valid gzip should decompress");
        assert_eq!(result.as_ref(), original);
    }

    #[test]
    fn test_decompress_gzip_empty_payload() {
        let compressed = gzip_bytes(b"");
        let result = decompress_gzip(&compressed).expect("empty gzip should decompress");
        assert!(result.is_empty());
    }

    #[test]
    fn test_decompress_gzip_rejects_junk() {
        let result = decompress_gzip(b"not gzip data");
        assert!(result.is_err());
    }
}
