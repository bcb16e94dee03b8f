//! Remote sources serving compressed monthly archives.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{Client, Response};
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, instrument};

use ocean_common::{DatasetSpec, MonthId};

use crate::cache::partial_path;
use crate::error::{FetchError, Result};

/// HTTP request timeout (whole transfer, not per chunk).
const REQUEST_TIMEOUT: Duration = Duration::from_secs(600); // 10 minutes
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// A remote endpoint that can deliver one month of one dataset as a
/// gzip-compressed CSV archive.
#[async_trait]
pub trait RasterSource: Send + Sync {
    /// Fetch the archive for `dataset`/`month` into `destination`.
    ///
    /// On success `destination` holds the complete archive. On failure no
    /// file may be left at `destination`.
    async fn fetch_archive(
        &self,
        dataset: &DatasetSpec,
        month: MonthId,
        destination: &Path,
    ) -> Result<()>;
}

/// Source backed by the NASA NEO archive tree.
pub struct NeoArchiveSource {
    client: Client,
    base_url: String,
}

impl NeoArchiveSource {
    /// Create a source rooted at `base_url` (e.g. `https://neo.gsfc.nasa.gov`).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// URL of the compressed CSV archive for one dataset month.
    pub fn archive_url(&self, dataset: &DatasetSpec, month: MonthId) -> String {
        format!(
            "{}/archive/csv/{code}/{code}_{month}.CSV.gz",
            self.base_url,
            code = dataset.code,
            month = month
        )
    }
}

#[async_trait]
impl RasterSource for NeoArchiveSource {
    #[instrument(skip(self, destination), fields(dataset = %dataset.code, month = %month))]
    async fn fetch_archive(
        &self,
        dataset: &DatasetSpec,
        month: MonthId,
        destination: &Path,
    ) -> Result<()> {
        let url = self.archive_url(dataset, month);
        debug!(url = %url, "Requesting archive");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(FetchError::RemoteStatus {
                url,
                status: status.as_u16(),
            });
        }

        let bytes = stream_to_file(response, destination).await?;
        info!(path = %destination.display(), bytes, "Archive downloaded");
        Ok(())
    }
}

/// Stream a response body to `destination` through a `.partial` sidecar so an
/// interrupted transfer never leaves a truncated archive at the final path.
async fn stream_to_file(response: Response, destination: &Path) -> Result<u64> {
    let partial = partial_path(destination);
    let mut file = File::create(&partial).await?;

    match copy_body(response, &mut file).await {
        Ok(bytes) => {
            drop(file);
            fs::rename(&partial, destination).await?;
            Ok(bytes)
        }
        Err(e) => {
            drop(file);
            fs::remove_file(&partial).await.ok();
            Err(e)
        }
    }
}

async fn copy_body(response: Response, file: &mut File) -> Result<u64> {
    let mut stream = response.bytes_stream();
    let mut downloaded = 0u64;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        downloaded += chunk.len() as u64;
    }

    file.flush().await?;
    file.sync_all().await?;
    Ok(downloaded)
}
