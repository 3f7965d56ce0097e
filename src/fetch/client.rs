//! Streaming downloader for the directory exports.

use std::path::Path;
use std::time::Duration;

use futures::StreamExt;
use reqwest::Client;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info};

use crate::progress::{ByteCounter, ProgressObserver};

use super::FetchError;

/// HTTP request timeout in seconds.
/// The exports are a few tens of megabytes; five minutes covers a slow
/// link without letting a dead connection hang forever.
const REQUEST_TIMEOUT_SECS: u64 = 300;

/// Fetches a remote export and streams it to disk.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self { client })
    }

    /// Download `url` into the file at `path`, replacing any existing
    /// content, and return the number of bytes written.
    ///
    /// The destination is created (or truncated) before the request is
    /// issued, so a create failure aborts without touching the network.
    /// A non-2xx status aborts before any body bytes are written - an
    /// error page must never end up in the cache. If the stream fails
    /// midway the partially written file is left on disk; the file
    /// existing does not imply the download completed.
    pub async fn download<O: ProgressObserver>(
        &self,
        path: &Path,
        url: &str,
        observer: O,
    ) -> Result<u64, FetchError> {
        let write_err = |source| FetchError::Write {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path)
            .await
            .map_err(|source| FetchError::CreateFile {
                path: path.to_path_buf(),
                source,
            })?;

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status));
        }

        info!(url, path = %path.display(), "Download started");

        let mut writer = BufWriter::new(file);
        let mut counter = ByteCounter::new(observer);
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            writer.write_all(&chunk).await.map_err(write_err)?;
            counter.record(chunk.len());
        }

        writer.flush().await.map_err(write_err)?;

        let total = counter.finish();
        debug!(bytes = total, "Stream copy complete");
        info!(path = %path.display(), bytes = total, "Download finished");
        Ok(total)
    }
}
