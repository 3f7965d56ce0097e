use std::io;
use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to create {path}: {source}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Network error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {0}")]
    HttpStatus(StatusCode),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FetchError {
    /// True when the destination file may hold a truncated body.
    /// `CreateFile` failures happen before any bytes arrive, and a bad
    /// status is detected before streaming starts.
    pub fn leaves_partial_file(&self) -> bool {
        matches!(self, FetchError::Request(_) | FetchError::Write { .. })
    }
}
