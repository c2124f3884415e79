// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

/// Fatal failures for either pipeline.
///
/// Recoverable conditions (a heading that isn't on the page, a markdown line
/// that doesn't parse) are never errors; they are logged and skipped.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure talking to the source page.
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The source page answered, but not with a success status.
    #[error("{url} answered with HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// Intermediate or output file could not be read or written.
    #[error("{}: {source}", path.display())]
    FileIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The override file named in `RELIC_SCRAPE_CONFIG` is unusable.
    #[error("config {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    #[error("invalid selector `{0}`")]
    Selector(String),

    #[error("could not encode page data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Usage(String),
}

impl Error {
    pub(crate) fn file_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::FileIo { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
