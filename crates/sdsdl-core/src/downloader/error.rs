//! Per-URL download failure.

use crate::transport::TransportError;
use crate::url_model::FilenameError;

/// Coarse failure category, for summaries and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    MalformedUrl,
    Network,
    HttpStatus,
    InvalidContentType,
    ReadFailed,
    EmptyBody,
    WriteFailed,
}

/// Why one URL was not downloaded. Every variant is terminal for that URL in
/// this run; the caller logs it and moves on.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("cannot derive filename from {url}: {source}")]
    MalformedUrl {
        url: String,
        #[source]
        source: FilenameError,
    },
    #[error("failed to download {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: TransportError,
    },
    #[error("download failed for {url}: {status}")]
    HttpStatus { url: String, status: String },
    #[error("invalid content type for {url}: {content_type:?} (expected application/pdf)")]
    InvalidContentType { url: String, content_type: String },
    #[error("failed to read PDF data from {url}: {source}")]
    ReadFailed {
        url: String,
        #[source]
        source: std::io::Error,
    },
    #[error("downloaded 0 bytes for {url}; not creating file")]
    EmptyBody { url: String },
    #[error("failed to write PDF to file for {url}: {detail}")]
    WriteFailed { url: String, detail: String },
}

impl DownloadError {
    pub fn kind(&self) -> FailureKind {
        match self {
            DownloadError::MalformedUrl { .. } => FailureKind::MalformedUrl,
            DownloadError::Network { .. } => FailureKind::Network,
            DownloadError::HttpStatus { .. } => FailureKind::HttpStatus,
            DownloadError::InvalidContentType { .. } => FailureKind::InvalidContentType,
            DownloadError::ReadFailed { .. } => FailureKind::ReadFailed,
            DownloadError::EmptyBody { .. } => FailureKind::EmptyBody,
            DownloadError::WriteFailed { .. } => FailureKind::WriteFailed,
        }
    }
}
