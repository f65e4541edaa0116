//! Single-document downloader.
//!
//! One GET per URL through the injected `Transport`. The body is validated
//! (status 200, PDF content type, non-empty) and held in memory before any
//! file is created, so every failure short of the final write leaves the
//! output directory untouched.

mod error;
mod outcome;

pub use error::{DownloadError, FailureKind};
pub use outcome::Outcome;

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use crate::storage;
use crate::transport::Transport;
use crate::url_model::filename_from_url;

/// Media-type token the response `Content-Type` must contain.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

pub struct Downloader<T> {
    transport: T,
}

impl<T: Transport> Downloader<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Downloads `url` into `output_dir` (which must exist).
    ///
    /// Skips without any request when the derived file is already present.
    /// No retries: every failure is final for this URL in this run.
    pub fn download(&self, url: &str, output_dir: &Path) -> Outcome {
        match self.try_download(url, output_dir) {
            Ok(outcome) => outcome,
            Err(e) => Outcome::Failed(e),
        }
    }

    fn try_download(&self, url: &str, output_dir: &Path) -> Result<Outcome, DownloadError> {
        let filename = filename_from_url(url).map_err(|source| DownloadError::MalformedUrl {
            url: url.to_string(),
            source,
        })?;
        let path = output_dir.join(&filename);

        if storage::file_exists(&path) {
            return Ok(Outcome::Skipped { path });
        }

        let mut response =
            self.transport
                .get(url, &HashMap::new())
                .map_err(|source| DownloadError::Network {
                    url: url.to_string(),
                    source,
                })?;

        if response.status != 200 {
            return Err(DownloadError::HttpStatus {
                url: url.to_string(),
                status: response.status_text(),
            });
        }

        let content_type = response.content_type.clone().unwrap_or_default();
        if !content_type.to_ascii_lowercase().contains(PDF_MEDIA_TYPE) {
            return Err(DownloadError::InvalidContentType {
                url: url.to_string(),
                content_type,
            });
        }

        let mut body = Vec::new();
        response
            .body
            .read_to_end(&mut body)
            .map_err(|source| DownloadError::ReadFailed {
                url: url.to_string(),
                source,
            })?;
        if body.is_empty() {
            return Err(DownloadError::EmptyBody {
                url: url.to_string(),
            });
        }
        tracing::debug!(url, bytes = body.len(), "body received");

        let bytes_written =
            storage::write_atomically(&path, &body).map_err(|e| DownloadError::WriteFailed {
                url: url.to_string(),
                detail: format!("{:#}", e),
            })?;

        Ok(Outcome::Success {
            bytes_written,
            path,
        })
    }
}
