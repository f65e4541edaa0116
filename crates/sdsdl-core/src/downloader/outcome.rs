//! Tagged result of one download attempt.

use std::fmt;
use std::path::PathBuf;

use super::error::{DownloadError, FailureKind};

#[derive(Debug)]
pub enum Outcome {
    /// The body was written to `path`.
    Success { bytes_written: u64, path: PathBuf },
    /// A file was already at `path`; nothing was fetched.
    Skipped { path: PathBuf },
    Failed(DownloadError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Outcome::Skipped { .. })
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Outcome::Failed(e) => Some(e.kind()),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success {
                bytes_written,
                path,
            } => write!(f, "downloaded {} bytes to {}", bytes_written, path.display()),
            Outcome::Skipped { path } => {
                write!(f, "file already exists, skipping: {}", path.display())
            }
            Outcome::Failed(e) => write!(f, "{}", e),
        }
    }
}
