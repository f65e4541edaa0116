//! One sequential pass: records → unique URLs → downloads.

use anyhow::Result;
use std::path::Path;

use crate::config::SdsConfig;
use crate::downloader::{Downloader, Outcome};
use crate::records;
use crate::storage;
use crate::transport::Transport;
use crate::url_model;

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: usize,
    /// Bytes written by successful downloads.
    pub bytes: u64,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Success { bytes_written, .. } => {
                self.downloaded += 1;
                self.bytes += bytes_written;
            }
            Outcome::Skipped { .. } => self.skipped += 1,
            Outcome::Failed(_) => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.downloaded + self.skipped + self.failed
    }
}

/// Downloads each URL in order, one at a time. Failures are logged and the
/// loop moves on; `on_outcome` sees every result as it happens.
pub fn run_batch<T, F>(
    downloader: &Downloader<T>,
    urls: &[String],
    output_dir: &Path,
    mut on_outcome: F,
) -> RunSummary
where
    T: Transport,
    F: FnMut(&str, &Outcome),
{
    let mut summary = RunSummary::default();
    for (i, url) in urls.iter().enumerate() {
        let outcome = downloader.download(url, output_dir);
        match &outcome {
            Outcome::Success {
                bytes_written,
                path,
            } => tracing::info!(
                "[{}/{}] downloaded {} bytes: {} -> {}",
                i + 1,
                urls.len(),
                bytes_written,
                url,
                path.display()
            ),
            Outcome::Skipped { path } => {
                tracing::debug!("[{}/{}] exists, skipping: {}", i + 1, urls.len(), path.display())
            }
            Outcome::Failed(e) => {
                tracing::warn!(kind = ?e.kind(), "[{}/{}] {}", i + 1, urls.len(), e)
            }
        }
        summary.record(&outcome);
        on_outcome(url, &outcome);
    }
    summary
}

/// Loads the records named by `cfg` and returns the deduplicated URL list.
///
/// With `strict_input` an unreadable or unparsable snapshot is an error;
/// otherwise it is logged and the list is empty.
pub fn collect_urls(cfg: &SdsConfig) -> Result<Vec<String>> {
    let recs = if cfg.strict_input {
        records::load_records(&cfg.input_path)?
    } else {
        records::load_records_lenient(&cfg.input_path)
    };
    let urls = url_model::unique_urls(&cfg.base_url, &recs);
    tracing::info!(
        "{} record(s) in {}, {} unique URL(s)",
        recs.len(),
        cfg.input_path.display(),
        urls.len()
    );
    Ok(urls)
}

/// Full run: collect URLs, make sure the output directory exists, download.
///
/// A failure to create the output directory is logged, not returned; the
/// individual writes then fail and are reported per URL.
pub fn run<T, F>(cfg: &SdsConfig, downloader: &Downloader<T>, on_outcome: F) -> Result<RunSummary>
where
    T: Transport,
    F: FnMut(&str, &Outcome),
{
    let urls = collect_urls(cfg)?;
    match storage::ensure_output_dir(&cfg.output_dir) {
        Ok(true) => tracing::info!("created output directory {}", cfg.output_dir.display()),
        Ok(false) => {}
        Err(e) => tracing::error!("{:#}", e),
    }
    let summary = run_batch(downloader, &urls, &cfg.output_dir, on_outcome);
    tracing::info!(
        "run finished: {} downloaded, {} skipped, {} failed ({} bytes)",
        summary.downloaded,
        summary.skipped,
        summary.failed,
        summary.bytes
    );
    Ok(summary)
}
