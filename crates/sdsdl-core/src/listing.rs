//! One-shot refresh of the local snapshot from the listing endpoint.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use crate::records;
use crate::storage;
use crate::transport::Transport;

/// GETs `listing_url` as JSON and saves the body to `dest`, replacing any
/// previous snapshot. Returns the number of bytes saved.
///
/// A body that does not parse as a snapshot is still saved (and logged), so
/// the raw response can be inspected.
pub fn scrape_listing<T: Transport>(transport: &T, listing_url: &str, dest: &Path) -> Result<u64> {
    let mut headers = HashMap::new();
    headers.insert("Accept".to_string(), "application/json".to_string());

    let mut response = transport
        .get(listing_url, &headers)
        .with_context(|| format!("GET {}", listing_url))?;
    if response.status != 200 {
        anyhow::bail!("GET {} returned HTTP {}", listing_url, response.status_text());
    }

    let mut body = Vec::new();
    response
        .body
        .read_to_end(&mut body)
        .with_context(|| format!("read listing body from {}", listing_url))?;

    match records::parse_snapshot(&body) {
        Ok(recs) => tracing::info!("listing holds {} record(s)", recs.len()),
        Err(e) => tracing::warn!("listing body is not a snapshot, saving anyway: {:#}", e),
    }

    let written = storage::write_atomically(dest, &body)
        .with_context(|| format!("save listing to {}", dest.display()))?;
    tracing::info!("saved {} bytes from {} to {}", written, listing_url, dest.display());
    Ok(written)
}
