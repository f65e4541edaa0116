//! Record source: the local JSON snapshot of document headers.
//!
//! Each entry names one document variant by material number, sub id,
//! storage/location code and language. Order is preserved from the snapshot.

mod snapshot;

use anyhow::{Context, Result};
use std::path::Path;

use snapshot::{Snapshot, SnapshotEntry};

/// Four identifying fields of one SDS document variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    /// `Matnr`
    pub material_number: String,
    /// `Subid`
    pub sub_id: String,
    /// `Sbgvid`
    pub storage_location: String,
    /// `Laiso`
    pub language_iso: String,
}

impl Record {
    pub fn new(
        material_number: impl Into<String>,
        sub_id: impl Into<String>,
        storage_location: impl Into<String>,
        language_iso: impl Into<String>,
    ) -> Self {
        Self {
            material_number: material_number.into(),
            sub_id: sub_id.into(),
            storage_location: storage_location.into(),
            language_iso: language_iso.into(),
        }
    }
}

impl From<SnapshotEntry> for Record {
    fn from(e: SnapshotEntry) -> Self {
        Record {
            material_number: e.material_number,
            sub_id: e.sub_id,
            storage_location: e.storage_location,
            language_iso: e.language_iso,
        }
    }
}

/// Parse snapshot bytes into records, in snapshot order.
pub fn parse_snapshot(bytes: &[u8]) -> Result<Vec<Record>> {
    let snapshot: Snapshot = serde_json::from_slice(bytes).context("parse snapshot JSON")?;
    Ok(snapshot
        .data
        .results
        .into_iter()
        .map(Record::from)
        .collect())
}

/// Read and parse the snapshot at `path`.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read snapshot: {}", path.display()))?;
    parse_snapshot(&bytes).with_context(|| format!("snapshot: {}", path.display()))
}

/// Like `load_records`, but an unreadable or unparsable snapshot is logged and
/// yields zero records so the run degrades to a no-op instead of aborting.
pub fn load_records_lenient(path: &Path) -> Vec<Record> {
    match load_records(path) {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("failed to load records, continuing with none: {:#}", e);
            Vec::new()
        }
    }
}
