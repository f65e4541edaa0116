//! Minimal OData v2 snapshot structures (`{"d": {"results": [...]}}`).

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct Snapshot {
    #[serde(rename = "d")]
    pub data: SnapshotData,
}

#[derive(Debug, Deserialize)]
pub(super) struct SnapshotData {
    pub results: Vec<SnapshotEntry>,
}

/// One document header as served by the listing endpoint. Other fields are ignored.
#[derive(Debug, Deserialize)]
pub(super) struct SnapshotEntry {
    #[serde(rename = "Matnr")]
    pub material_number: String,
    #[serde(rename = "Subid")]
    pub sub_id: String,
    #[serde(rename = "Sbgvid")]
    pub storage_location: String,
    #[serde(rename = "Laiso")]
    pub language_iso: String,
}
