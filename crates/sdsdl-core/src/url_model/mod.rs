//! URL modeling and filename derivation.
//!
//! Turns snapshot records into document URLs, drops duplicate URLs, and maps
//! each URL back to the deterministic local filename used as the on-disk
//! dedup key.

mod dedup;
mod filename;
mod sanitize;
mod template;

pub use dedup::dedup_urls;
pub use filename::{filename_from_url, FilenameError, MAX_FILENAME_LEN};
pub use template::{build_url, build_urls};

use crate::records::Record;

/// Builds URLs for all records and removes duplicates, keeping first-seen order.
pub fn unique_urls(base_url: &str, records: &[Record]) -> Vec<String> {
    dedup_urls(build_urls(base_url, records))
}
