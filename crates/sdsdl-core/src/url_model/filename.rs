//! Filename derivation from a document URL.

use percent_encoding::percent_decode_str;
use regex::Regex;
use std::sync::OnceLock;

use super::sanitize::{sanitize_component, NAME_MAX};
use crate::storage::TEMP_SUFFIX;

/// Longest accepted name: the `.part` temp file must also fit in NAME_MAX.
pub const MAX_FILENAME_LEN: usize = NAME_MAX - TEMP_SUFFIX.len();

/// Why a URL could not be turned into a filename.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilenameError {
    #[error("URL does not contain Matnr/Subid/Sbgvid/Laiso keys")]
    MissingKeys,
    #[error("key field {field} is not valid UTF-8 after decoding")]
    InvalidEncoding { field: &'static str },
    #[error("derived filename is {0} bytes, over the 250-byte limit")]
    TooLong(usize),
}

fn key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // A quoted literal is any run of non-quote chars or doubled quotes.
        Regex::new(
            r"Matnr='((?:[^']|'')*)',Subid='((?:[^']|'')*)',Sbgvid='((?:[^']|'')*)',Laiso='((?:[^']|'')*)'",
        )
        .expect("key pattern is valid")
    })
}

fn decode_field(raw: &str, field: &'static str) -> Result<String, FilenameError> {
    let unquoted = raw.replace("''", "'");
    percent_decode_str(&unquoted)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|_| FilenameError::InvalidEncoding { field })
}

/// Derives the on-disk name `<matnr>_<subid>_<sbgvid>_<laiso>.pdf`, lower-cased.
///
/// Deterministic for a given URL; this name is the cross-run dedup key.
///
/// # Examples
///
/// - `...(Matnr='290031915',Subid='630000000001',Sbgvid='SDS_FR',Laiso='FR',Vkorg='')/...`
///   → `"290031915_630000000001_sds_fr_fr.pdf"`
pub fn filename_from_url(url: &str) -> Result<String, FilenameError> {
    let caps = key_pattern()
        .captures(url)
        .ok_or(FilenameError::MissingKeys)?;

    let mut fields = Vec::with_capacity(4);
    for (i, name) in ["Matnr", "Subid", "Sbgvid", "Laiso"].into_iter().enumerate() {
        let raw = caps.get(i + 1).map(|m| m.as_str()).unwrap_or_default();
        fields.push(decode_field(raw, name)?);
    }

    let name = sanitize_component(&format!("{}.pdf", fields.join("_")).to_lowercase());
    if name.len() > MAX_FILENAME_LEN {
        return Err(FilenameError::TooLong(name.len()));
    }
    Ok(name)
}
