//! Document URL templating.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::records::Record;

/// Characters in a field value that would break the path or the quoted key
/// literal. Everything else (alphanumerics, `_`, `-`, `.`) passes through, so
/// ordinary records render byte-for-byte as plain substitution would.
pub(crate) const FIELD: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}')
    .add(b'[')
    .add(b']');

/// Trailing path after the key predicate.
const CONTENT_SUFFIX: &str = "/DocContentData/$value";

/// Encodes one field for use inside `Key='...'`: quotes are doubled (OData
/// literal escaping), then reserved and non-ASCII bytes are percent-encoded.
pub(crate) fn encode_field(value: &str) -> String {
    let quoted = value.replace('\'', "''");
    utf8_percent_encode(&quoted, FIELD).to_string()
}

/// Builds the content URL for one record:
/// `<base>(Matnr='..',Subid='..',Sbgvid='..',Laiso='..',Vkorg='')/DocContentData/$value`.
pub fn build_url(base_url: &str, record: &Record) -> String {
    format!(
        "{}(Matnr='{}',Subid='{}',Sbgvid='{}',Laiso='{}',Vkorg=''){}",
        base_url,
        encode_field(&record.material_number),
        encode_field(&record.sub_id),
        encode_field(&record.storage_location),
        encode_field(&record.language_iso),
        CONTENT_SUFFIX
    )
}

/// Builds one URL per record, in record order (duplicates kept).
pub fn build_urls(base_url: &str, records: &[Record]) -> Vec<String> {
    records.iter().map(|r| build_url(base_url, r)).collect()
}
