//! Parse HTTP response header lines into a ResponseHead.

/// Status and the headers the downloader looks at, for the final response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResponseHead {
    pub status: u32,
    pub reason: String,
    pub content_type: Option<String>,
}

/// Parse collected header lines. Lines from redirect hops and interim (1xx)
/// responses are skipped: only the block after the last status line counts.
/// Returns None if no status line was seen.
pub(crate) fn parse_response_head(lines: &[String]) -> Option<ResponseHead> {
    let start = lines.iter().rposition(|l| l.starts_with("HTTP/"))?;
    let (status, reason) = parse_status_line(&lines[start])?;

    let mut content_type = None;
    for line in &lines[start + 1..] {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-type") {
                content_type = Some(value.trim().to_string());
            }
        }
    }

    Some(ResponseHead {
        status,
        reason,
        content_type,
    })
}

/// `HTTP/1.1 404 Not Found` → (404, "Not Found"); `HTTP/2 200` → (200, "").
fn parse_status_line(line: &str) -> Option<(u32, String)> {
    let mut parts = line.trim().splitn(3, ' ');
    let _version = parts.next()?;
    let status = parts.next()?.trim().parse::<u32>().ok()?;
    let reason = parts.next().unwrap_or("").trim().to_string();
    Some((status, reason))
}
