//! libcurl-backed transport.

use std::collections::HashMap;
use std::io::{self, Cursor, Read};
use std::str;

use super::parse::parse_response_head;
use super::{HttpClientConfig, HttpResponse, Transport, TransportError};

/// Blocking transport: one `curl::easy::Easy` per request, configured from
/// `HttpClientConfig`. Holds no connection state between requests.
#[derive(Debug, Clone, Default)]
pub struct CurlTransport {
    config: HttpClientConfig,
}

impl CurlTransport {
    pub fn new(config: HttpClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }
}

/// Body that yields the bytes received before the transfer broke, then the error.
struct TruncatedBody {
    received: Cursor<Vec<u8>>,
    error: Option<io::Error>,
}

impl Read for TruncatedBody {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.received.read(buf)?;
        if n > 0 || buf.is_empty() {
            return Ok(n);
        }
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(0),
        }
    }
}

impl Transport for CurlTransport {
    fn get(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
    ) -> Result<HttpResponse, TransportError> {
        let mut header_lines: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(self.config.max_redirects > 0)?;
        easy.max_redirections(self.config.max_redirects)?;
        easy.timeout(self.config.timeout)?;
        if let Some(connect) = self.config.connect_timeout {
            easy.connect_timeout(connect)?;
        }

        let mut list = curl::easy::List::new();
        for (k, v) in headers {
            list.append(&format!("{}: {}", k.trim(), v.trim()))?;
        }
        if !headers.is_empty() {
            easy.http_headers(list)?;
        }

        let performed = {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    header_lines.push(s.trim_end().to_string());
                }
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()
        };

        let head = parse_response_head(&header_lines);
        match (performed, head) {
            (Ok(()), Some(head)) => Ok(HttpResponse::new(
                head.status,
                head.reason,
                head.content_type.as_deref(),
                Cursor::new(body),
            )),
            (Ok(()), None) => Err(TransportError::NoResponse),
            // A redirect hop that never reached its target is still a network failure.
            (Err(e), Some(head)) if !(300..400).contains(&head.status) => {
                tracing::debug!(url, error = %e, "transfer broke after response head");
                Ok(HttpResponse::new(
                    head.status,
                    head.reason,
                    head.content_type.as_deref(),
                    TruncatedBody {
                        received: Cursor::new(body),
                        error: Some(io::Error::new(io::ErrorKind::Other, e)),
                    },
                ))
            }
            (Err(e), _) => Err(TransportError::Curl(e)),
        }
    }
}
