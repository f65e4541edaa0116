//! HTTP transport seam.
//!
//! The downloader and the listing helper talk to the network only through
//! `Transport`, so tests can substitute a fake. `CurlTransport` is the real
//! implementation (blocking libcurl easy handle, one per request).

mod libcurl;
mod parse;

pub use libcurl::CurlTransport;

use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::time::Duration;

/// Explicit client configuration passed to the transport at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Whole-request timeout (connect, headers and body).
    pub timeout: Duration,
    /// Optional separate connect timeout.
    pub connect_timeout: Option<Duration>,
    /// Redirects followed before giving up (0 disables following).
    pub max_redirects: u32,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: None,
            max_redirects: 10,
        }
    }
}

/// Failure before any response status was received (DNS, connect, timeout, TLS).
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("{0}")]
    Curl(#[from] curl::Error),
    #[error("transfer finished without an HTTP status line")]
    NoResponse,
}

impl TransportError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Curl(e) if e.is_operation_timedout())
    }
}

/// Final response of a GET. The body is read by the caller.
pub struct HttpResponse {
    pub status: u32,
    /// Reason phrase from the status line; empty for HTTP/2.
    pub reason: String,
    pub content_type: Option<String>,
    pub body: Box<dyn Read + Send>,
}

impl HttpResponse {
    pub fn new(
        status: u32,
        reason: impl Into<String>,
        content_type: Option<&str>,
        body: impl Read + Send + 'static,
    ) -> Self {
        Self {
            status,
            reason: reason.into(),
            content_type: content_type.map(str::to_string),
            body: Box::new(body),
        }
    }

    /// `"404 Not Found"`, or just `"404"` when there is no reason phrase.
    pub fn status_text(&self) -> String {
        if self.reason.is_empty() {
            self.status.to_string()
        } else {
            format!("{} {}", self.status, self.reason)
        }
    }
}

impl fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status)
            .field("reason", &self.reason)
            .field("content_type", &self.content_type)
            .finish_non_exhaustive()
    }
}

/// Blocking HTTP GET.
pub trait Transport {
    /// Performs a GET with the given extra request headers (empty for a bare GET).
    fn get(&self, url: &str, headers: &HashMap<String, String>)
        -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
    ) -> Result<HttpResponse, TransportError> {
        (**self).get(url, headers)
    }
}
