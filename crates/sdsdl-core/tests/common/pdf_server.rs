//! Minimal HTTP/1.1 server for integration tests.
//!
//! Answers every GET with one canned response (status, Content-Type, body)
//! and counts requests. Can also cut the body short or stall before replying.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct PdfServerOptions {
    /// Status line after `HTTP/1.1 `, e.g. "200 OK".
    pub status: &'static str,
    /// `Content-Type` header; omitted when None.
    pub content_type: Option<&'static str>,
    /// Close the connection after this many body bytes while still
    /// advertising the full `Content-Length`.
    pub truncate_to: Option<usize>,
    /// Sleep before answering (for client timeout tests).
    pub stall: Option<Duration>,
}

impl Default for PdfServerOptions {
    fn default() -> Self {
        Self {
            status: "200 OK",
            content_type: Some("application/pdf"),
            truncate_to: None,
            stall: None,
        }
    }
}

pub struct PdfServer {
    /// e.g. "http://127.0.0.1:12345/v1/SDS//DocContentSet"
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    paths: Arc<Mutex<Vec<String>>>,
    accept_headers: Arc<Mutex<Vec<Option<String>>>>,
}

impl PdfServer {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }

    /// `Accept` header of each request, in arrival order.
    pub fn accept_headers(&self) -> Vec<Option<String>> {
        self.accept_headers.lock().unwrap().clone()
    }

    pub fn url(&self, path: &str) -> String {
        let root = self.base_url.split("/v1/").next().unwrap_or_default();
        format!("{}{}", root, path)
    }
}

/// Starts a server in a background thread serving `body` as a PDF.
/// The server runs until the process exits.
pub fn start(body: Vec<u8>) -> PdfServer {
    start_with_options(body, PdfServerOptions::default())
}

pub fn start_with_options(body: Vec<u8>, opts: PdfServerOptions) -> PdfServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    let hits = Arc::new(AtomicUsize::new(0));
    let paths = Arc::new(Mutex::new(Vec::new()));
    let accept_headers = Arc::new(Mutex::new(Vec::new()));
    {
        let hits = Arc::clone(&hits);
        let paths = Arc::clone(&paths);
        let accept_headers = Arc::clone(&accept_headers);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let body = Arc::clone(&body);
                let opts = opts.clone();
                let hits = Arc::clone(&hits);
                let paths = Arc::clone(&paths);
                let accept_headers = Arc::clone(&accept_headers);
                thread::spawn(move || {
                    handle(stream, &body, &opts, &hits, &paths, &accept_headers)
                });
            }
        });
    }
    PdfServer {
        base_url: format!("http://127.0.0.1:{}/v1/SDS//DocContentSet", port),
        hits,
        paths,
        accept_headers,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    body: &[u8],
    opts: &PdfServerOptions,
    hits: &AtomicUsize,
    paths: &Mutex<Vec<String>>,
    accept_headers: &Mutex<Vec<Option<String>>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let (method, path, accept) = parse_request(request);
    hits.fetch_add(1, Ordering::SeqCst);
    paths.lock().unwrap().push(path.to_string());
    accept_headers.lock().unwrap().push(accept.map(str::to_string));

    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
        return;
    }
    if let Some(d) = opts.stall {
        thread::sleep(d);
    }

    let content_type = opts
        .content_type
        .map(|ct| format!("Content-Type: {}\r\n", ct))
        .unwrap_or_default();
    let response = format!(
        "HTTP/1.1 {}\r\n{}Content-Length: {}\r\nConnection: close\r\n\r\n",
        opts.status,
        content_type,
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let sent = opts.truncate_to.unwrap_or(body.len()).min(body.len());
    let _ = stream.write_all(&body[..sent]);
    let _ = stream.flush();
}

/// Returns (method, path, Accept header).
fn parse_request(request: &str) -> (&str, &str, Option<&str>) {
    let mut method = "";
    let mut path = "";
    let mut accept = None;
    for (i, line) in request.lines().enumerate() {
        let line = line.trim();
        if i == 0 {
            let mut parts = line.split_whitespace();
            method = parts.next().unwrap_or("");
            path = parts.next().unwrap_or("");
            continue;
        }
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("accept") {
                accept = Some(value.trim());
            }
        }
    }
    (method, path, accept)
}
