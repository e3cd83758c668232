//! Minimal HTTP/1.1 server for fetcher integration tests.
//!
//! Serves one canned response to every GET. Paths under `/r/` first answer
//! with a 302 to the same path without the prefix. Counts requests so tests
//! can assert that no network call was made.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct PdfServerOptions {
    pub status: &'static str,
    /// `None` omits the Content-Type header.
    pub content_type: Option<&'static str>,
    pub body: Vec<u8>,
    /// Sleep before answering (to trigger client timeouts).
    pub stall: Option<Duration>,
    /// Advertise more bytes than are sent, then close (truncated body).
    pub truncate: bool,
}

impl PdfServerOptions {
    pub fn pdf(body: Vec<u8>) -> Self {
        Self {
            status: "200 OK",
            content_type: Some("application/pdf"),
            body,
            stall: None,
            truncate: false,
        }
    }
}

pub struct PdfServer {
    base_url: String,
    hits: Arc<AtomicUsize>,
}

impl PdfServer {
    /// URL for `path` on this server (`path` starts with `/`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Number of requests received so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread. The server runs until the process exits.
pub fn start(opts: PdfServerOptions) -> PdfServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_srv = Arc::clone(&hits);
    let opts = Arc::new(opts);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let opts = Arc::clone(&opts);
            let hits = Arc::clone(&hits_srv);
            thread::spawn(move || handle(stream, &opts, &hits));
        }
    });
    PdfServer {
        base_url: format!("http://127.0.0.1:{}", port),
        hits,
    }
}

fn handle(mut stream: TcpStream, opts: &PdfServerOptions, hits: &AtomicUsize) {
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
    hits.fetch_add(1, Ordering::SeqCst);
    let (method, path) = parse_request_line(request);
    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        return;
    }

    if let Some(rest) = path.strip_prefix("/r/") {
        let response = format!(
            "HTTP/1.1 302 Found\r\nLocation: /{}\r\nContent-Type: text/html\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            rest
        );
        let _ = stream.write_all(response.as_bytes());
        return;
    }

    if let Some(d) = opts.stall {
        thread::sleep(d);
    }

    let content_type = opts
        .content_type
        .map(|ct| format!("Content-Type: {}\r\n", ct))
        .unwrap_or_default();
    let advertised = if opts.truncate {
        opts.body.len() * 2 + 1
    } else {
        opts.body.len()
    };
    let response = format!(
        "HTTP/1.1 {}\r\n{}Content-Length: {}\r\nConnection: close\r\n\r\n",
        opts.status, content_type, advertised
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(&opts.body);
}

/// Returns (method, path) from the request line.
fn parse_request_line(request: &str) -> (&str, &str) {
    let line = request.lines().next().unwrap_or("");
    let mut parts = line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("/");
    (method, path)
}
