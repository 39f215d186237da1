//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a single static body for every path and counts the requests it
//! receives. Every response closes the connection.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// How the `Content-Length` header is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentLength {
    /// The real body length.
    Exact,
    /// No header; the body ends when the connection closes.
    Omitted,
    /// `Content-Length: 0` with an empty body.
    Zero,
    /// Announces more bytes than are sent, then closes.
    Truncated,
}

#[derive(Debug, Clone, Copy)]
pub struct ServerOptions {
    pub status: u16,
    pub content_length: ContentLength,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            status: 200,
            content_length: ContentLength::Exact,
        }
    }
}

pub struct TestServer {
    base: String,
    hits: Arc<AtomicUsize>,
}

impl TestServer {
    /// URL of `path` on this server, e.g. `http://127.0.0.1:1234/gpt-j-hf/config.json`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path.trim_start_matches('/'))
    }

    /// Number of requests served so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread serving `body` with status 200.
/// The server runs until the process exits.
pub fn start(body: Vec<u8>) -> TestServer {
    start_with_options(body, ServerOptions::default())
}

pub fn start_with_options(body: Vec<u8>, opts: ServerOptions) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let counter = Arc::clone(&counter);
            thread::spawn(move || handle(stream, &body, opts, &counter));
        }
    });
    TestServer {
        base: format!("http://127.0.0.1:{}/", port),
        hits,
    }
}

/// A URL on a port nothing listens on.
pub fn unreachable_url(path: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/{}", port, path.trim_start_matches('/'))
}

fn handle(mut stream: TcpStream, body: &[u8], opts: ServerOptions, hits: &AtomicUsize) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    if !read_request_head(&mut stream) {
        return;
    }
    hits.fetch_add(1, Ordering::SeqCst);

    let body: &[u8] = if opts.status == 204 {
        &[]
    } else if opts.status != 200 {
        b"not here"
    } else if opts.content_length == ContentLength::Zero {
        &[]
    } else {
        body
    };
    let length_header = match opts.content_length {
        _ if opts.status == 204 => String::new(),
        ContentLength::Exact | ContentLength::Zero => {
            format!("Content-Length: {}\r\n", body.len())
        }
        ContentLength::Truncated if opts.status == 200 => {
            format!("Content-Length: {}\r\n", body.len() + 1024)
        }
        ContentLength::Truncated => format!("Content-Length: {}\r\n", body.len()),
        ContentLength::Omitted => String::new(),
    };
    let head = format!(
        "HTTP/1.1 {} {}\r\n{}Content-Type: application/octet-stream\r\nConnection: close\r\n\r\n",
        opts.status,
        reason(opts.status),
        length_header
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
    let _ = stream.flush();
}

/// Reads until the blank line ending the request head.
fn read_request_head(stream: &mut TcpStream) -> bool {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return false,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }
    true
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        204 => "No Content",
        206 => "Partial Content",
        300 => "Multiple Choices",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
