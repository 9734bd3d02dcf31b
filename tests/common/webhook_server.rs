//! Minimal recording webhook endpoint for tests
//!
//! Accepts raw HTTP/1.1 POSTs on a local port, records every request body,
//! and answers each with a canned status line and body.

use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

pub struct RecordingServer {
    pub url: String,
    bodies: Arc<Mutex<Vec<String>>>,
}

impl RecordingServer {
    /// Start a server answering every request with `status_line` (e.g.
    /// `"200 OK"`) and `body`.
    pub async fn start(status_line: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to get local addr");

        let bodies: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let recorded = bodies.clone();
        let status_line = status_line.to_string();
        let body = body.to_string();

        tokio::spawn(async move {
            loop {
                let Ok((socket, _)) = listener.accept().await else {
                    break;
                };
                let recorded = recorded.clone();
                let status_line = status_line.clone();
                let body = body.clone();
                tokio::spawn(async move {
                    handle_connection(socket, recorded, &status_line, &body).await;
                });
            }
        });

        Self {
            url: format!("http://{}", addr),
            bodies,
        }
    }

    pub fn request_count(&self) -> usize {
        self.bodies.lock().unwrap().len()
    }

    pub fn last_body(&self) -> Option<String> {
        self.bodies.lock().unwrap().last().cloned()
    }
}

async fn handle_connection(
    mut socket: TcpStream,
    recorded: Arc<Mutex<Vec<String>>>,
    status_line: &str,
    body: &str,
) {
    let mut buf: Vec<u8> = Vec::new();
    let mut chunk = [0u8; 1024];

    // Read headers
    let (headers_end, content_length) = loop {
        let n = match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => n,
        };
        buf.extend_from_slice(&chunk[..n]);

        if let Some(pos) = find_subsequence(&buf, b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..pos]).to_string();
            break (pos + 4, content_length(&head));
        }
    };

    // Read the request body
    while buf.len() < headers_end + content_length {
        let n = match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => n,
        };
        buf.extend_from_slice(&chunk[..n]);
    }

    let body_end = std::cmp::min(buf.len(), headers_end + content_length);
    let request_body = String::from_utf8_lossy(&buf[headers_end..body_end]).to_string();
    recorded.lock().unwrap().push(request_body);

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}

fn content_length(head: &str) -> usize {
    head.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}

fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
