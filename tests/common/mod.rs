//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::future::Future;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// A site configuration document as the remote endpoint would serve it.
pub const REMOTE_CONFIG: &str = r##"{
    "meta": {
        "title": "Dr. Ayşe Yılmaz Kliniği",
        "description": "Ankara'da dermatoloji kliniği",
        "keywords": "dermatoloji, ankara"
    },
    "contact": {
        "address": "Çankaya, Ankara",
        "phone": "+90 312 111 22 33",
        "mobile": "+90 555 444 33 22",
        "email": "iletisim@klinik.test",
        "whatsapp": "+90 555 444 33 22"
    },
    "colors": {
        "primary": "#1d4ed8",
        "accent": "#db2777"
    }
}"##;

/// Start a mock configuration endpoint on an ephemeral port.
///
/// Each request is answered with the `(status, body)` produced by `f`.
/// Returns the bound address and a counter of requests served.
pub async fn start_config_backend<F, Fut>(f: F) -> (SocketAddr, Arc<AtomicUsize>)
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicUsize::new(0));
    let f = Arc::new(f);

    let counter = Arc::clone(&hits);
    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let f = f.clone();
                    let counter = Arc::clone(&counter);
                    tokio::spawn(async move {
                        counter.fetch_add(1, Ordering::SeqCst);
                        let (status, body) = f().await;
                        respond(socket, status, &body).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, hits)
}

/// Mock endpoint that always serves the same response.
pub async fn start_fixed_backend(status: u16, body: &'static str) -> (SocketAddr, Arc<AtomicUsize>) {
    start_config_backend(move || async move { (status, body.to_string()) }).await
}

async fn respond(mut socket: TcpStream, status: u16, body: &str) {
    // drain the request head before answering
    let mut buf = [0u8; 4096];
    let mut head = Vec::new();
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut buf).await {
            Ok(0) | Err(_) => return,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }

    let status_text = match status {
        200 => "200 OK",
        404 => "404 Not Found",
        500 => "500 Internal Server Error",
        502 => "502 Bad Gateway",
        503 => "503 Service Unavailable",
        _ => "200 OK",
    };
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_text,
        body.len(),
        body
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}
