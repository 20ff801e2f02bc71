#![cfg(test)]
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Minimal REST endpoint double: answers every request with a canned
/// response and records the raw request bytes for wire-level assertions.
pub struct StubApiServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubApiServer {
    pub async fn start(
        status: u16,
        body: &'static str,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let requests = Arc::new(Mutex::new(Vec::new()));

        let captured = requests.clone();
        tokio::spawn(async move {
            loop {
                match listener.accept().await {
                    Ok((socket, _addr)) => {
                        let captured = captured.clone();
                        tokio::spawn(Self::handle_connection(socket, captured, status, body));
                    }
                    Err(_) => break,
                }
            }
        });

        Ok(Self { addr, requests })
    }

    /// Accepts connections but never writes a byte, for timeout tests.
    pub async fn start_silent() -> Result<Self, Box<dyn std::error::Error>> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            loop {
                match listener.accept().await {
                    Ok((socket, _addr)) => {
                        tokio::spawn(async move {
                            tokio::time::sleep(Duration::from_secs(60)).await;
                            drop(socket);
                        });
                    }
                    Err(_) => break,
                }
            }
        });

        Ok(Self {
            addr,
            requests: Arc::new(Mutex::new(Vec::new())),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    async fn handle_connection(
        mut socket: TcpStream,
        captured: Arc<Mutex<Vec<String>>>,
        status: u16,
        body: &'static str,
    ) {
        let mut data = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            match tokio::time::timeout(Duration::from_millis(500), socket.read(&mut chunk)).await {
                Ok(Ok(0)) => break,
                Ok(Ok(n)) => {
                    data.extend_from_slice(&chunk[..n]);
                    if request_complete(&data) {
                        break;
                    }
                }
                Ok(Err(_)) => break,
                Err(_) => break,
            }
        }

        captured
            .lock()
            .unwrap()
            .push(String::from_utf8_lossy(&data).into_owned());

        let response = format!(
            "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        let _ = socket.write_all(response.as_bytes()).await;
    }
}

fn request_complete(data: &[u8]) -> bool {
    let text = String::from_utf8_lossy(data);
    if let Some(head_end) = text.find("\r\n\r\n") {
        let content_length = text
            .lines()
            .find_map(|line| {
                line.to_lowercase()
                    .strip_prefix("content-length:")
                    .map(|v| v.trim().parse::<usize>().unwrap_or(0))
            })
            .unwrap_or(0);
        return data.len() >= head_end + 4 + content_length;
    }
    false
}
