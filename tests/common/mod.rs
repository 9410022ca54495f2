//! Shared utilities for integration tests.

use std::collections::VecDeque;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use alloy::primitives::{Address, B256};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::time::Instant;

use wallet_scanner::blockchain::wallet::generate;
use wallet_scanner::blockchain::{BalanceChecker, BalanceQueryResult, KeyPair, KeySource};
use wallet_scanner::config::ScanConfig;

/// Request lines (`GET /api?... HTTP/1.1`) seen by a mock backend.
pub type SeenRequests = Arc<Mutex<Vec<String>>>;

/// Start a programmable mock explorer on an ephemeral port.
///
/// `f` receives the request line and returns `(status, body)`.
#[allow(dead_code)]
pub async fn start_programmable_backend<F, Fut>(f: F) -> (SocketAddr, SeenRequests)
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let seen: SeenRequests = Arc::new(Mutex::new(Vec::new()));
    let f = Arc::new(f);

    let seen_task = seen.clone();
    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    let seen = seen_task.clone();
                    tokio::spawn(async move {
                        let mut buf = Vec::new();
                        let mut chunk = [0u8; 1024];
                        while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                            match socket.read(&mut chunk).await {
                                Ok(0) | Err(_) => return,
                                Ok(n) => buf.extend_from_slice(&chunk[..n]),
                            }
                        }
                        let head = String::from_utf8_lossy(&buf);
                        let request_line = head.lines().next().unwrap_or_default().to_string();
                        seen.lock().unwrap().push(request_line.clone());

                        let (status, body) = f(request_line).await;
                        let status_text = match status {
                            200 => "200 OK",
                            429 => "429 Too Many Requests",
                            500 => "500 Internal Server Error",
                            502 => "502 Bad Gateway",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, seen)
}

/// Start a mock explorer that always answers with the same body.
#[allow(dead_code)]
pub async fn start_mock_backend(status: u16, body: &'static str) -> (SocketAddr, SeenRequests) {
    start_programmable_backend(move |_| async move { (status, body.to_string()) }).await
}

/// A mock explorer whose replies arrive after `delay`.
#[allow(dead_code)]
pub async fn start_slow_backend(delay: Duration) -> (SocketAddr, SeenRequests) {
    start_programmable_backend(move |_| async move {
        tokio::time::sleep(delay).await;
        (200, r#"{"status":"1","message":"OK","result":"0"}"#.to_string())
    })
    .await
}

/// Balance checker that replays a script, then a fallback, and records calls.
#[derive(Clone)]
#[allow(dead_code)]
pub struct ScriptedChecker {
    script: Arc<Mutex<VecDeque<BalanceQueryResult>>>,
    fallback: BalanceQueryResult,
    calls: Arc<Mutex<Vec<(Address, Instant)>>>,
}

#[allow(dead_code)]
impl ScriptedChecker {
    pub fn new(script: Vec<BalanceQueryResult>, fallback: BalanceQueryResult) -> Self {
        Self {
            script: Arc::new(Mutex::new(script.into())),
            fallback,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<(Address, Instant)> {
        self.calls.lock().unwrap().clone()
    }
}

impl BalanceChecker for ScriptedChecker {
    async fn check_balance(&self, address: Address) -> BalanceQueryResult {
        self.calls.lock().unwrap().push((address, Instant::now()));
        let next = self.script.lock().unwrap().pop_front();
        next.unwrap_or_else(|| self.fallback.clone())
    }
}

/// Key source that hands out the given keys first, then random ones.
#[allow(dead_code)]
pub struct FixedKeys(pub VecDeque<KeyPair>);

impl KeySource for FixedKeys {
    fn next_key(&mut self) -> KeyPair {
        self.0.pop_front().unwrap_or_else(generate)
    }
}

/// Deterministic key pair from a small seed.
#[allow(dead_code)]
pub fn key_pair(seed: u8) -> KeyPair {
    let mut bytes = [0u8; 32];
    bytes[31] = seed;
    KeyPair::from_private_key(B256::from(bytes)).unwrap()
}

/// Scan config writing to `output`.
#[allow(dead_code)]
pub fn scan_config(output: &std::path::Path, delay_ms: u64, limit: u64) -> ScanConfig {
    ScanConfig {
        output_file: output.to_string_lossy().into_owned(),
        request_delay_ms: delay_ms,
        daily_call_limit: limit,
        max_consecutive_transient: None,
    }
}
