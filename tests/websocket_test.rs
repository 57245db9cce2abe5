//! WebSocket reachability probe tests
//!
//! Runs the probe against a mock WebSocket server (no real browser service
//! required), covering the success path, connection refusal, and the
//! handshake timeout guard.

mod common;

use common::config_for;

use browserless_client::client::{Browser, Library, WebSocketOptions};
use browserless_client::{BrowserClient, ClientConfig};
use futures_util::StreamExt;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio_tungstenite::accept_async;

/// Start a one-shot mock WebSocket server.
///
/// Accepts a single handshake, drains frames until the client's close frame,
/// then reports through the returned receiver whether a close was observed.
async fn start_mock_ws_server() -> (std::net::SocketAddr, tokio::sync::oneshot::Receiver<bool>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let (tx, rx) = tokio::sync::oneshot::channel();

    tokio::spawn(async move {
        let mut saw_close = false;
        if let Ok((stream, _)) = listener.accept().await {
            if let Ok(mut ws) = accept_async(stream).await {
                while let Some(Ok(msg)) = ws.next().await {
                    if msg.is_close() {
                        saw_close = true;
                        break;
                    }
                }
            }
        }
        let _ = tx.send(saw_close);
    });

    (addr, rx)
}

#[tokio::test]
async fn test_probe_success_returns_endpoint_and_session() {
    let (addr, close_rx) = start_mock_ws_server().await;

    let config = config_for(&format!("http://{}", addr), "T");
    let client = BrowserClient::new(config).expect("client builds");

    let response = client
        .create_websocket_connection(WebSocketOptions::default())
        .await;

    assert!(response.success);
    assert!(response.error.is_none());
    assert!(response.status_code.is_none());

    let connection = response.data.expect("connection details");
    assert_eq!(
        connection.browser_ws_endpoint,
        format!("ws://127.0.0.1:{}?token=T", addr.port())
    );

    let digits = connection
        .session_id
        .strip_prefix("session-")
        .expect("session id prefix");
    assert!(!digits.is_empty());
    assert!(digits.chars().all(|c| c.is_ascii_digit()));

    // The probe must not hold the socket open
    let saw_close = tokio::time::timeout(Duration::from_secs(2), close_rx)
        .await
        .expect("server reports in time")
        .expect("server task alive");
    assert!(saw_close);
}

#[tokio::test]
async fn test_probe_playwright_endpoint_path() {
    let (addr, _close_rx) = start_mock_ws_server().await;

    let config = config_for(&format!("http://{}", addr), "T");
    let client = BrowserClient::new(config).expect("client builds");

    let response = client
        .create_websocket_connection(WebSocketOptions {
            browser: Browser::Firefox,
            library: Library::Playwright,
        })
        .await;

    assert!(response.success);
    let connection = response.data.expect("connection details");
    assert_eq!(
        connection.browser_ws_endpoint,
        format!("ws://127.0.0.1:{}/firefox/playwright?token=T", addr.port())
    );
}

#[tokio::test]
async fn test_probe_connection_refused() {
    // Grab a port nothing is listening on
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("local addr").port()
    };

    let config = ClientConfig {
        protocol: "http".to_string(),
        host: "127.0.0.1".to_string(),
        port,
        token: "T".to_string(),
        timeout: 2000,
    };
    let client = BrowserClient::new(config).expect("client builds");

    let response = client
        .create_websocket_connection(WebSocketOptions::default())
        .await;

    assert!(!response.success);
    assert!(response.data.is_none());
    assert!(response.status_code.is_none());
    let error = response.error.expect("failure message");
    assert!(error.contains("WebSocket"), "unexpected error: {}", error);
}

#[tokio::test]
async fn test_probe_times_out_on_silent_peer() {
    // Accepts the TCP connection but never answers the handshake
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        if let Ok((stream, _)) = listener.accept().await {
            tokio::time::sleep(Duration::from_secs(30)).await;
            drop(stream);
        }
    });

    let config = ClientConfig {
        protocol: "http".to_string(),
        host: "127.0.0.1".to_string(),
        port: addr.port(),
        token: "T".to_string(),
        timeout: 500,
    };
    let client = BrowserClient::new(config).expect("client builds");

    let started = std::time::Instant::now();
    let response = client
        .create_websocket_connection(WebSocketOptions::default())
        .await;

    assert!(!response.success);
    assert!(response.status_code.is_none());
    let error = response.error.expect("failure message");
    assert!(error.contains("timeout"), "unexpected error: {}", error);
    // The guard, not the peer, must have ended the wait
    assert!(started.elapsed() < Duration::from_secs(10));
}
