//! Common test utilities
//!
//! Shared helpers for the integration tests: configuration builders pointed
//! at ephemeral mock servers.

use browserless_client::ClientConfig;

/// Build a client configuration pointing at a mock server URL
/// (e.g. `http://127.0.0.1:37841`).
pub fn config_for(server_url: &str, token: &str) -> ClientConfig {
    let authority = server_url
        .strip_prefix("http://")
        .expect("mock server URL is http");
    let (host, port) = authority
        .split_once(':')
        .expect("mock server URL has a port");

    ClientConfig {
        protocol: "http".to_string(),
        host: host.to_string(),
        port: port.parse().expect("valid mock server port"),
        token: token.to_string(),
        timeout: 5000,
    }
}
