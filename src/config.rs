//! Configuration management for the browserless client

use crate::{Error, Result};
use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Client configuration
///
/// Supplied once at construction and immutable for the client's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// Scheme used for REST calls ("http" or "https")
    pub protocol: String,

    /// Remote service host
    pub host: String,

    /// Remote service port
    pub port: u16,

    /// Authentication token, injected as a query parameter on every request
    pub token: String,

    /// Per-request timeout in milliseconds
    pub timeout: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            protocol: "http".to_string(),
            host: "localhost".to_string(),
            port: 3000,
            token: String::new(),
            timeout: 30000,
        }
    }
}

impl ClientConfig {
    /// Base address for REST calls, `protocol://host:port`
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.protocol, self.host, self.port)
    }

    /// `host:port` pair, used when deriving WebSocket URLs
    pub fn authority(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Request timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = ClientConfig::default();

        if let Ok(protocol) = env::var("BROWSERLESS_PROTOCOL") {
            config.protocol = protocol;
        }

        if let Ok(host) = env::var("BROWSERLESS_HOST") {
            config.host = host;
        }

        if let Ok(port) = env::var("BROWSERLESS_PORT") {
            config.port = port
                .parse()
                .map_err(|_| Error::configuration("Invalid BROWSERLESS_PORT"))?;
        }

        if let Ok(token) = env::var("BROWSERLESS_TOKEN") {
            config.token = token;
        }

        if let Ok(timeout) = env::var("BROWSERLESS_TIMEOUT") {
            config.timeout = timeout
                .parse()
                .map_err(|_| Error::configuration("Invalid BROWSERLESS_TIMEOUT"))?;
        }

        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::configuration(format!("Failed to read config file: {}", e)))?;

        let config: ClientConfig = toml::from_str(&content)
            .map_err(|e| Error::configuration(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url() {
        let config = ClientConfig {
            protocol: "http".to_string(),
            host: "localhost".to_string(),
            port: 3000,
            token: "T".to_string(),
            timeout: 30000,
        };
        assert_eq!(config.base_url(), "http://localhost:3000");
        assert_eq!(config.authority(), "localhost:3000");
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.protocol, "http");
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 3000);
        assert_eq!(config.token, "");
        assert_eq!(config.timeout, 30000);
        assert_eq!(config.timeout(), Duration::from_millis(30000));
    }

    #[test]
    fn test_from_file_toml() {
        let dir = std::env::temp_dir().join("browserless-client-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("client.toml");
        std::fs::write(
            &path,
            r#"
protocol = "https"
host = "browser.internal"
port = 443
token = "secret"
timeout = 10000
"#,
        )
        .unwrap();

        let config = ClientConfig::from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(config.protocol, "https");
        assert_eq!(config.host, "browser.internal");
        assert_eq!(config.port, 443);
        assert_eq!(config.token, "secret");
        assert_eq!(config.timeout, 10000);
    }

    #[test]
    fn test_from_env_overrides_and_validation() {
        // Single test so the process-global env mutations cannot race.
        env::remove_var("BROWSERLESS_PROTOCOL");
        env::remove_var("BROWSERLESS_HOST");
        env::remove_var("BROWSERLESS_PORT");
        env::remove_var("BROWSERLESS_TOKEN");
        env::remove_var("BROWSERLESS_TIMEOUT");

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config, ClientConfig::default());

        env::set_var("BROWSERLESS_HOST", "remote.example");
        env::set_var("BROWSERLESS_PORT", "8080");
        env::set_var("BROWSERLESS_TOKEN", "tok");
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.host, "remote.example");
        assert_eq!(config.port, 8080);
        assert_eq!(config.token, "tok");

        env::set_var("BROWSERLESS_PORT", "not-a-number");
        assert!(ClientConfig::from_env().is_err());

        env::remove_var("BROWSERLESS_HOST");
        env::remove_var("BROWSERLESS_PORT");
        env::remove_var("BROWSERLESS_TOKEN");
    }
}
