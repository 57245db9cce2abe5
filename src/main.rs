//! Connectivity probe entry point
//!
//! Thin diagnostic binary around the client library: loads configuration
//! from the environment, calls the remote service's health endpoint, and
//! prints the response envelope as JSON. Exits non-zero when the service is
//! unreachable or unhealthy.
//!
//! ## Environment variables
//! - `BROWSERLESS_PROTOCOL`: service scheme (default: http)
//! - `BROWSERLESS_HOST`: service host (default: localhost)
//! - `BROWSERLESS_PORT`: service port (default: 3000)
//! - `BROWSERLESS_TOKEN`: authentication token
//! - `BROWSERLESS_TIMEOUT`: request timeout in milliseconds (default: 30000)

use anyhow::Context;
use browserless_client::{BrowserClient, ClientConfig};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing - respect RUST_LOG environment variable
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|v| v.parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    info!("Browserless-Client v{}", browserless_client::VERSION);

    let config = ClientConfig::from_env().context("loading configuration")?;
    info!("Configuration loaded: base_url={}", config.base_url());

    let client = BrowserClient::new(config).context("building client")?;
    let health = client.check_health().await;

    println!("{}", serde_json::to_string_pretty(&health)?);

    if !health.success {
        std::process::exit(1);
    }

    Ok(())
}
