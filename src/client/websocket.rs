//! WebSocket endpoint negotiation and reachability probing
//!
//! The service exposes browser upgrade endpoints at the root (puppeteer) and
//! at `/<browser>/playwright` (playwright). The probe opens a handshake to
//! the derived URL, closes the socket immediately, and reports the endpoint
//! back to the caller; no connection is retained.

use crate::config::ClientConfig;
use crate::{Error, Result};
use chrono::Utc;
use tokio_tungstenite::connect_async;
use tracing::{debug, info};

use super::types::{Library, WebSocketConnection, WebSocketOptions};

/// Compute the upgrade endpoint URL for the requested library and browser.
///
/// The token is percent-encoded into the query string.
pub fn endpoint_url(config: &ClientConfig, options: &WebSocketOptions) -> String {
    let token = urlencoding::encode(&config.token);
    match options.library {
        Library::Puppeteer => format!("ws://{}?token={}", config.authority(), token),
        Library::Playwright => format!(
            "ws://{}/{}/playwright?token={}",
            config.authority(),
            options.browser.as_str(),
            token
        ),
    }
}

/// Probe the endpoint for reachability.
///
/// Opens a handshake bounded by the configured timeout; the raw connect has
/// no bound of its own, so an unresponsive peer would otherwise hang the
/// call. The socket is closed on the success path before returning, and a
/// failed handshake never yields one, so no socket outlives the probe.
pub async fn probe(
    config: &ClientConfig,
    options: &WebSocketOptions,
) -> Result<WebSocketConnection> {
    let url = endpoint_url(config, options);
    debug!(
        "Probing WebSocket endpoint for {}/{:?}",
        options.browser.as_str(),
        options.library
    );

    match tokio::time::timeout(config.timeout(), connect_async(url.as_str())).await {
        Ok(Ok((mut stream, _response))) => {
            if let Err(e) = stream.close(None).await {
                debug!("Error closing probe socket: {}", e);
            }
            let session_id = format!("session-{}", Utc::now().timestamp_millis());
            info!("WebSocket endpoint reachable, session {}", session_id);
            Ok(WebSocketConnection {
                browser_ws_endpoint: url,
                session_id,
            })
        }
        Ok(Err(e)) => Err(Error::websocket(format!("Failed to connect: {}", e))),
        Err(_) => Err(Error::timeout(format!(
            "WebSocket handshake did not complete within {}ms",
            config.timeout
        ))),
    }
}
