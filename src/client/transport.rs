//! HTTP transport for the remote browser service
//!
//! A thin dispatch layer over `reqwest`: builds URLs against the configured
//! base address, injects the authentication token into every request, and
//! normalizes transport, timeout, and HTTP-status failures into [`Error`].

use crate::config::ClientConfig;
use crate::{Error, Result};
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Merge caller-supplied query parameters with the service token.
///
/// Existing pairs are preserved; a caller-supplied `token` pair is replaced
/// by the configured one, so the token is present exactly once.
pub fn merge_query_params(
    params: Vec<(String, String)>,
    token: &str,
) -> Vec<(String, String)> {
    let mut merged: Vec<(String, String)> = params
        .into_iter()
        .filter(|(key, _)| key != "token")
        .collect();
    merged.push(("token".to_string(), token.to_string()));
    merged
}

/// HTTP transport bound to a base address
///
/// Cheap to clone; the underlying `reqwest::Client` is reference-counted and
/// safe for concurrent use, so concurrent operations share its pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    token: String,
    http: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport from the client configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url(),
            token: config.token.clone(),
            http,
        })
    }

    /// Base address requests are dispatched against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST a JSON payload, expect a structured body back
    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Value> {
        let request = self.request(Method::POST, path).json(body);
        let response = self.dispatch(path, request).await?;
        Self::read_body(response).await
    }

    /// POST a JSON payload, expect a raw byte buffer back
    pub async fn post_binary<B: Serialize>(&self, path: &str, body: &B) -> Result<Bytes> {
        let request = self.request(Method::POST, path).json(body);
        let response = self.dispatch(path, request).await?;
        Ok(response.bytes().await?)
    }

    /// POST JavaScript source, expect a structured body back
    ///
    /// Used by the function and download operations, whose payload is code
    /// to run in-browser rather than a JSON document.
    pub async fn post_script(&self, path: &str, code: &str) -> Result<Value> {
        let request = self
            .request(Method::POST, path)
            .header(CONTENT_TYPE, "application/javascript")
            .body(code.to_string());
        let response = self.dispatch(path, request).await?;
        Self::read_body(response).await
    }

    /// GET a fixed path with no body, expect a structured body back
    pub async fn get_json(&self, path: &str) -> Result<Value> {
        let request = self.request(Method::GET, path);
        let response = self.dispatch(path, request).await?;
        Self::read_body(response).await
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let params = merge_query_params(Vec::new(), &self.token);
        self.http
            .request(method, format!("{}{}", self.base_url, path))
            .query(&params)
    }

    /// Send the request and classify failures.
    async fn dispatch(
        &self,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response> {
        debug!("Dispatching request to {}", path);

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let fallback = status
            .canonical_reason()
            .unwrap_or("HTTP error")
            .to_string();
        let message = match response.text().await {
            Ok(body) => Self::extract_error_message(&body).unwrap_or(fallback),
            Err(_) => fallback,
        };

        debug!("Request to {} failed with status {}: {}", path, status, message);
        Err(Error::http(status.as_u16(), message))
    }

    /// Pull a human-readable message out of a JSON error body.
    fn extract_error_message(body: &str) -> Option<String> {
        let value: Value = serde_json::from_str(body).ok()?;
        value
            .get("message")
            .or_else(|| value.get("error"))
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    /// Read a response body as JSON, passing non-JSON bodies through as text.
    async fn read_body(response: reqwest::Response) -> Result<Value> {
        let text = response.text().await?;
        if text.is_empty() {
            return Ok(Value::Null);
        }
        match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            Err(_) => Ok(Value::String(text)),
        }
    }
}
