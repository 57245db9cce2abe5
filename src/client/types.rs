//! Request and response types for the remote browser service API
//!
//! Request payloads are forwarded to the service verbatim; validation of
//! their contents is the service's responsibility, not the client's.

use bytes::Bytes;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uniform response envelope returned by every client operation
///
/// Invariant: `success == true` implies `data` is present and `error` is
/// absent; `success == false` implies `error` is present and `data` is
/// absent. The constructors are the only way to build one, so the invariant
/// holds by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded
    pub success: bool,
    /// Operation result, present on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Failure description, present on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// HTTP status code, present when the failure came from a service response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl<T> ApiResponse<T> {
    /// Build a success envelope
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            status_code: None,
        }
    }

    /// Build a failure envelope with no HTTP status
    pub fn failure<S: Into<String>>(error: S) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            status_code: None,
        }
    }

    /// Build a failure envelope carrying the service's HTTP status
    pub fn failure_with_status<S: Into<String>>(error: S, status: u16) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            status_code: Some(status),
        }
    }
}

/// Fold an internal error into a failure envelope. `statusCode` is set only
/// for failures that came from an HTTP response.
impl<T> From<crate::Error> for ApiResponse<T> {
    fn from(err: crate::Error) -> Self {
        match err.status_code() {
            Some(status) => Self::failure_with_status(err.to_string(), status),
            None => Self::failure(err.to_string()),
        }
    }
}

/// Request for the `/pdf` endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfRequest {
    /// Page to render
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Raw HTML to render instead of a URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Renderer options, forwarded as-is
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

/// Request for the `/screenshot` endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenshotRequest {
    /// Page to capture
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Raw HTML to capture instead of a URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Capture options (`type`, `quality`, `fullPage`, ...), forwarded as-is
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

/// Request for the `/content` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRequest {
    /// Page to extract rendered HTML from
    pub url: String,
    /// Additional top-level fields (`gotoOptions`, `waitForTimeout`, ...),
    /// forwarded as-is
    #[serde(flatten)]
    pub extra: Option<Value>,
}

/// Request for the `/function` endpoint
///
/// The payload is JavaScript source to run inside the browser, posted with
/// an `application/javascript` content type rather than JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionRequest {
    /// Function source code
    pub code: String,
}

/// Request for the `/download` endpoint
///
/// Like [`FunctionRequest`], the payload is JavaScript source; the script is
/// expected to trigger file downloads the service then returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadRequest {
    /// Download script source code
    pub code: String,
}

/// Request for the `/export` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    /// Page to export
    pub url: String,
    /// Additional top-level fields, forwarded as-is
    #[serde(flatten)]
    pub extra: Option<Value>,
}

/// Request for the `/performance` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRequest {
    /// Page to audit
    pub url: String,
    /// Audit configuration, forwarded as-is
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
}

/// Request for the `/unblock` endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnblockRequest {
    /// Page to unblock
    pub url: String,
    /// Return a reconnectable browser endpoint
    #[serde(rename = "browserWSEndpoint", skip_serializing_if = "Option::is_none")]
    pub browser_ws_endpoint: Option<bool>,
    /// Return the cookies collected while unblocking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookies: Option<bool>,
    /// Return the page content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<bool>,
    /// Return a screenshot of the unblocked page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<bool>,
    /// How long the service keeps the session alive, in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u64>,
}

/// Request for the `/chromium/bql` endpoint (GraphQL-style browser queries)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BqlRequest {
    /// Query document
    pub query: String,
    /// Query variables
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
    /// Operation to execute when the document defines several
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

/// Browser engine exposed by the service's WebSocket endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    /// Chromium (the service default)
    #[default]
    Chromium,
    /// Firefox
    Firefox,
    /// WebKit
    Webkit,
}

impl Browser {
    /// Path segment used in WebSocket URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            Browser::Chromium => "chromium",
            Browser::Firefox => "firefox",
            Browser::Webkit => "webkit",
        }
    }
}

/// Automation library the caller intends to connect with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Library {
    /// Puppeteer connects at the service root
    #[default]
    Puppeteer,
    /// Playwright connects at `/<browser>/playwright`
    Playwright,
}

/// Options for WebSocket endpoint negotiation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebSocketOptions {
    /// Browser engine to connect to
    #[serde(default)]
    pub browser: Browser,
    /// Automation library the endpoint is derived for
    #[serde(default)]
    pub library: Library,
}

/// Result of a successful WebSocket reachability probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSocketConnection {
    /// Endpoint URL the caller can hand to its automation library
    #[serde(rename = "browserWSEndpoint")]
    pub browser_ws_endpoint: String,
    /// Freshly generated identifier, `session-<unix-millis>`
    pub session_id: String,
}

/// Binary response body plus a generated filename
///
/// The success payload of the PDF and screenshot operations.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryArtifact {
    /// Raw response bytes
    pub data: Bytes,
    /// Generated name, `<kind>-<unix-millis>.<ext>`
    pub filename: String,
}

impl BinaryArtifact {
    /// Wrap raw bytes with a timestamped filename
    pub fn new(kind: &str, extension: &str, data: Bytes) -> Self {
        let filename = format!("{}-{}.{}", kind, Utc::now().timestamp_millis(), extension);
        Self { data, filename }
    }
}

/// Output format declared in an opaque options bag (`options.type`)
pub(crate) fn declared_type(options: Option<&Value>) -> Option<&str> {
    options.and_then(|o| o.get("type")).and_then(Value::as_str)
}
