//! Remote browser service client
//!
//! One public method per service operation. Every method returns an
//! [`ApiResponse`] envelope; internal errors are folded into the envelope
//! and never propagate to the caller.

use serde_json::Value;
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::Result;

use super::transport::HttpTransport;
use super::types::{
    declared_type, ApiResponse, BinaryArtifact, BqlRequest, ContentRequest, DownloadRequest,
    ExportRequest, FunctionRequest, PdfRequest, PerformanceRequest, ScreenshotRequest,
    UnblockRequest, WebSocketConnection, WebSocketOptions,
};
use super::websocket;

/// Fold an operation result into the response envelope.
fn envelope<T>(result: Result<T>) -> ApiResponse<T> {
    match result {
        Ok(data) => ApiResponse::success(data),
        Err(e) => e.into(),
    }
}

/// Client for a Browserless-compatible remote browser service
///
/// Holds the immutable configuration and a shared transport handle; every
/// call is independent, so a clone of the client can be used concurrently
/// from any number of tasks.
#[derive(Debug, Clone)]
pub struct BrowserClient {
    config: ClientConfig,
    transport: HttpTransport,
}

impl BrowserClient {
    /// Create a new client from the given configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        info!("Creating browser service client for {}", transport.base_url());
        Ok(Self { config, transport })
    }

    /// Base address the client dispatches against
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// A copy of the configuration supplied at construction
    ///
    /// Mutating the returned value has no effect on the client.
    pub fn current_config(&self) -> ClientConfig {
        self.config.clone()
    }

    /// Render a page (or raw HTML) to PDF
    pub async fn generate_pdf(&self, request: PdfRequest) -> ApiResponse<BinaryArtifact> {
        debug!("Generating PDF");
        let extension = declared_type(request.options.as_ref())
            .unwrap_or("pdf")
            .to_string();
        envelope(
            self.transport
                .post_binary("/pdf", &request)
                .await
                .map(|data| BinaryArtifact::new("document", &extension, data)),
        )
    }

    /// Capture a screenshot of a page (or raw HTML)
    pub async fn capture_screenshot(
        &self,
        request: ScreenshotRequest,
    ) -> ApiResponse<BinaryArtifact> {
        debug!("Capturing screenshot");
        let extension = declared_type(request.options.as_ref())
            .unwrap_or("png")
            .to_string();
        envelope(
            self.transport
                .post_binary("/screenshot", &request)
                .await
                .map(|data| BinaryArtifact::new("screenshot", &extension, data)),
        )
    }

    /// Extract the fully rendered HTML of a page
    pub async fn get_content(&self, request: ContentRequest) -> ApiResponse<Value> {
        debug!("Fetching rendered content for {}", request.url);
        envelope(self.transport.post_json("/content", &request).await)
    }

    /// Run a JavaScript function inside the browser
    pub async fn execute_function(&self, request: FunctionRequest) -> ApiResponse<Value> {
        debug!("Executing browser function ({} bytes)", request.code.len());
        envelope(self.transport.post_script("/function", &request.code).await)
    }

    /// Run a download script and collect the files it produces
    pub async fn download_files(&self, request: DownloadRequest) -> ApiResponse<Value> {
        debug!("Running download script ({} bytes)", request.code.len());
        envelope(self.transport.post_script("/download", &request.code).await)
    }

    /// Export a page and its resources
    pub async fn export_page(&self, request: ExportRequest) -> ApiResponse<Value> {
        debug!("Exporting page {}", request.url);
        envelope(self.transport.post_json("/export", &request).await)
    }

    /// Run a performance audit against a page
    pub async fn run_performance_audit(
        &self,
        request: PerformanceRequest,
    ) -> ApiResponse<Value> {
        debug!("Running performance audit for {}", request.url);
        envelope(self.transport.post_json("/performance", &request).await)
    }

    /// Fetch a page through the service's anti-bot bypass
    pub async fn unblock_url(&self, request: UnblockRequest) -> ApiResponse<Value> {
        debug!("Unblocking {}", request.url);
        envelope(self.transport.post_json("/unblock", &request).await)
    }

    /// Execute a GraphQL-style browser query
    pub async fn query_browser(&self, request: BqlRequest) -> ApiResponse<Value> {
        debug!("Executing browser query");
        envelope(self.transport.post_json("/chromium/bql", &request).await)
    }

    /// Verify a WebSocket upgrade endpoint is reachable
    ///
    /// Returns the endpoint URL for the requested library plus a fresh
    /// session identifier; the probe socket itself is closed before
    /// returning.
    pub async fn create_websocket_connection(
        &self,
        options: WebSocketOptions,
    ) -> ApiResponse<WebSocketConnection> {
        envelope(websocket::probe(&self.config, &options).await)
    }

    /// Service health check
    pub async fn check_health(&self) -> ApiResponse<Value> {
        envelope(self.transport.get_json("/health").await)
    }

    /// List the service's active browser sessions
    ///
    /// The client neither creates nor tracks sessions; the list is relayed
    /// as the service reports it.
    pub async fn list_sessions(&self) -> ApiResponse<Value> {
        envelope(self.transport.get_json("/sessions").await)
    }

    /// Fetch the service's own configuration
    pub async fn get_service_config(&self) -> ApiResponse<Value> {
        envelope(self.transport.get_json("/config").await)
    }

    /// Fetch service metrics
    pub async fn get_metrics(&self) -> ApiResponse<Value> {
        envelope(self.transport.get_json("/metrics").await)
    }
}
