//! Remote browser service client layer
//!
//! Translates typed local requests into HTTP and WebSocket calls against a
//! configured Browserless-compatible service and normalizes every outcome
//! into the [`ApiResponse`] envelope.
//!
//! ## Module structure
//! - `types`: request payloads, the response envelope, probe results
//! - `transport`: HTTP dispatch, token injection, failure normalization
//! - `rest`: the [`BrowserClient`] with one method per operation
//! - `websocket`: upgrade endpoint derivation and the reachability probe
//!
//! ## Usage example
//! ```rust,no_run
//! use browserless_client::{BrowserClient, ClientConfig};
//! use browserless_client::client::PdfRequest;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = BrowserClient::new(ClientConfig::default())?;
//!
//! let response = client
//!     .generate_pdf(PdfRequest {
//!         url: Some("https://example.com".to_string()),
//!         ..Default::default()
//!     })
//!     .await;
//! if let Some(artifact) = response.data {
//!     println!("{} ({} bytes)", artifact.filename, artifact.data.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod rest;
pub mod transport;
pub mod types;
pub mod websocket;


pub use rest::BrowserClient;
pub use transport::merge_query_params;
pub use types::{
    ApiResponse, BinaryArtifact, BqlRequest, Browser, ContentRequest, DownloadRequest,
    ExportRequest, FunctionRequest, Library, PdfRequest, PerformanceRequest, ScreenshotRequest,
    UnblockRequest, WebSocketConnection, WebSocketOptions,
};
pub use websocket::endpoint_url;
