//! Browserless-Client: Rust client adapter for remote browser services
//!
//! This library exposes a Browserless-compatible browser automation
//! service's REST and WebSocket endpoints (PDF, screenshots, content
//! extraction, scripted functions, downloads, exports, performance audits,
//! anti-bot bypass, browser queries, introspection) behind a uniform
//! request/response envelope.

pub mod client;
pub mod config;
pub mod error;

// Re-exports
pub use client::{ApiResponse, BrowserClient};
pub use config::ClientConfig;
pub use error::{Error, Result};

/// Browserless-Client library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
