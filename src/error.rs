//! Unified error types for the browserless client

use thiserror::Error;

/// Unified Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the browserless client
///
/// Errors never cross the public client boundary directly; they are folded
/// into the [`ApiResponse`](crate::client::ApiResponse) envelope.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport errors (the request never produced an HTTP response)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Timeout
    #[error("Operation timeout: {0}")]
    Timeout(String),

    /// Remote service responded with a non-success HTTP status
    #[error("{message}")]
    Http {
        /// HTTP status code of the response
        status: u16,
        /// Message extracted from the response body, or the status text
        message: String,
    },

    /// WebSocket errors
    #[error("WebSocket error: {0}")]
    WebSocket(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Create a new transport error
    pub fn transport<S: Into<String>>(msg: S) -> Self {
        Error::Transport(msg.into())
    }

    /// Create a new timeout error
    pub fn timeout<S: Into<String>>(msg: S) -> Self {
        Error::Timeout(msg.into())
    }

    /// Create a new HTTP status error
    pub fn http<S: Into<String>>(status: u16, msg: S) -> Self {
        Error::Http {
            status,
            message: msg.into(),
        }
    }

    /// Create a new WebSocket error
    pub fn websocket<S: Into<String>>(msg: S) -> Self {
        Error::WebSocket(msg.into())
    }

    /// Create a new configuration error
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Error::Configuration(msg.into())
    }

    /// HTTP status code, when the failure came from a service response
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Classify reqwest failures: an elapsed deadline is a timeout, anything
/// else that never produced a response is a transport error.
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout(err.to_string())
        } else {
            Error::Transport(err.to_string())
        }
    }
}
