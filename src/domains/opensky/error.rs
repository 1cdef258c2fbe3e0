//! Upstream error types.
//!
//! Every failure of an OpenSky request collapses into one [`UpstreamError`].
//! Its `Display` output is the exact message shown to MCP clients.

use thiserror::Error;

/// Result of a single upstream call: the parsed JSON payload or a
/// classified failure.
pub type UpstreamResult = std::result::Result<serde_json::Value, UpstreamError>;

/// Errors that can occur while talking to the OpenSky API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    /// The request exceeded the total request timeout.
    #[error("Request timeout - OpenSky API took too long to respond")]
    Timeout,

    /// Transport-level failure (DNS, connect, TLS, connection reset).
    #[error("Network error: {0}")]
    Network(String),

    /// The API answered with a non-200 status.
    #[error("HTTP {status}: {reason}")]
    Http { status: u16, reason: String },

    /// The API answered 200 but the body was not valid JSON.
    #[error("Unexpected error: invalid JSON response: {0}")]
    Parse(String),

    /// Anything else.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl UpstreamError {
    /// Create a new network error.
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a new HTTP status error.
    pub fn http(status: u16, reason: impl Into<String>) -> Self {
        Self::Http {
            status,
            reason: reason.into(),
        }
    }

    /// Create a new parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a new unexpected error.
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::Unexpected(msg.into())
    }
}
