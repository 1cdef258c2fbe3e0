//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type that can represent errors from
//! all domains and the transport layer.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
///
/// Tool calls never fail through this type (their failures are rendered as
/// text); it covers server construction and transport lifecycle.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the OpenSky domain, e.g. building the HTTP client.
    #[error("Upstream error: {0}")]
    Upstream(#[from] crate::domains::opensky::UpstreamError),

    /// Error from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}
