//! OpenSky MCP Server Library
//!
//! This crate exposes real-time aircraft data from the OpenSky Network as
//! Model Context Protocol tools. Every tool issues a single request to the
//! public OpenSky REST API and renders the answer as a Markdown text report.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server and STDIO transport
//! - **domains**: business logic organized by bounded contexts
//!   - **opensky**: HTTP client, payload decoding, unit and time formatting
//!   - **tools**: the five flight-tracking tools
//!
//! # Example
//!
//! ```rust,no_run
//! use opensky_mcp_server::core::{Config, McpServer, StdioTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     StdioTransport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
