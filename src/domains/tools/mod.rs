//! Tools domain module.
//!
//! This module exposes the OpenSky tools to MCP clients. Each tool turns its
//! arguments into one OpenSky request and renders the answer as a text report.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `handlers.rs` - The `OpenSkyTool` trait and generic route/dispatch plumbing
//! - `router.rs` - Dynamic ToolRouter builder for the rmcp server
//! - `registry.rs` - Tool catalog and name-based dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` and implement `OpenSkyTool`
//! 2. Export it in `definitions/mod.rs`
//! 3. Add a route in `router.rs`
//! 4. Add it to the catalog and dispatch in `registry.rs`

pub mod definitions;
mod error;
pub mod handlers;
mod registry;
pub mod router;

pub use error::ToolError;
pub use handlers::OpenSkyTool;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
