//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tools domain.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool,
//! each implementing `OpenSkyTool`. The ToolRouter is built dynamically in
//! `domains/tools/router.rs`. **Adding a new tool does NOT require modifying
//! this file!**

use rmcp::{
    ServerHandler,
    handler::server::tool::ToolRouter,
    model::{CallToolResult, JsonObject, ServerCapabilities, ServerInfo, Tool},
    tool_handler,
};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use crate::domains::opensky::{FlightDataSource, OpenSkyClient};
use crate::domains::tools::{ToolRegistry, build_tool_router};

/// The main MCP server handler.
///
/// Stateless apart from its configuration and the shared upstream client;
/// concurrent tool calls never share mutable state.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool catalog and name-based dispatch.
    registry: ToolRegistry,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server talking to the configured OpenSky API.
    pub fn new(config: Config) -> super::error::Result<Self> {
        let client = OpenSkyClient::new(&config.upstream)?;
        Ok(Self::with_source(config, Arc::new(client)))
    }

    /// Create a server backed by an arbitrary flight-data source.
    pub fn with_source(config: Config, source: Arc<dyn FlightDataSource>) -> Self {
        info!("Registering OpenSky tools");

        Self {
            config: Arc::new(config),
            registry: ToolRegistry::new(source.clone()),
            tool_router: build_tool_router::<Self>(source),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// List all available tools.
    pub fn list_tools(&self) -> Vec<Tool> {
        ToolRegistry::get_all_tools()
    }

    /// Call a tool by name. Always yields exactly one text block.
    pub async fn call_tool(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        self.registry.call_tool(name, arguments).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Real-time aircraft tracking and flight data from the OpenSky Network. \
                 Query aircraft by region or callsign, list all tracked aircraft, \
                 and look up airport arrivals and departures."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
