//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The static tool catalog (names, descriptions, input schemas)
//! - Name-based dispatch of tool calls

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use tracing::{info, warn};

use super::ToolError;
use super::definitions::{
    AircraftByCallsignTool, AircraftInRegionTool, AllAircraftTool, ArrivalsTool, DeparturesTool,
};
use super::handlers::{OpenSkyTool, call_tool, tool_model};
use crate::domains::opensky::FlightDataSource;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// Holds no mutable state; every call is a function of its arguments and the
/// injected [`FlightDataSource`].
#[derive(Clone)]
pub struct ToolRegistry {
    source: Arc<dyn FlightDataSource>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(source: Arc<dyn FlightDataSource>) -> Self {
        Self { source }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            AircraftInRegionTool::NAME,
            AircraftByCallsignTool::NAME,
            AllAircraftTool::NAME,
            ArrivalsTool::NAME,
            DeparturesTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for the tool catalog.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            tool_model::<AircraftInRegionTool>(),
            tool_model::<AircraftByCallsignTool>(),
            tool_model::<AllAircraftTool>(),
            tool_model::<ArrivalsTool>(),
            tool_model::<DeparturesTool>(),
        ]
    }

    /// Dispatch a tool call to the appropriate handler.
    ///
    /// Always yields exactly one text block: the report, an `Error: ...` line,
    /// or `Unknown tool: ...`.
    pub async fn call_tool(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        info!("Dispatching tool call: {}", name);
        let source = self.source.clone();

        match name {
            AircraftInRegionTool::NAME => call_tool::<AircraftInRegionTool>(arguments, source).await,
            AircraftByCallsignTool::NAME => {
                call_tool::<AircraftByCallsignTool>(arguments, source).await
            }
            AllAircraftTool::NAME => call_tool::<AllAircraftTool>(arguments, source).await,
            ArrivalsTool::NAME => call_tool::<ArrivalsTool>(arguments, source).await,
            DeparturesTool::NAME => call_tool::<DeparturesTool>(arguments, source).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                CallToolResult::error(vec![Content::text(ToolError::not_found(name).to_string())])
            }
        }
    }
}
