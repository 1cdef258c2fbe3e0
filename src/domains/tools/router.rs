//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each route parses its own arguments and calls the shared
//! [`FlightDataSource`]; see `handlers::tool_route`.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    AircraftByCallsignTool, AircraftInRegionTool, AllAircraftTool, ArrivalsTool, DeparturesTool,
};
use super::handlers::tool_route;
use crate::domains::opensky::FlightDataSource;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(source: Arc<dyn FlightDataSource>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(tool_route::<AircraftInRegionTool, S>(source.clone()))
        .with_route(tool_route::<AircraftByCallsignTool, S>(source.clone()))
        .with_route(tool_route::<AllAircraftTool, S>(source.clone()))
        .with_route(tool_route::<ArrivalsTool, S>(source.clone()))
        .with_route(tool_route::<DeparturesTool, S>(source))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::domains::opensky::client::stub::StubSource;

    struct TestServer {}

    fn test_source() -> Arc<dyn FlightDataSource> {
        Arc::new(StubSource::ok(serde_json::json!({"states": []})))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_source());
        let tools = router.list_all();
        assert_eq!(tools.len(), 5);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_aircraft_in_region"));
        assert!(names.contains(&"get_aircraft_by_callsign"));
        assert!(names.contains(&"get_all_aircraft"));
        assert!(names.contains(&"get_arrivals"));
        assert!(names.contains(&"get_departures"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router have the same tools
        let source = test_source();
        let registry = ToolRegistry::new(source.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(source);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
