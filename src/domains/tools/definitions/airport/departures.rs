//! Airport departures tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::instrument;

use super::report::{AirportWindow, FlightDirection, fetch_and_render};
use crate::domains::opensky::FlightDataSource;
use crate::domains::tools::OpenSkyTool;

/// Parameters for the departures tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeparturesParams {
    #[schemars(description = "Airport ICAO code (e.g., KIAD for Dulles)")]
    pub icao: String,

    #[schemars(description = "Begin time as Unix timestamp (seconds since epoch)")]
    pub begin: i64,

    #[schemars(description = "End time as Unix timestamp (seconds since epoch)")]
    pub end: i64,
}

/// Departures tool - flights that left an airport within a time window.
pub struct DeparturesTool;

impl OpenSkyTool for DeparturesTool {
    const NAME: &'static str = "get_departures";

    const DESCRIPTION: &'static str = "Get flights departing from an airport in a time window";

    type Params = DeparturesParams;

    #[instrument(skip_all, fields(icao = %params.icao))]
    async fn execute(params: Self::Params, source: &dyn FlightDataSource) -> CallToolResult {
        let window = AirportWindow::new(&params.icao, params.begin, params.end);
        fetch_and_render(FlightDirection::Departures, window, source).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::opensky::Endpoint;
    use crate::domains::opensky::client::stub::StubSource;
    use rmcp::model::RawContent;
    use serde_json::json;

    #[tokio::test]
    async fn test_execute_queries_departure_endpoint() {
        let source = StubSource::ok(json!([{
            "icao24": "a12345",
            "callsign": "UAL9",
            "estArrivalAirport": "KSFO",
            "firstSeen": 1_700_000_100,
            "lastSeen": 1_700_020_000
        }]));
        let params = DeparturesParams {
            icao: "KIAD".to_string(),
            begin: 1_700_000_000,
            end: 1_700_003_600,
        };
        let result = DeparturesTool::execute(params, &source).await;

        let text = match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        };
        assert!(text.starts_with("**Departures: KIAD** (Found: 1)"));
        assert!(text.contains("**UAL9**\n- ICAO24: a12345\n- To: KSFO\n"));
        assert_eq!(source.recorded()[0].0, Endpoint::FlightsDeparture);
    }
}
