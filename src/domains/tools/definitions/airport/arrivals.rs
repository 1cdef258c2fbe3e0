//! Airport arrivals tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::instrument;

use super::report::{AirportWindow, FlightDirection, fetch_and_render};
use crate::domains::opensky::FlightDataSource;
use crate::domains::tools::OpenSkyTool;

/// Parameters for the arrivals tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ArrivalsParams {
    #[schemars(description = "Airport ICAO code (e.g., KDCA for Reagan National)")]
    pub icao: String,

    #[schemars(description = "Begin time as Unix timestamp (seconds since epoch)")]
    pub begin: i64,

    #[schemars(description = "End time as Unix timestamp (seconds since epoch)")]
    pub end: i64,
}

/// Arrivals tool - flights that landed at an airport within a time window.
pub struct ArrivalsTool;

impl OpenSkyTool for ArrivalsTool {
    const NAME: &'static str = "get_arrivals";

    const DESCRIPTION: &'static str = "Get flights arriving at an airport in a time window";

    type Params = ArrivalsParams;

    #[instrument(skip_all, fields(icao = %params.icao))]
    async fn execute(params: Self::Params, source: &dyn FlightDataSource) -> CallToolResult {
        let window = AirportWindow::new(&params.icao, params.begin, params.end);
        fetch_and_render(FlightDirection::Arrivals, window, source).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::opensky::client::stub::StubSource;
    use crate::domains::opensky::{Endpoint, UpstreamError};
    use crate::domains::tools::handlers::parse_params;
    use rmcp::model::RawContent;
    use serde_json::json;

    fn text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_fractional_timestamps_rejected() {
        let args = json!({"icao": "KDCA", "begin": 1700000000.5, "end": 1700003600})
            .as_object()
            .cloned();
        let err = parse_params::<ArrivalsParams>(args).unwrap_err();
        assert!(err.to_string().starts_with("Invalid arguments: "));
    }

    #[tokio::test]
    async fn test_execute_queries_arrival_endpoint() {
        let source = StubSource::ok(json!([]));
        let params = ArrivalsParams {
            icao: "kdca".to_string(),
            begin: 1_700_000_000,
            end: 1_700_003_600,
        };
        let result = ArrivalsTool::execute(params, &source).await;

        assert!(text(&result).starts_with("No arrivals found for KDCA in time window:"));
        let calls = source.recorded();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, Endpoint::FlightsArrival);
        assert_eq!(calls[0].1[0], ("airport", "KDCA".to_string()));
    }

    #[tokio::test]
    async fn test_execute_http_error_is_single_line() {
        let source = StubSource::err(UpstreamError::http(404, "Not Found"));
        let params = ArrivalsParams {
            icao: "KDCA".to_string(),
            begin: 1_700_000_000,
            end: 1_700_003_600,
        };
        let result = ArrivalsTool::execute(params, &source).await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(text(&result), "Error: HTTP 404: Not Found");
    }
}
