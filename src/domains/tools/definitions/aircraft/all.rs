//! All aircraft tool definition.
//!
//! Summarizes the worldwide state vector set, one line per aircraft.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, de::Error as _};
use serde_json::Value;
use tracing::{info, instrument};

use crate::domains::opensky::state::{non_zero, state_vectors};
use crate::domains::opensky::units::meters_to_feet;
use crate::domains::opensky::{AircraftState, Endpoint, FlightDataSource, QueryParams};
use crate::domains::tools::OpenSkyTool;
use crate::domains::tools::definitions::common::{
    error_result, format_count, group_thousands, success_result,
};

/// Number of aircraft listed when no limit is given.
pub const DEFAULT_LIMIT: usize = 50;

/// Parameters for the all aircraft tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AllAircraftParams {
    #[schemars(description = "Limit number of results (default: 50)")]
    #[serde(default, deserialize_with = "deserialize_limit")]
    pub limit: Option<usize>,
}

impl AllAircraftParams {
    /// Requested limit, or [`DEFAULT_LIMIT`] when absent or null.
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

/// Accept any JSON number with an integral, non-negative value (`10`, `10.0`).
fn deserialize_limit<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<f64>::deserialize(deserializer)? {
        None => Ok(None),
        Some(n) if n >= 0.0 && n.fract() == 0.0 && n <= usize::MAX as f64 => Ok(Some(n as usize)),
        Some(n) => Err(D::Error::custom(format!(
            "invalid limit {}, expected a non-negative integer",
            n
        ))),
    }
}

/// All aircraft tool.
pub struct AllAircraftTool;

impl AllAircraftTool {
    /// Render the worldwide summary, listing at most `limit` aircraft.
    pub fn render(limit: usize, payload: &Value) -> String {
        let states = state_vectors(payload);
        let total = format_count(states.len());

        let shown: Vec<AircraftState> = states
            .iter()
            .take(limit)
            .filter_map(AircraftState::decode)
            .collect();

        let mut report = format!("**All Aircraft** (Total: {})\n\n", total);
        report.push_str(&format!("*Showing first {} aircraft*\n\n", shown.len()));

        for aircraft in &shown {
            report.push_str(&format!(
                "**{}** - {}\n",
                aircraft.display_callsign(),
                aircraft.origin_country
            ));

            let mut details = Vec::new();
            if let Some((lat, lon)) = aircraft.position() {
                details.push(format!("Position: {:.2}, {:.2}", lat, lon));
            }
            if let Some(alt) = non_zero(aircraft.baro_altitude) {
                details.push(format!("Alt: {} ft", group_thousands(meters_to_feet(Some(alt)))));
            }
            if !details.is_empty() {
                report.push_str(&format!("  {}\n", details.join(" | ")));
            }
        }

        report.push_str(&format!("\n*Total aircraft tracked worldwide: {}*", total));
        report
    }
}

impl OpenSkyTool for AllAircraftTool {
    const NAME: &'static str = "get_all_aircraft";

    const DESCRIPTION: &'static str =
        "Get all aircraft currently tracked by OpenSky Network (WARNING: Large dataset)";

    type Params = AllAircraftParams;

    #[instrument(skip_all, fields(limit = params.limit()))]
    async fn execute(params: Self::Params, source: &dyn FlightDataSource) -> CallToolResult {
        let limit = params.limit();
        info!("All aircraft tool called (limit {})", limit);

        match source.fetch(Endpoint::StatesAll, &QueryParams::new()).await {
            Ok(payload) => success_result(Self::render(limit, &payload)),
            Err(e) => error_result(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::handlers::parse_params;
    use serde_json::json;

    fn world(count: usize) -> Value {
        let states: Vec<Value> = (0..count)
            .map(|i| {
                json!([
                    format!("{:06x}", i), format!("FLT{}", i), "Canada", null, 1_700_000_000,
                    -79.63, 43.68, 1524.0, false, 120.0, 45.0, null, null,
                    1530.0, null, false, 0
                ])
            })
            .collect();
        json!({"time": 1_700_000_000, "states": states})
    }

    fn params(value: Value) -> Result<AllAircraftParams, crate::domains::tools::ToolError> {
        parse_params(value.as_object().cloned())
    }

    #[test]
    fn test_default_limit() {
        let params: AllAircraftParams = parse_params(None).unwrap();
        assert_eq!(params.limit(), DEFAULT_LIMIT);
    }

    #[test]
    fn test_null_limit_uses_default() {
        assert_eq!(params(json!({"limit": null})).unwrap().limit(), DEFAULT_LIMIT);
    }

    #[test]
    fn test_integral_float_limit_accepted() {
        assert_eq!(params(json!({"limit": 10.0})).unwrap().limit(), 10);
        assert_eq!(params(json!({"limit": 10})).unwrap().limit(), 10);
        assert_eq!(params(json!({"limit": 0})).unwrap().limit(), 0);
    }

    #[test]
    fn test_invalid_limits_rejected() {
        assert!(params(json!({"limit": -5})).is_err());
        assert!(params(json!({"limit": 2.5})).is_err());
        assert!(params(json!({"limit": "ten"})).is_err());
    }

    #[tokio::test]
    async fn test_execute_with_null_limit() {
        use crate::domains::opensky::client::stub::StubSource;
        use rmcp::model::RawContent;

        let source = StubSource::ok(world(60));
        let result = AllAircraftTool::execute(params(json!({"limit": null})).unwrap(), &source).await;

        assert_ne!(result.is_error, Some(true));
        match &result.content[0].raw {
            RawContent::Text(text) => assert!(text.text.contains("*Showing first 50 aircraft*")),
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_render_default_limit_of_120() {
        let report = AllAircraftTool::render(DEFAULT_LIMIT, &world(120));

        assert!(report.starts_with("**All Aircraft** (Total: 120)\n\n*Showing first 50 aircraft*\n\n"));
        assert_eq!(report.matches(" - Canada\n").count(), 50);
        assert!(report.contains("**FLT49** - Canada\n  Position: 43.68, -79.63 | Alt: 5,000 ft\n"));
        assert!(!report.contains("**FLT50**"));
        assert!(report.ends_with("\n*Total aircraft tracked worldwide: 120*"));
    }

    #[test]
    fn test_render_limit_larger_than_world() {
        let report = AllAircraftTool::render(500, &world(3));
        assert!(report.contains("*Showing first 3 aircraft*"));
        assert_eq!(report.matches(" - Canada\n").count(), 3);
    }

    #[test]
    fn test_render_groups_large_totals() {
        let report = AllAircraftTool::render(1, &world(1200));
        assert!(report.starts_with("**All Aircraft** (Total: 1,200)"));
        assert!(report.ends_with("*Total aircraft tracked worldwide: 1,200*"));
    }

    #[test]
    fn test_render_empty_world() {
        let report = AllAircraftTool::render(DEFAULT_LIMIT, &json!({"states": null}));
        assert_eq!(
            report,
            "**All Aircraft** (Total: 0)\n\n*Showing first 0 aircraft*\n\n\n*Total aircraft tracked worldwide: 0*"
        );
    }
}
