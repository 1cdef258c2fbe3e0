//! Aircraft by callsign tool definition.
//!
//! Finds a single aircraft by exact callsign and renders a detailed tracking
//! report for it.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, instrument};

use crate::domains::opensky::state::{non_zero, state_vectors};
use crate::domains::opensky::time::{DATE_TIME_SECONDS, format_unix};
use crate::domains::opensky::units::{meters_to_feet, mps_to_feet_per_minute, mps_to_knots};
use crate::domains::opensky::{AircraftState, Endpoint, FlightDataSource, QueryParams};
use crate::domains::tools::OpenSkyTool;
use crate::domains::tools::definitions::common::{error_result, group_thousands, success_result};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the aircraft by callsign tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AircraftByCallsignParams {
    #[schemars(description = "Aircraft callsign (e.g., UAL123)")]
    pub callsign: String,
}

impl AircraftByCallsignParams {
    /// Trimmed, upper-cased callsign.
    pub fn normalized(&self) -> String {
        self.callsign.trim().to_uppercase()
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Aircraft by callsign tool.
pub struct AircraftByCallsignTool;

impl AircraftByCallsignTool {
    /// Render the tracking report for the first state matching `callsign`.
    pub fn render(callsign: &str, payload: &Value) -> String {
        let found = state_vectors(payload)
            .iter()
            .filter_map(AircraftState::decode)
            .find(|state| state.matches_callsign(callsign));

        match found {
            Some(aircraft) => render_tracking(&aircraft),
            None => format!(
                "No aircraft found with callsign: {}\n\n\
                 *Note: Callsign must be exact and aircraft must be airborne.*",
                callsign
            ),
        }
    }
}

fn render_tracking(aircraft: &AircraftState) -> String {
    let mut report = format!("**Aircraft Tracking: {}**\n\n", aircraft.display_callsign());

    report.push_str("**Identification:**\n");
    report.push_str(&format!("- ICAO24: {}\n", aircraft.icao24));
    report.push_str(&format!("- Country: {}\n\n", aircraft.origin_country));

    if let Some((lat, lon)) = aircraft.position() {
        report.push_str("**Position:**\n");
        report.push_str(&format!("- Latitude: {:.4}\n", lat));
        report.push_str(&format!("- Longitude: {:.4}\n\n", lon));
    }

    report.push_str("**Altitude & Speed:**\n");
    if let Some(alt) = non_zero(aircraft.baro_altitude) {
        report.push_str(&format!(
            "- Barometric Altitude: {} ft\n",
            group_thousands(meters_to_feet(Some(alt)))
        ));
    }
    if let Some(alt) = non_zero(aircraft.geo_altitude) {
        report.push_str(&format!(
            "- Geometric Altitude: {} ft\n",
            group_thousands(meters_to_feet(Some(alt)))
        ));
    }
    if let Some(speed) = non_zero(aircraft.velocity) {
        report.push_str(&format!(
            "- Ground Speed: {:.0} knots\n",
            mps_to_knots(Some(speed))
        ));
    }
    if let Some(rate) = non_zero(aircraft.vertical_rate) {
        report.push_str(&format!(
            "- Vertical Rate: {:.0} ft/min\n",
            mps_to_feet_per_minute(Some(rate))
        ));
    }
    if let Some(track) = non_zero(aircraft.true_track) {
        report.push_str(&format!("- Heading: {:.0}°\n", track));
    }
    report.push('\n');

    report.push_str("**Status:**\n");
    report.push_str(&format!(
        "- On Ground: {}\n",
        if aircraft.on_ground { "Yes" } else { "No" }
    ));
    if let Some(contact) = aircraft.last_contact {
        report.push_str(&format!(
            "- Last Contact: {}\n",
            format_unix(contact, DATE_TIME_SECONDS)
        ));
    }
    if let Some(squawk) = aircraft.squawk.as_deref().filter(|s| !s.is_empty()) {
        report.push_str(&format!("- Squawk: {}\n", squawk));
    }

    report
}

impl OpenSkyTool for AircraftByCallsignTool {
    const NAME: &'static str = "get_aircraft_by_callsign";

    const DESCRIPTION: &'static str =
        "Track a specific aircraft by callsign (e.g., UAL123, AAL456)";

    type Params = AircraftByCallsignParams;

    #[instrument(skip_all, fields(callsign = %params.callsign))]
    async fn execute(params: Self::Params, source: &dyn FlightDataSource) -> CallToolResult {
        let callsign = params.normalized();
        info!("Aircraft by callsign tool called for: {}", callsign);

        match source.fetch(Endpoint::StatesAll, &QueryParams::new()).await {
            Ok(payload) => success_result(Self::render(&callsign, &payload)),
            Err(e) => error_result(&e),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::opensky::client::stub::StubSource;
    use rmcp::model::RawContent;
    use serde_json::json;

    fn tracked(callsign: &str, icao24: &str) -> Value {
        json!([
            icao24, callsign, "United States", 1_700_000_000, 1_700_000_000,
            -77.0365, 38.8977, 10_668.0, false, 231.5, 87.4, -2.54, null,
            10_820.0, "4521", false, 0
        ])
    }

    fn text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_normalized_callsign() {
        let params = AircraftByCallsignParams {
            callsign: "  ual123 ".to_string(),
        };
        assert_eq!(params.normalized(), "UAL123");
    }

    #[test]
    fn test_render_full_report() {
        let payload = json!({"states": [tracked("UAL123  ", "a1b2c3")]});
        let report = AircraftByCallsignTool::render("UAL123", &payload);

        let expected = "**Aircraft Tracking: UAL123**\n\n\
            **Identification:**\n- ICAO24: a1b2c3\n- Country: United States\n\n\
            **Position:**\n- Latitude: 38.8977\n- Longitude: -77.0365\n\n\
            **Altitude & Speed:**\n\
            - Barometric Altitude: 35,000 ft\n\
            - Geometric Altitude: 35,499 ft\n\
            - Ground Speed: 450 knots\n\
            - Vertical Rate: -500 ft/min\n\
            - Heading: 87°\n\n\
            **Status:**\n- On Ground: No\n\
            - Last Contact: 2023-11-14 22:13:20 UTC\n\
            - Squawk: 4521\n";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_render_first_match_wins() {
        let payload = json!({
            "states": [
                tracked("AAL1", "000001"),
                tracked("ual123", "000002"),
                tracked("UAL123", "000003"),
            ]
        });
        let report = AircraftByCallsignTool::render("UAL123", &payload);
        assert!(report.contains("- ICAO24: 000002\n"));
        assert!(!report.contains("000003"));
    }

    #[test]
    fn test_render_no_match() {
        let payload = json!({"states": [tracked("UAL123", "a1b2c3")]});
        let report = AircraftByCallsignTool::render("ZZZ000", &payload);
        assert_eq!(
            report,
            "No aircraft found with callsign: ZZZ000\n\n\
             *Note: Callsign must be exact and aircraft must be airborne.*"
        );
    }

    #[test]
    fn test_render_sparse_state() {
        let mut raw = vec![Value::Null; 17];
        raw[0] = json!("ffffff");
        raw[1] = json!("GLID3R");
        raw[2] = json!("Germany");
        raw[8] = json!(true);
        let report = AircraftByCallsignTool::render("GLID3R", &json!({"states": [raw]}));

        assert!(!report.contains("**Position:**"));
        assert!(report.contains("**Altitude & Speed:**\n\n**Status:**\n"));
        assert!(report.contains("- On Ground: Yes\n"));
        assert!(!report.contains("Last Contact"));
        assert!(!report.contains("Squawk"));
    }

    #[tokio::test]
    async fn test_execute_fetches_all_states() {
        let source = StubSource::ok(json!({"states": [tracked("UAL123", "a1b2c3")]}));
        let params = AircraftByCallsignParams {
            callsign: "ual123".to_string(),
        };
        let result = AircraftByCallsignTool::execute(params, &source).await;

        assert!(text(&result).starts_with("**Aircraft Tracking: UAL123**"));
        let calls = source.recorded();
        assert_eq!(calls, vec![(Endpoint::StatesAll, QueryParams::new())]);
    }

    #[tokio::test]
    async fn test_execute_is_idempotent() {
        let source = StubSource::ok(json!({"states": [tracked("UAL123", "a1b2c3")]}));
        let params = AircraftByCallsignParams {
            callsign: "UAL123".to_string(),
        };
        let first = AircraftByCallsignTool::execute(params.clone(), &source).await;
        let second = AircraftByCallsignTool::execute(params, &source).await;
        assert_eq!(text(&first), text(&second));
    }
}
