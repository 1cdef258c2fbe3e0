//! Aircraft in region tool definition.
//!
//! Lists aircraft currently inside a latitude/longitude bounding box.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, instrument};

use crate::domains::opensky::state::{non_zero, state_vectors};
use crate::domains::opensky::units::{meters_to_feet, mps_to_knots};
use crate::domains::opensky::{AircraftState, BoundingBox, Endpoint, FlightDataSource};
use crate::domains::tools::OpenSkyTool;
use crate::domains::tools::definitions::common::{error_result, group_thousands, success_result};

/// Maximum number of aircraft listed in one report.
pub const REGION_DISPLAY_CAP: usize = 50;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the aircraft in region tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AircraftInRegionParams {
    #[schemars(description = "Minimum latitude (e.g., 38.8 for Northern Virginia)")]
    pub lat_min: f64,

    #[schemars(description = "Maximum latitude (e.g., 39.0)")]
    pub lat_max: f64,

    #[schemars(description = "Minimum longitude (e.g., -77.5 for DC area)")]
    pub lon_min: f64,

    #[schemars(description = "Maximum longitude (e.g., -77.0)")]
    pub lon_max: f64,
}

impl AircraftInRegionParams {
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox {
            lat_min: self.lat_min,
            lat_max: self.lat_max,
            lon_min: self.lon_min,
            lon_max: self.lon_max,
        }
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Aircraft in region tool.
pub struct AircraftInRegionTool;

impl AircraftInRegionTool {
    /// Render the region report from a `/states/all` payload.
    ///
    /// Only the first [`REGION_DISPLAY_CAP`] state vectors are decoded; the
    /// count in the title is the full upstream count.
    pub fn render(bbox: &BoundingBox, payload: &Value) -> String {
        let states = state_vectors(payload);

        if states.is_empty() {
            return format!(
                "No aircraft found in region:\n- Lat: {} to {}\n- Lon: {} to {}",
                bbox.lat_min, bbox.lat_max, bbox.lon_min, bbox.lon_max
            );
        }

        let mut report = format!("**Aircraft in Region** (Found: {})\n\n", states.len());
        report.push_str("**Bounding Box:**\n");
        report.push_str(&format!("- Latitude: {} to {}\n", bbox.lat_min, bbox.lat_max));
        report.push_str(&format!(
            "- Longitude: {} to {}\n\n",
            bbox.lon_min, bbox.lon_max
        ));

        for aircraft in states
            .iter()
            .take(REGION_DISPLAY_CAP)
            .filter_map(AircraftState::decode)
        {
            report.push_str(&render_entry(&aircraft));
        }

        if states.len() > REGION_DISPLAY_CAP {
            report.push_str(&format!(
                "*Showing {} of {} aircraft. Refine your bounding box for fewer results.*\n",
                REGION_DISPLAY_CAP,
                states.len()
            ));
        }

        report
    }
}

fn render_entry(aircraft: &AircraftState) -> String {
    let mut entry = format!(
        "**{}** ({})\n- ICAO24: {}\n",
        aircraft.display_callsign(),
        aircraft.origin_country,
        aircraft.icao24
    );

    if let Some((lat, lon)) = aircraft.position() {
        entry.push_str(&format!("- Position: {:.4}, {:.4}\n", lat, lon));
    }
    if let Some(alt) = non_zero(aircraft.baro_altitude) {
        entry.push_str(&format!(
            "- Altitude: {} ft\n",
            group_thousands(meters_to_feet(Some(alt)))
        ));
    }
    if let Some(speed) = non_zero(aircraft.velocity) {
        entry.push_str(&format!("- Speed: {:.0} knots\n", mps_to_knots(Some(speed))));
    }
    if aircraft.on_ground {
        entry.push_str("- Status: On Ground\n");
    }

    entry.push('\n');
    entry
}

impl OpenSkyTool for AircraftInRegionTool {
    const NAME: &'static str = "get_aircraft_in_region";

    const DESCRIPTION: &'static str = "Get all aircraft currently in a geographic bounding box";

    type Params = AircraftInRegionParams;

    #[instrument(skip_all, fields(lat_min = params.lat_min, lat_max = params.lat_max, lon_min = params.lon_min, lon_max = params.lon_max))]
    async fn execute(params: Self::Params, source: &dyn FlightDataSource) -> CallToolResult {
        info!("Aircraft in region tool called");

        let bbox = params.bounding_box();
        match source.fetch(Endpoint::StatesAll, &bbox.query_params()).await {
            Ok(payload) => success_result(Self::render(&bbox, &payload)),
            Err(e) => error_result(&e),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
