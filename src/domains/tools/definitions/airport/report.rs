//! Shared request and rendering logic for the arrival/departure tools.

use rmcp::model::CallToolResult;
use serde_json::Value;
use tracing::info;

use crate::domains::opensky::flight::{decode_flight, flight_list};
use crate::domains::opensky::time::{DATE_TIME_MINUTES, TIME_MINUTES, format_unix};
use crate::domains::opensky::{Endpoint, FlightDataSource, FlightEvent, QueryParams};
use crate::domains::tools::definitions::common::{error_result, success_result};

/// Maximum number of flights listed in one report.
pub const FLIGHT_DISPLAY_CAP: usize = 30;

/// Which side of the airport a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightDirection {
    Arrivals,
    Departures,
}

impl FlightDirection {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::Arrivals => Endpoint::FlightsArrival,
            Self::Departures => Endpoint::FlightsDeparture,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Self::Arrivals => "Arrivals",
            Self::Departures => "Departures",
        }
    }

    fn noun(&self) -> &'static str {
        match self {
            Self::Arrivals => "arrivals",
            Self::Departures => "departures",
        }
    }

    /// The other end of the flight, e.g. `From: KJFK` for an arrival.
    fn counterpart<'a>(&self, flight: &'a FlightEvent) -> Option<(&'static str, &'a str)> {
        let (label, airport) = match self {
            Self::Arrivals => ("From", flight.est_departure_airport.as_deref()),
            Self::Departures => ("To", flight.est_arrival_airport.as_deref()),
        };
        airport.filter(|a| !a.is_empty()).map(|a| (label, a))
    }
}

/// Airport plus time window for a flights query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirportWindow {
    /// Upper-cased ICAO airport code.
    pub icao: String,
    /// Window start, Unix seconds.
    pub begin: i64,
    /// Window end, Unix seconds.
    pub end: i64,
}

impl AirportWindow {
    pub fn new(icao: &str, begin: i64, end: i64) -> Self {
        Self {
            icao: icao.trim().to_uppercase(),
            begin,
            end,
        }
    }

    /// `airport`/`begin`/`end` query parameters.
    pub fn query_params(&self) -> QueryParams {
        vec![
            ("airport", self.icao.clone()),
            ("begin", self.begin.to_string()),
            ("end", self.end.to_string()),
        ]
    }
}

/// Render an arrivals or departures report from a `/flights/*` payload.
pub fn render(direction: FlightDirection, window: &AirportWindow, payload: &Value) -> String {
    let flights = flight_list(payload);

    if flights.is_empty() {
        return format!(
            "No {} found for {} in time window:\n- Begin: {}\n- End: {}",
            direction.noun(),
            window.icao,
            format_unix(window.begin, DATE_TIME_MINUTES),
            format_unix(window.end, DATE_TIME_MINUTES)
        );
    }

    let mut report = format!(
        "**{}: {}** (Found: {})\n\n",
        direction.title(),
        window.icao,
        flights.len()
    );
    report.push_str("**Time Window:**\n");
    report.push_str(&format!(
        "- {} to {}\n\n",
        format_unix(window.begin, DATE_TIME_MINUTES),
        format_unix(window.end, TIME_MINUTES)
    ));

    for flight in flights
        .iter()
        .take(FLIGHT_DISPLAY_CAP)
        .filter_map(decode_flight)
    {
        report.push_str(&format!("**{}**\n", flight.display_callsign()));
        report.push_str(&format!("- ICAO24: {}\n", flight.display_icao24()));

        if let Some((label, airport)) = direction.counterpart(&flight) {
            report.push_str(&format!("- {}: {}\n", label, airport));
        }
        if let Some(seen) = flight.first_seen.filter(|t| *t != 0) {
            report.push_str(&format!("- First Seen: {}\n", format_unix(seen, TIME_MINUTES)));
        }
        if let Some(seen) = flight.last_seen.filter(|t| *t != 0) {
            report.push_str(&format!("- Last Seen: {}\n", format_unix(seen, TIME_MINUTES)));
        }

        report.push('\n');
    }

    if flights.len() > FLIGHT_DISPLAY_CAP {
        report.push_str(&format!(
            "*Showing {} of {} flights*\n",
            FLIGHT_DISPLAY_CAP,
            flights.len()
        ));
    }

    report
}

/// Fetch and render one airport report.
pub async fn fetch_and_render(
    direction: FlightDirection,
    window: AirportWindow,
    source: &dyn FlightDataSource,
) -> CallToolResult {
    info!(
        "{} requested for {} ({} - {})",
        direction.title(),
        window.icao,
        window.begin,
        window.end
    );

    match source
        .fetch(direction.endpoint(), &window.query_params())
        .await
    {
        Ok(payload) => success_result(render(direction, &window, &payload)),
        Err(e) => error_result(&e),
    }
}
