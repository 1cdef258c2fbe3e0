//! Arrival/departure records from the `/flights/*` endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::state::MISSING_CALLSIGN;

/// One arrival or departure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightEvent {
    #[serde(default)]
    pub icao24: Option<String>,
    #[serde(default)]
    pub callsign: Option<String>,
    #[serde(default)]
    pub est_departure_airport: Option<String>,
    #[serde(default)]
    pub est_arrival_airport: Option<String>,
    #[serde(default)]
    pub first_seen: Option<i64>,
    #[serde(default)]
    pub last_seen: Option<i64>,
}

impl FlightEvent {
    /// Trimmed callsign, or [`MISSING_CALLSIGN`] when absent or blank.
    pub fn display_callsign(&self) -> &str {
        match self.callsign.as_deref().map(str::trim) {
            Some(c) if !c.is_empty() => c,
            _ => MISSING_CALLSIGN,
        }
    }

    /// ICAO24 address, or [`MISSING_CALLSIGN`] when absent.
    pub fn display_icao24(&self) -> &str {
        self.icao24.as_deref().unwrap_or(MISSING_CALLSIGN)
    }
}

/// The raw flight list from a `/flights/*` payload.
///
/// Any payload that is not a JSON array is treated as an empty list.
pub fn flight_list(payload: &Value) -> &[Value] {
    payload.as_array().map(Vec::as_slice).unwrap_or(&[])
}

/// Decode a single list element.
///
/// Non-objects and objects with mistyped fields decode to `None`; the raw
/// list length still counts them.
pub fn decode_flight(raw: &Value) -> Option<FlightEvent> {
    if !raw.is_object() {
        debug!(record = %raw, "Discarding non-object flight record");
        return None;
    }
    match FlightEvent::deserialize(raw) {
        Ok(flight) => Some(flight),
        Err(e) => {
            debug!(error = %e, record = %raw, "Discarding malformed flight record");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_upstream_object() {
        let raw = json!({
            "icao24": "a0b1c2",
            "firstSeen": 1_700_000_000,
            "estDepartureAirport": "KJFK",
            "lastSeen": 1_700_003_000,
            "estArrivalAirport": "KDCA",
            "callsign": "AAL456  ",
            "estDepartureAirportHorizDistance": 1234,
            "arrivalAirportCandidatesCount": 2
        });
        let flight = decode_flight(&raw).unwrap();
        assert_eq!(flight.icao24.as_deref(), Some("a0b1c2"));
        assert_eq!(flight.est_departure_airport.as_deref(), Some("KJFK"));
        assert_eq!(flight.est_arrival_airport.as_deref(), Some("KDCA"));
        assert_eq!(flight.first_seen, Some(1_700_000_000));
        assert_eq!(flight.last_seen, Some(1_700_003_000));
        assert_eq!(flight.display_callsign(), "AAL456");
    }

    #[test]
    fn test_decode_nulls_and_missing_fields() {
        let flight = decode_flight(&json!({"callsign": null, "estArrivalAirport": null})).unwrap();
        assert_eq!(flight.display_callsign(), "N/A");
        assert_eq!(flight.display_icao24(), "N/A");
        assert_eq!(flight.est_arrival_airport, None);
    }

    #[test]
    fn test_decode_non_object() {
        assert!(decode_flight(&json!([1, 2])).is_none());
        assert!(decode_flight(&json!("KDCA")).is_none());
    }

    #[test]
    fn test_decode_mistyped_field() {
        assert!(decode_flight(&json!({"icao24": "a0b1c2", "firstSeen": 1.7e9})).is_none());
        assert!(decode_flight(&json!({"icao24": 42})).is_none());
    }

    #[test]
    fn test_flight_list_requires_array() {
        assert!(flight_list(&json!({"error": "nope"})).is_empty());
        assert_eq!(flight_list(&json!([{}, {}])).len(), 2);
    }
}
