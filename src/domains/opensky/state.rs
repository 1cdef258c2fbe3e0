//! OpenSky state vectors.
//!
//! `/states/all` returns each aircraft as a positional JSON array rather than
//! an object. [`AircraftState::decode`] maps the 17 positions onto named
//! fields; anything shorter is rejected as a whole.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::client::QueryParams;

/// Number of positional fields in a state vector.
pub const STATE_VECTOR_LEN: usize = 17;

/// Sentinel shown in place of a missing callsign.
pub const MISSING_CALLSIGN: &str = "N/A";

/// Origin of an aircraft's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PositionSource {
    AdsB,
    Asterix,
    Mlat,
    Flarm,
}

impl PositionSource {
    /// Map the numeric code used by the API.
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            0 => Some(Self::AdsB),
            1 => Some(Self::Asterix),
            2 => Some(Self::Mlat),
            3 => Some(Self::Flarm),
            _ => None,
        }
    }
}

/// Geographic query window. Ordering of the bounds is left to the API.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl BoundingBox {
    /// `lamin`/`lamax`/`lomin`/`lomax` query parameters.
    pub fn query_params(&self) -> QueryParams {
        vec![
            ("lamin", self.lat_min.to_string()),
            ("lamax", self.lat_max.to_string()),
            ("lomin", self.lon_min.to_string()),
            ("lomax", self.lon_max.to_string()),
        ]
    }
}

/// One observed aircraft snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AircraftState {
    /// ICAO 24-bit transponder address (hex).
    pub icao24: String,
    /// Trimmed callsign as reported; may be empty.
    pub callsign: Option<String>,
    pub origin_country: String,
    pub time_position: Option<i64>,
    pub last_contact: Option<i64>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    /// Barometric altitude in meters.
    pub baro_altitude: Option<f64>,
    pub on_ground: bool,
    /// Ground speed in m/s.
    pub velocity: Option<f64>,
    /// Track in degrees clockwise from north.
    pub true_track: Option<f64>,
    /// Vertical rate in m/s; positive is climbing.
    pub vertical_rate: Option<f64>,
    pub sensors: Option<Vec<i64>>,
    /// Geometric altitude in meters.
    pub geo_altitude: Option<f64>,
    pub squawk: Option<String>,
    pub spi: bool,
    pub position_source: Option<PositionSource>,
}

impl AircraftState {
    /// Decode a raw state vector.
    ///
    /// Returns `None` for anything that is not an array of at least
    /// [`STATE_VECTOR_LEN`] elements. Elements of the wrong JSON type are
    /// treated as absent.
    pub fn decode(raw: &Value) -> Option<Self> {
        let Some(fields) = raw.as_array() else {
            debug!(record = %raw, "Discarding non-array state vector");
            return None;
        };
        if fields.len() < STATE_VECTOR_LEN {
            debug!(len = fields.len(), "Discarding short state vector");
            return None;
        }

        Some(Self {
            icao24: string(&fields[0]).unwrap_or_default(),
            callsign: string(&fields[1]).map(|c| c.trim().to_string()),
            origin_country: string(&fields[2]).unwrap_or_default(),
            time_position: fields[3].as_i64(),
            last_contact: fields[4].as_i64(),
            longitude: fields[5].as_f64(),
            latitude: fields[6].as_f64(),
            baro_altitude: fields[7].as_f64(),
            on_ground: fields[8].as_bool().unwrap_or(false),
            velocity: fields[9].as_f64(),
            true_track: fields[10].as_f64(),
            vertical_rate: fields[11].as_f64(),
            sensors: fields[12]
                .as_array()
                .map(|ids| ids.iter().filter_map(Value::as_i64).collect()),
            geo_altitude: fields[13].as_f64(),
            squawk: string(&fields[14]),
            spi: fields[15].as_bool().unwrap_or(false),
            position_source: fields[16].as_u64().and_then(PositionSource::from_code),
        })
    }

    /// Callsign for display, falling back to [`MISSING_CALLSIGN`].
    pub fn display_callsign(&self) -> &str {
        match self.callsign.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => MISSING_CALLSIGN,
        }
    }

    /// Case-insensitive exact match against an already normalized callsign.
    pub fn matches_callsign(&self, wanted: &str) -> bool {
        match self.callsign.as_deref() {
            Some(c) if !c.is_empty() => c.eq_ignore_ascii_case(wanted),
            _ => false,
        }
    }

    /// Position as `(latitude, longitude)` when both are present and non-zero.
    pub fn position(&self) -> Option<(f64, f64)> {
        match (non_zero(self.latitude), non_zero(self.longitude)) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

/// Extract the `states` list from a `/states/all` payload.
///
/// A missing or `null` list is treated as empty.
pub fn state_vectors(payload: &Value) -> &[Value] {
    payload
        .get("states")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Treat zero as absent, matching how reports omit empty readings.
pub fn non_zero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

fn string(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}
