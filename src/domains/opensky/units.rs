//! Unit conversions from the metric values OpenSky reports to aviation
//! display units.

/// Feet per meter.
pub const FEET_PER_METER: f64 = 3.28084;

/// Knots per meter/second.
pub const KNOTS_PER_MPS: f64 = 1.94384;

/// Feet/minute per meter/second, used for the vertical rate only.
pub const FPM_PER_MPS: f64 = 196.85;

/// Convert meters to feet. Absent and zero both yield 0.
pub fn meters_to_feet(meters: Option<f64>) -> f64 {
    scale(meters, FEET_PER_METER)
}

/// Convert m/s to knots. Absent and zero both yield 0.
pub fn mps_to_knots(mps: Option<f64>) -> f64 {
    scale(mps, KNOTS_PER_MPS)
}

/// Convert a vertical rate in m/s to ft/min. Absent and zero both yield 0.
pub fn mps_to_feet_per_minute(mps: Option<f64>) -> f64 {
    scale(mps, FPM_PER_MPS)
}

fn scale(value: Option<f64>, factor: f64) -> f64 {
    match value {
        Some(v) if v != 0.0 => v * factor,
        _ => 0.0,
    }
}
