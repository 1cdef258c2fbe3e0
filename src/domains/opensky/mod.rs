//! OpenSky Network domain.
//!
//! Everything needed to talk to the OpenSky REST API and turn its payloads
//! into typed records:
//!
//! - `client` - [`FlightDataSource`] seam and the reqwest-backed [`OpenSkyClient`]
//! - `error` - upstream failure taxonomy
//! - `state` - state vector decoding
//! - `flight` - arrival/departure records
//! - `units` - metric to aviation unit conversions
//! - `time` - UTC timestamp formatting

pub mod client;
mod error;
pub mod flight;
pub mod state;
pub mod time;
pub mod units;

pub use client::{Endpoint, FlightDataSource, OpenSkyClient, QueryParams, REQUEST_TIMEOUT};
pub use error::{UpstreamError, UpstreamResult};
pub use flight::FlightEvent;
pub use state::{AircraftState, BoundingBox, PositionSource};
