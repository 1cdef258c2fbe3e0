//! Airport flight tools.
//!
//! - `arrivals`: flights that arrived at an airport in a time window
//! - `departures`: flights that departed from an airport in a time window
//!
//! Both share the request and report logic in `report`.

pub mod arrivals;
pub mod departures;
pub mod report;

pub use arrivals::{ArrivalsParams, ArrivalsTool};
pub use departures::{DeparturesParams, DeparturesTool};
