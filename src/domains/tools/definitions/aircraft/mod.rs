//! State vector tools.
//!
//! These tools read the live `/states/all` feed:
//! - `region`: aircraft inside a bounding box
//! - `callsign`: detailed tracking of one aircraft
//! - `all`: worldwide summary

pub mod all;
pub mod callsign;
pub mod region;

pub use all::{AllAircraftParams, AllAircraftTool};
pub use callsign::{AircraftByCallsignParams, AircraftByCallsignTool};
pub use region::{AircraftInRegionParams, AircraftInRegionTool};
