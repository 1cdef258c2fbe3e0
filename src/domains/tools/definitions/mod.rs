//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod aircraft;
pub mod airport;
pub mod common;

pub use aircraft::{
    AircraftByCallsignParams, AircraftByCallsignTool, AircraftInRegionParams,
    AircraftInRegionTool, AllAircraftParams, AllAircraftTool,
};
pub use airport::{ArrivalsParams, ArrivalsTool, DeparturesParams, DeparturesTool};
