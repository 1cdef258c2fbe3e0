//! Domains module containing business logic organized by bounded contexts.
//!
//! - **opensky**: upstream client, payload decoding and unit conversion
//! - **tools**: the MCP tools built on top of it

pub mod opensky;
pub mod tools;
