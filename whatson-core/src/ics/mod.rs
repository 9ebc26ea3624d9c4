//! ICS file generation.
//!
//! This module renders events as full-day VEVENTs per RFC 5545, so an
//! external calendar app can import them.

mod generate;

pub use generate::generate_ics;
