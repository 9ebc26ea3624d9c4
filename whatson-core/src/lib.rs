//! Core types for the whatson ecosystem.
//!
//! This crate provides everything the CLI builds on:
//! - `Event` and the feed loading in `catalog`
//! - the pure filter/sort pipeline in `filter`
//! - locally persisted favorites in `favorites`
//! - full-day ICS export in `ics`

pub mod catalog;
pub mod config;
pub mod error;
pub mod event;
pub mod favorites;
pub mod filter;
pub mod ics;

// Re-export the event type at crate root for convenience
pub use event::Event;
