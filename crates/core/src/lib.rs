//! window-date-core
//!
//! Core library for generating synthetic date-ranked data and grouping it into
//! fixed-width day slices counted from the Unix epoch.
//!
//! Frontends (the `window-date` CLI and shell) own argument parsing and
//! presentation; everything with behavior lives here so it can be tested
//! directly.

pub mod config;
pub mod error;
pub mod model;
pub mod ranks;
pub mod session;
pub mod slicer;

pub use error::{SliceError, SliceResult};

/// Returns the library version as encoded at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
