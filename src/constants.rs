//! # Constants and defaults for Clearsky
//!
//! This module centralizes the numeric defaults and comparison tolerances used
//! by the options records, together with the crate identity string reported to
//! embedding model builds.
//!
//! ## Overview
//!
//! - Default values for the sentinel-encoded and physical fields
//! - The fixed tolerance used by the equality comparators
//! - The crate identity string

/// Tolerance used for every floating-point comparison performed by the
/// equality comparators. Fixed so that test outcomes are reproducible.
pub const COMPARISON_EPSILON: f64 = 1.0e-10;

/// Default aircraft flight-level pressure, in hPa. Any value ≤ 0 means
/// "aircraft mode off"; a positive value is the flight-level pressure.
pub const DEFAULT_AIRCRAFT_PRESSURE: f64 = -1.0;

/// Default geomagnetic field strength for the Zeeman input, in Gauss.
pub const DEFAULT_FIELD_STRENGTH: f64 = 0.3;

/// Number of CO2 cells carried by the instrument-scan input.
pub const N_SCAN_CELLS: usize = 3;

/// Crate identity string, e.g. `clearsky 0.1.0`.
pub const VERSION: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));
