//! # Per-computation options records
//!
//! This module defines [`Options`], the optional-configuration record passed
//! alongside the mandatory inputs of a radiative-transfer computation. It lets
//! a caller override default model behavior — user-supplied surface
//! emissivities, scattering, RT-solver stream counts, aircraft-altitude mode,
//! instrument-specific sub-configurations — on a per-computation basis without
//! changing the model entry-point signatures.
//!
//! ## Overview
//!
//! A record starts unallocated: the two per-channel arrays (`emissivity`,
//! `direct_reflectivity`) hold no storage and `n_channels` is 0. Calling
//! [`Options::create`] binds both arrays, zero-filled, to a channel count;
//! [`Options::destroy`] releases them again. Records are plain value types:
//! cloning one duplicates the arrays and the embedded sub-records, so no two
//! records ever share storage.
//!
//! Model drivers usually work with one record per atmospheric profile. Every
//! operation here is defined over a single record and applied independently
//! per element; the `*_all` helpers provide the elementwise form over a slice.
//!
//! ## Structure
//!
//! ```text
//! Options
//! ├── scalar toggles       (check_input, include_scattering, ...)
//! ├── aircraft_pressure    (sentinel: ≤ 0 means "off")
//! ├── emissivity           (per-channel, optional storage)
//! ├── direct_reflectivity  (per-channel, optional storage)
//! ├── scan_input           (ScanInput sub-record)
//! └── zeeman_input         (ZeemanInput sub-record)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use clearsky::options::Options;
//!
//! let mut options = Options::default();
//! options.create(4);
//! options.use_emissivity = true;
//! options.emissivity.as_mut().unwrap().fill(0.98);
//!
//! assert!(options.associated());
//! assert!(options.is_valid());
//! ```
//!
//! ## See also
//!
//! - [`crate::validation`] – validity predicate and diagnostics.
//! - [`crate::equality`] – tolerance-based equality over the record tree.

use std::fmt;

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_AIRCRAFT_PRESSURE;
use crate::scan_input::ScanInput;
use crate::zeeman_input::ZeemanInput;

/// Optional-configuration record for one radiative-transfer computation.
///
/// All fields are caller-mutable. The allocation state of the two per-channel
/// arrays is derived from the record itself (see [`Options::associated`]) and
/// maintained by [`Options::create`] / [`Options::destroy`]; callers never set
/// it directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// Check model inputs before running.
    pub check_input: bool,
    /// Fall back to the legacy microwave sea-surface emissivity model.
    pub use_old_mw_emissivity_model: bool,
    /// Apply the antenna correction to microwave brightness temperatures.
    pub use_antenna_correction: bool,
    /// Apply the non-LTE correction to shortwave infrared radiances.
    pub apply_nlte_correction: bool,
    /// Include scattering in the radiative transfer solution.
    pub include_scattering: bool,
    /// Aircraft flight-level pressure in hPa; ≤ 0 means "aircraft mode off".
    pub aircraft_pressure: f64,

    /// Channel count the per-channel arrays are bound to; 0 when unallocated.
    pub n_channels: usize,
    /// Caller-managed index into the per-channel arrays.
    pub channel: usize,

    /// Use the user-supplied per-channel surface emissivities.
    pub use_emissivity: bool,
    /// Surface emissivity per channel, each value in [0, 1] when used.
    pub emissivity: Option<DVector<f64>>,
    /// Use the user-supplied per-channel direct reflectivities.
    pub use_direct_reflectivity: bool,
    /// Direct reflectivity per channel, same shape and range contract as
    /// `emissivity`, independent flag.
    pub direct_reflectivity: Option<DVector<f64>>,

    /// Override the RT-solver stream count with `n_streams`.
    pub use_n_streams: bool,
    pub n_streams: usize,

    pub scan_input: ScanInput,
    pub zeeman_input: ZeemanInput,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            check_input: true,
            use_old_mw_emissivity_model: false,
            use_antenna_correction: false,
            apply_nlte_correction: true,
            include_scattering: true,
            aircraft_pressure: DEFAULT_AIRCRAFT_PRESSURE,
            n_channels: 0,
            channel: 0,
            use_emissivity: false,
            emissivity: None,
            use_direct_reflectivity: false,
            direct_reflectivity: None,
            use_n_streams: false,
            n_streams: 0,
            scan_input: ScanInput::default(),
            zeeman_input: ZeemanInput::default(),
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocation-state query: true iff both per-channel arrays are bound and
    /// their lengths match a channel count of at least 1.
    pub fn associated(&self) -> bool {
        match (&self.emissivity, &self.direct_reflectivity) {
            (Some(emissivity), Some(direct_reflectivity)) => {
                self.n_channels >= 1
                    && emissivity.len() == self.n_channels
                    && direct_reflectivity.len() == self.n_channels
            }
            _ => false,
        }
    }

    /// Binds both per-channel arrays to `n_channels` entries, zero-filled.
    ///
    /// A channel count of 0 is a silent no-op: the record keeps its prior
    /// allocation state and no error is reported. Callers that need to
    /// confirm success check [`Options::associated`] afterwards.
    pub fn create(&mut self, n_channels: usize) {
        if n_channels == 0 {
            return;
        }
        self.emissivity = Some(DVector::zeros(n_channels));
        self.direct_reflectivity = Some(DVector::zeros(n_channels));
        self.n_channels = n_channels;
    }

    /// Releases both per-channel arrays and resets the channel count. The
    /// scalar fields and sub-records are untouched. Idempotent.
    pub fn destroy(&mut self) {
        self.emissivity = None;
        self.direct_reflectivity = None;
        self.n_channels = 0;
    }
}

/// Elementwise allocation-state query over an ordered collection of records.
pub fn associated_all(records: &[Options]) -> Vec<bool> {
    records.iter().map(Options::associated).collect()
}

/// Elementwise [`Options::create`] over a collection, one channel count for
/// every element.
pub fn create_all(records: &mut [Options], n_channels: usize) {
    for record in records {
        record.create(n_channels);
    }
}

/// Elementwise [`Options::destroy`] over a collection.
pub fn destroy_all(records: &mut [Options]) {
    for record in records {
        record.destroy();
    }
}

impl fmt::Display for Options {
    /// Fixed line-oriented diagnostic dump of every field. Pure read.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Options:")?;
        writeln!(f, "  check input             : {}", self.check_input)?;
        writeln!(
            f,
            "  old MW emissivity model : {}",
            self.use_old_mw_emissivity_model
        )?;
        writeln!(
            f,
            "  antenna correction      : {}",
            self.use_antenna_correction
        )?;
        writeln!(
            f,
            "  NLTE correction         : {}",
            self.apply_nlte_correction
        )?;
        writeln!(f, "  include scattering      : {}", self.include_scattering)?;
        writeln!(
            f,
            "  aircraft pressure [hPa] : {:.6}",
            self.aircraft_pressure
        )?;
        writeln!(f, "  n channels              : {}", self.n_channels)?;
        writeln!(f, "  channel                 : {}", self.channel)?;
        writeln!(f, "  use emissivity          : {}", self.use_emissivity)?;
        write_array(f, "  emissivity              :", &self.emissivity)?;
        writeln!(
            f,
            "  use direct reflectivity : {}",
            self.use_direct_reflectivity
        )?;
        write_array(f, "  direct reflectivity     :", &self.direct_reflectivity)?;
        writeln!(f, "  use n streams           : {}", self.use_n_streams)?;
        writeln!(f, "  n streams               : {}", self.n_streams)?;
        write!(f, "{}", self.scan_input)?;
        write!(f, "{}", self.zeeman_input)
    }
}

fn write_array(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    array: &Option<DVector<f64>>,
) -> fmt::Result {
    write!(f, "{label}")?;
    match array {
        Some(values) => {
            for value in values.iter() {
                write!(f, " {value:.6}")?;
            }
            writeln!(f)
        }
        None => writeln!(f, " <not allocated>"),
    }
}
