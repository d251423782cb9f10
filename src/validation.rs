//! # Options validation
//!
//! This module defines the validity predicate for [`Options`](crate::options::Options)
//! and the diagnostics it reports through, plus the capability contract the
//! embedded sub-records must satisfy so the validator can delegate to them
//! without knowing their internals.
//!
//! ## Overview
//!
//! Validation never raises: [`Options::is_valid`](crate::options::Options::is_valid)
//! always returns a boolean and reports each detected problem as an
//! [`OptionsDiagnostic`] on a side channel (and as a `tracing` warning), so a
//! single pass can surface several problems at once. The caller decides
//! whether a `false` result aborts the surrounding computation; nothing here
//! is fatal.
//!
//! Check order:
//!
//! 1. If emissivity or direct-reflectivity use is requested, the per-channel
//!    arrays must be allocated. When they are not, that single diagnostic is
//!    reported and the remaining checks are skipped, since range checks are
//!    meaningless without storage.
//! 2. Each requested per-channel array must lie entirely in `[0, 1]`. One
//!    diagnostic per offending array, not per element.
//! 3. Each embedded sub-record is asked for its own validity through
//!    [`OptionalInput`] and ANDed into the result.

use thiserror::Error;

use crate::options::Options;

/// Capability contract shared by the sub-records embedded in an options
/// record. The validator and the diagnostic dump rely on nothing else.
pub trait OptionalInput: std::fmt::Display {
    /// Cheap, non-panicking validity check over the record's own fields.
    fn is_valid(&self) -> bool;
}

/// One problem detected by the validator. Informational, never raised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsDiagnostic {
    #[error("emissivity or direct reflectivity use requested but channel arrays are not allocated")]
    NotAllocated,

    #[error("user emissivity contains values outside [0, 1]")]
    EmissivityOutOfRange,

    #[error("user direct reflectivity contains values outside [0, 1]")]
    DirectReflectivityOutOfRange,

    #[error("instrument-scan input is invalid")]
    InvalidScanInput,

    #[error("Zeeman input is invalid")]
    InvalidZeemanInput,
}

impl Options {
    /// Runs every validity check and returns the accumulated diagnostics.
    /// An empty vector means the record is usable in a computation.
    pub fn diagnose(&self) -> Vec<OptionsDiagnostic> {
        let mut diagnostics = Vec::new();

        if (self.use_emissivity || self.use_direct_reflectivity) && !self.associated() {
            diagnostics.push(OptionsDiagnostic::NotAllocated);
            return diagnostics;
        }

        if self.use_emissivity {
            if let Some(emissivity) = &self.emissivity {
                if emissivity.iter().any(|v| !(0.0..=1.0).contains(v)) {
                    diagnostics.push(OptionsDiagnostic::EmissivityOutOfRange);
                }
            }
        }

        if self.use_direct_reflectivity {
            if let Some(direct_reflectivity) = &self.direct_reflectivity {
                if direct_reflectivity.iter().any(|v| !(0.0..=1.0).contains(v)) {
                    diagnostics.push(OptionsDiagnostic::DirectReflectivityOutOfRange);
                }
            }
        }

        if !self.scan_input.is_valid() {
            diagnostics.push(OptionsDiagnostic::InvalidScanInput);
        }

        if !self.zeeman_input.is_valid() {
            diagnostics.push(OptionsDiagnostic::InvalidZeemanInput);
        }

        diagnostics
    }

    /// Validity predicate over the full record tree, delegating to the two
    /// embedded sub-records. Each problem found is logged as a warning; the
    /// boolean result is the only control-flow output.
    pub fn is_valid(&self) -> bool {
        let diagnostics = self.diagnose();
        for diagnostic in &diagnostics {
            tracing::warn!("invalid options record: {diagnostic}");
        }
        diagnostics.is_empty()
    }
}

/// Elementwise validity over an ordered collection of records.
pub fn valid_all(records: &[Options]) -> Vec<bool> {
    records.iter().map(Options::is_valid).collect()
}
