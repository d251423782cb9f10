use std::fmt;

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

use crate::constants::{COMPARISON_EPSILON, N_SCAN_CELLS};
use crate::validation::OptionalInput;

/// Instrument-scan input for pressure-modulated sounders.
/// Units:
/// * `mission_time`: days since launch
/// * `cell_pressure`: hPa, one entry per CO2 cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanInput {
    pub mission_time: f64,
    pub cell_pressure: [f64; N_SCAN_CELLS],
}

impl Default for ScanInput {
    fn default() -> Self {
        ScanInput {
            mission_time: 0.0,
            cell_pressure: [0.0; N_SCAN_CELLS],
        }
    }
}

impl ScanInput {
    pub fn new(mission_time: f64, cell_pressure: [f64; N_SCAN_CELLS]) -> Self {
        ScanInput {
            mission_time,
            cell_pressure,
        }
    }
}

impl OptionalInput for ScanInput {
    fn is_valid(&self) -> bool {
        self.mission_time.is_finite()
            && self.mission_time >= 0.0
            && self
                .cell_pressure
                .iter()
                .all(|p| p.is_finite() && *p >= 0.0)
    }
}

impl fmt::Display for ScanInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ScanInput:")?;
        writeln!(f, "  mission time [d]    : {:.6}", self.mission_time)?;
        write!(f, "  cell pressure [hPa] :")?;
        for pressure in &self.cell_pressure {
            write!(f, " {pressure:.6}")?;
        }
        writeln!(f)
    }
}

impl AbsDiffEq for ScanInput {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        COMPARISON_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        let mut equal = self.mission_time.abs_diff_eq(&other.mission_time, epsilon);
        equal &= self
            .cell_pressure
            .as_slice()
            .abs_diff_eq(other.cell_pressure.as_slice(), epsilon);
        equal
    }
}

impl RelativeEq for ScanInput {
    fn default_max_relative() -> f64 {
        COMPARISON_EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        let mut equal = self
            .mission_time
            .relative_eq(&other.mission_time, epsilon, max_relative);
        equal &= self.cell_pressure.as_slice().relative_eq(
            other.cell_pressure.as_slice(),
            epsilon,
            max_relative,
        );
        equal
    }
}
