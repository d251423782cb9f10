use std::fmt;

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

use crate::constants::{COMPARISON_EPSILON, DEFAULT_FIELD_STRENGTH};
use crate::validation::OptionalInput;

/// Zeeman-splitting input for high-altitude microwave channels.
/// Units:
/// * `field_strength`: Gauss
/// * `cos_field_zenith`, `cos_field_azimuth`: direction cosines, in [-1, 1]
/// * `doppler_shift`: km/s, positive towards the sensor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZeemanInput {
    pub field_strength: f64,
    pub cos_field_zenith: f64,
    pub cos_field_azimuth: f64,
    pub doppler_shift: f64,
}

impl Default for ZeemanInput {
    fn default() -> Self {
        ZeemanInput {
            field_strength: DEFAULT_FIELD_STRENGTH,
            cos_field_zenith: 0.0,
            cos_field_azimuth: 0.0,
            doppler_shift: 0.0,
        }
    }
}

impl OptionalInput for ZeemanInput {
    fn is_valid(&self) -> bool {
        self.field_strength.is_finite()
            && self.field_strength >= 0.0
            && (-1.0..=1.0).contains(&self.cos_field_zenith)
            && (-1.0..=1.0).contains(&self.cos_field_azimuth)
            && self.doppler_shift.is_finite()
    }
}

impl fmt::Display for ZeemanInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ZeemanInput:")?;
        writeln!(f, "  field strength [G]  : {:.6}", self.field_strength)?;
        writeln!(f, "  cos field zenith    : {:.6}", self.cos_field_zenith)?;
        writeln!(f, "  cos field azimuth   : {:.6}", self.cos_field_azimuth)?;
        writeln!(f, "  doppler shift [km/s]: {:.6}", self.doppler_shift)
    }
}

impl AbsDiffEq for ZeemanInput {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        COMPARISON_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        let mut equal = self
            .field_strength
            .abs_diff_eq(&other.field_strength, epsilon);
        equal &= self
            .cos_field_zenith
            .abs_diff_eq(&other.cos_field_zenith, epsilon);
        equal &= self
            .cos_field_azimuth
            .abs_diff_eq(&other.cos_field_azimuth, epsilon);
        equal &= self.doppler_shift.abs_diff_eq(&other.doppler_shift, epsilon);
        equal
    }
}

impl RelativeEq for ZeemanInput {
    fn default_max_relative() -> f64 {
        COMPARISON_EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        let mut equal =
            self.field_strength
                .relative_eq(&other.field_strength, epsilon, max_relative);
        equal &= self
            .cos_field_zenith
            .relative_eq(&other.cos_field_zenith, epsilon, max_relative);
        equal &= self
            .cos_field_azimuth
            .relative_eq(&other.cos_field_azimuth, epsilon, max_relative);
        equal &= self
            .doppler_shift
            .relative_eq(&other.doppler_shift, epsilon, max_relative);
        equal
    }
}
