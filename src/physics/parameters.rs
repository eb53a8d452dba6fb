//! Physical parameters of the two-slit setup.

use crate::error::{Result, TwoSlitError};
use std::ops::RangeInclusive;

/// Allowed slit-spacing ratio d/λ.
pub const D_RANGE: RangeInclusive<f64> = 0.0..=10.0;
/// Allowed incidence angle θ0/π.
pub const THETA0_RANGE: RangeInclusive<f64> = -0.5..=0.5;

/// Default slit-spacing ratio.
pub const DEFAULT_D: f64 = 5.0;
/// Default incidence angle.
pub const DEFAULT_THETA0: f64 = 0.0;

/// Slit spacing and incidence angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    /// Slit spacing in units of wavelength.
    pub d: f64,
    /// Incidence angle in units of π radians.
    pub theta0: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            d: DEFAULT_D,
            theta0: DEFAULT_THETA0,
        }
    }
}

impl Parameters {
    /// Create parameters, rejecting values outside the slider ranges.
    pub fn new(d: f64, theta0: f64) -> Result<Self> {
        check("d", d, &D_RANGE)?;
        check("theta0", theta0, &THETA0_RANGE)?;
        Ok(Self { d, theta0 })
    }
}

fn check(name: &str, value: f64, range: &RangeInclusive<f64>) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(TwoSlitError::invalid_parameter(
            name,
            value,
            *range.start(),
            *range.end(),
        ))
    }
}
