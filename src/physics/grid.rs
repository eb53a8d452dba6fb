//! Angle sample grid.

use crate::error::{Result, TwoSlitError};
use ndarray::Array1;

/// Evenly spaced angles θ/π over a half-open interval.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleGrid {
    start: f64,
    step: f64,
    samples: Array1<f64>,
}

impl AngleGrid {
    /// First sample of the standard grid.
    pub const START: f64 = -0.5;
    /// Exclusive end of the standard grid.
    pub const STOP: f64 = 0.5;
    /// Spacing of the standard grid.
    pub const STEP: f64 = 0.001;
    /// Largest number of samples a grid may hold.
    pub const MAX_SAMPLES: usize = 10_000_000;

    /// Build a grid covering `[start, stop)` with the given spacing.
    ///
    /// Each sample is computed from its index, so long grids carry no
    /// accumulated rounding from repeated addition.
    pub fn new(start: f64, stop: f64, step: f64) -> Result<Self> {
        let valid = start.is_finite() && stop.is_finite() && step.is_finite();
        if !valid || step <= 0.0 || stop <= start {
            return Err(TwoSlitError::invalid_grid(start, stop, step));
        }

        let quotient = (stop - start) / step;
        if !quotient.is_finite() || quotient > Self::MAX_SAMPLES as f64 {
            return Err(TwoSlitError::invalid_grid(start, stop, step));
        }

        Ok(Self::build(start, step, sample_count(quotient)))
    }

    /// The [-0.5, 0.5) grid with spacing 0.001.
    pub fn standard() -> Self {
        let quotient = (Self::STOP - Self::START) / Self::STEP;
        Self::build(Self::START, Self::STEP, sample_count(quotient))
    }

    fn build(start: f64, step: f64, len: usize) -> Self {
        Self {
            start,
            step,
            samples: Array1::from_shape_fn(len, |i| start + i as f64 * step),
        }
    }

    /// Sample values.
    pub fn samples(&self) -> &Array1<f64> {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the grid has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// First sample.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Spacing between samples.
    pub fn step(&self) -> f64 {
        self.step
    }
}

/// `ceil(quotient)` for a validated, positive quotient, at least 1.
///
/// The relative tolerance keeps quotients like 1.0 / 0.001 that land a few
/// ulps above an integer from gaining an extra sample.
fn sample_count(quotient: f64) -> usize {
    let len = (quotient - quotient * f64::EPSILON * 4.0).ceil();
    len.max(1.0) as usize
}

impl Default for AngleGrid {
    fn default() -> Self {
        Self::standard()
    }
}
