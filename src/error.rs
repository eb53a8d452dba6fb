//! Error types for Twoslit.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for Twoslit operations.
pub type Result<T> = std::result::Result<T, TwoSlitError>;

/// Errors that can occur in Twoslit.
#[derive(Debug, Error)]
pub enum TwoSlitError {
    /// A parameter is outside its allowed range.
    #[error("Invalid value {value} for {name}: must be within [{min}, {max}]")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Rejected value.
        value: f64,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// Angle grid cannot be constructed.
    #[error("Invalid angle grid: start={start}, stop={stop}, step={step}")]
    InvalidGrid {
        /// First sample.
        start: f64,
        /// Exclusive upper bound.
        stop: f64,
        /// Spacing between samples.
        step: f64,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TwoSlitError {
    /// Create an InvalidParameter error.
    pub fn invalid_parameter(name: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            value,
            min,
            max,
        }
    }

    /// Create an InvalidGrid error.
    pub fn invalid_grid(start: f64, stop: f64, step: f64) -> Self {
        Self::InvalidGrid { start, stop, step }
    }
}
