//! Two-slit interference physics.
//!
//! This module contains the pure numerical side of Twoslit:
//! - The fixed angle grid the pattern is sampled on
//! - The far-field intensity function
//! - The pattern bundle handed to the plot

mod grid;
mod intensity;
mod parameters;

pub use grid::AngleGrid;
pub use intensity::{intensity, intensity_at, InterferencePattern};
pub use parameters::{Parameters, DEFAULT_D, DEFAULT_THETA0, D_RANGE, THETA0_RANGE};
