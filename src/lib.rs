//! Twoslit - an interactive terminal view of two-slit interference.
//!
//! Twoslit plots the far-field intensity of light passing two slits as a
//! function of angle. Two sliders set the slit spacing (in wavelengths) and
//! the incidence angle (in units of π); a reset button restores both.
//!
//! # Features
//!
//! - Closed-form intensity `I = cos²(π·d·(sin πθ − sin πθ0))` on a fixed grid
//! - Keyboard and mouse driven sliders
//! - Dotted marker at the incidence angle
//! - Gruvbox color themes
//! - CSV dump of the sample table
//!
//! # Example
//!
//! ```
//! use twoslit::physics::{AngleGrid, InterferencePattern, Parameters};
//!
//! let grid = AngleGrid::standard();
//! let pattern = InterferencePattern::compute(Parameters::default(), &grid);
//! assert_eq!(pattern.samples.len(), 1000);
//! assert!(pattern.samples.iter().all(|&i| (0.0..=1.0).contains(&i)));
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod controls;
pub mod error;
pub mod input;
pub mod physics;
pub mod ui;
pub mod util;

pub use error::{Result, TwoSlitError};
