//! Utility types.
//!
//! This module provides layout configuration, the sample table export and
//! terminal mode handling.

mod export;
mod layout_config;
mod terminal;

pub use export::write_samples;
pub use layout_config::{ControlLayoutConfig, LayoutConfig, PlotLayoutConfig};
pub use terminal::{run_all, TerminalGuard};
