//! Layout configuration constants for the plot and control panel.

/// Configuration for the intensity plot.
#[derive(Debug, Clone)]
pub struct PlotLayoutConfig {
    /// X-axis bounds (θ/π).
    pub x_bounds: [f64; 2],
    /// Y-axis bounds (intensity), with headroom above the maximum of 1.
    pub y_bounds: [f64; 2],
    /// Vertical spacing between dots of the incidence marker.
    pub marker_spacing: f64,
    /// Number of labels along each axis.
    pub label_count: usize,
}

impl Default for PlotLayoutConfig {
    fn default() -> Self {
        Self {
            x_bounds: [-0.5, 0.5],
            y_bounds: [0.0, 1.1],
            marker_spacing: 0.05,
            label_count: 5,
        }
    }
}

/// Configuration for the slider panel below the plot.
#[derive(Debug, Clone)]
pub struct ControlLayoutConfig {
    /// Height of each slider row, including its border.
    pub slider_height: u16,
    /// Width of the slider label column.
    pub label_width: u16,
    /// Width of the value readout column.
    pub readout_width: u16,
    /// Width of the reset button.
    pub button_width: u16,
    /// Height of the reset button row.
    pub button_height: u16,
}

impl Default for ControlLayoutConfig {
    fn default() -> Self {
        Self {
            slider_height: 3,
            label_width: 8,
            readout_width: 9,
            button_width: 11,
            button_height: 3,
        }
    }
}

impl ControlLayoutConfig {
    /// Total height of the panel: two sliders and the button row.
    pub fn panel_height(&self) -> u16 {
        self.slider_height * 2 + self.button_height
    }
}

/// Combined layout configuration.
#[derive(Debug, Clone, Default)]
pub struct LayoutConfig {
    /// Configuration for the plot.
    pub plot: PlotLayoutConfig,
    /// Configuration for the control panel.
    pub controls: ControlLayoutConfig,
}
