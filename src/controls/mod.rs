//! Interactive controls: two parameter sliders and a reset button.

mod slider;

pub use slider::Slider;

use crate::physics::{Parameters, D_RANGE, THETA0_RANGE};

/// Which slider receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Slit-spacing slider.
    #[default]
    Spacing,
    /// Incidence-angle slider.
    Incidence,
}

impl Focus {
    /// Get the other slider.
    pub fn next(self) -> Self {
        match self {
            Focus::Spacing => Focus::Incidence,
            Focus::Incidence => Focus::Spacing,
        }
    }
}

/// Push button state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    /// Button caption.
    pub label: &'static str,
    /// Whether the mouse pointer is over the button.
    pub hovered: bool,
}

impl Button {
    /// Create a button with the given caption.
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            hovered: false,
        }
    }
}

/// The slider panel below the plot.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPanel {
    /// Slit-spacing ratio d/λ.
    pub spacing: Slider,
    /// Incidence angle θ0/π.
    pub incidence: Slider,
    /// Reset button.
    pub reset_button: Button,
    /// Focused slider.
    pub focus: Focus,
}

impl ControlPanel {
    /// Create the panel with sliders starting at `initial`.
    pub fn new(initial: Parameters) -> Self {
        Self {
            spacing: Slider::new("d/λ", D_RANGE, initial.d).with_steps(0.1, 1.0),
            incidence: Slider::new("θ0/π", THETA0_RANGE, initial.theta0).with_steps(0.01, 0.1),
            reset_button: Button::new("Reset"),
            focus: Focus::default(),
        }
    }

    /// Current slider values.
    pub fn parameters(&self) -> Parameters {
        Parameters {
            d: self.spacing.value(),
            theta0: self.incidence.value(),
        }
    }

    /// Slider that has keyboard focus.
    pub fn focused_mut(&mut self) -> &mut Slider {
        self.slider_mut(self.focus)
    }

    /// Slider for a focus target.
    pub fn slider_mut(&mut self, which: Focus) -> &mut Slider {
        match which {
            Focus::Spacing => &mut self.spacing,
            Focus::Incidence => &mut self.incidence,
        }
    }

    /// Move keyboard focus to the other slider.
    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new(Parameters::default())
    }
}
