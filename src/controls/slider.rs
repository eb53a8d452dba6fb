//! Bounded slider state.

use std::ops::RangeInclusive;

/// A horizontal slider over a closed range.
///
/// The value is always within `[min, max]`. Every mutator reports whether
/// the value actually changed so callers can fire their change handler
/// only when needed.
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    /// Label drawn next to the track.
    pub label: &'static str,
    min: f64,
    max: f64,
    initial: f64,
    value: f64,
    step: f64,
    coarse_step: f64,
}

impl Slider {
    /// Create a slider over `range` starting at `initial` (clamped into range).
    pub fn new(label: &'static str, range: RangeInclusive<f64>, initial: f64) -> Self {
        let (min, max) = (*range.start(), *range.end());
        let span = max - min;
        let initial = if initial.is_finite() {
            initial.clamp(min, max)
        } else {
            min
        };
        Self {
            label,
            min,
            max,
            initial,
            value: initial,
            step: span / 100.0,
            coarse_step: span / 10.0,
        }
    }

    /// Override the fine and coarse step sizes.
    pub fn with_steps(mut self, step: f64, coarse_step: f64) -> Self {
        self.step = step;
        self.coarse_step = coarse_step;
        self
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value restored by [`Slider::reset`].
    pub fn initial(&self) -> f64 {
        self.initial
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Fine step size.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Set the value, clamped into range. Non-finite input is ignored.
    pub fn set(&mut self, value: f64) -> bool {
        if !value.is_finite() {
            tracing::warn!("{}: ignoring non-finite value {}", self.label, value);
            return false;
        }
        let clamped = value.clamp(self.min, self.max);
        if clamped == self.value {
            return false;
        }
        self.value = clamped;
        true
    }

    /// Move by `steps` fine steps.
    pub fn nudge(&mut self, steps: i32) -> bool {
        self.set(snap(self.value + f64::from(steps) * self.step, self.step))
    }

    /// Move by `steps` coarse steps.
    pub fn nudge_coarse(&mut self, steps: i32) -> bool {
        self.set(snap(self.value + f64::from(steps) * self.coarse_step, self.step))
    }

    /// Position along the track, 0.0 at `min` and 1.0 at `max`.
    pub fn fraction(&self) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            0.0
        } else {
            ((self.value - self.min) / span).clamp(0.0, 1.0)
        }
    }

    /// Set the value from a position along the track.
    pub fn set_fraction(&mut self, fraction: f64) -> bool {
        let fraction = fraction.clamp(0.0, 1.0);
        self.set(self.min + fraction * (self.max - self.min))
    }

    /// Restore the initial value.
    pub fn reset(&mut self) -> bool {
        self.set(self.initial)
    }
}

/// Round to the nearest multiple of `step`, hiding accumulated drift.
fn snap(value: f64, step: f64) -> f64 {
    if step > 0.0 {
        (value / step).round() * step
    } else {
        value
    }
}
