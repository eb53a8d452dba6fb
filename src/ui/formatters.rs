//! Shared formatting utilities for UI components.

/// Format axis label with smart precision.
pub fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val < 1e-9 {
        "0".to_string()
    } else if abs_val >= 1.0 {
        format!("{:.1}", val)
    } else {
        format!("{:.2}", val)
    }
}

/// Evenly spaced axis labels across `[min, max]`.
pub fn axis_labels(bounds: [f64; 2], count: usize) -> Vec<String> {
    let [min, max] = bounds;
    match count {
        0 => Vec::new(),
        1 => vec![format_axis_label(min)],
        n => (0..n)
            .map(|i| format_axis_label(min + (max - min) * i as f64 / (n - 1) as f64))
            .collect(),
    }
}

/// Format a slider value for its readout column.
pub fn format_slider_value(val: f64, step: f64) -> String {
    let decimals = if step >= 1.0 {
        0
    } else {
        (-step.log10()).round().max(0.0) as usize
    };
    format!("{:+.*}", decimals, val)
}
