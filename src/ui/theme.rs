//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Heading text color.
    pub heading: Color,
    /// Label text color.
    pub label: Color,
    /// Value text color.
    pub value: Color,
    /// Border color.
    pub border: Color,
    /// Border color of the focused slider.
    pub focus_border: Color,
    /// Intensity curve color.
    pub curve: Color,
    /// Incidence marker color.
    pub marker: Color,
    /// Filled part of a slider track.
    pub track_fill: Color,
    /// Empty part of a slider track.
    pub track_bg: Color,
    /// Button face color.
    pub button_bg: Color,
    /// Button face color under the mouse pointer.
    pub button_hover: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(251, 184, 108),
                label: Color::Rgb(184, 187, 38),
                value: Color::Rgb(142, 192, 124),
                border: Color::Rgb(102, 92, 84),
                focus_border: Color::Rgb(251, 184, 108),
                curve: Color::Rgb(251, 73, 52),
                marker: Color::Rgb(131, 165, 152),
                track_fill: Color::Rgb(250, 189, 47),
                track_bg: Color::Rgb(60, 56, 54),
                button_bg: Color::Rgb(80, 73, 69),
                button_hover: Color::Rgb(124, 111, 100),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(175, 58, 3),
                label: Color::Rgb(121, 116, 14),
                value: Color::Rgb(102, 123, 3),
                border: Color::Rgb(213, 196, 161),
                focus_border: Color::Rgb(175, 58, 3),
                curve: Color::Rgb(157, 0, 6),
                marker: Color::Rgb(7, 102, 120),
                track_fill: Color::Rgb(181, 118, 20),
                track_bg: Color::Rgb(250, 250, 210),
                button_bg: Color::Rgb(235, 219, 178),
                button_hover: Color::Rgb(249, 249, 249),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
            },
        }
    }
}
