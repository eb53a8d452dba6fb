//! User interface rendering.

mod controls;
mod formatters;
mod keymap_bar;
mod plot;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use formatters::{axis_labels, format_axis_label, format_slider_value};
pub use keymap_bar::{draw_keymap, KEYMAP_TEXT};
pub use status_bar::draw_status;
pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);
    let panel_height = app.layout.controls.panel_height();

    // Plot, control panel, status bar, key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(panel_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    plot::draw_plot(f, app, chunks[0], &colors);
    controls::draw_controls(f, app, chunks[1], &colors);
    draw_status(f, chunks[2], &app.status, &colors);
    draw_keymap(f, chunks[3], &colors);
}
