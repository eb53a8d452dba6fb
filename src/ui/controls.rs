//! Slider panel and reset button rendering.

use super::formatters::format_slider_value;
use super::ThemeColors;
use crate::app::App;
use crate::controls::{Button, Focus, Slider};
use crate::util::ControlLayoutConfig;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Draw both sliders and the reset button, recording their hit areas.
pub(super) fn draw_controls(f: &mut Frame<'_>, app: &mut App, area: Rect, colors: &ThemeColors) {
    let cfg = app.layout.controls.clone();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(cfg.slider_height),
            Constraint::Length(cfg.slider_height),
            Constraint::Length(cfg.button_height),
        ])
        .split(area);

    let focus = app.controls.focus;
    app.hit_areas.spacing = draw_slider(
        f,
        &app.controls.spacing,
        focus == Focus::Spacing,
        rows[0],
        &cfg,
        colors,
    );
    app.hit_areas.incidence = draw_slider(
        f,
        &app.controls.incidence,
        focus == Focus::Incidence,
        rows[1],
        &cfg,
        colors,
    );
    app.hit_areas.reset = draw_button(f, &app.controls.reset_button, rows[2], &cfg, colors);
}

/// Draw one slider row and return the track area.
fn draw_slider(
    f: &mut Frame<'_>,
    slider: &Slider,
    focused: bool,
    area: Rect,
    cfg: &ControlLayoutConfig,
    colors: &ThemeColors,
) -> Rect {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(cfg.label_width),
            Constraint::Min(4),
            Constraint::Length(cfg.readout_width),
        ])
        .split(area);

    let label_style = if focused {
        Style::default()
            .fg(colors.heading)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.label)
    };
    let label = Paragraph::new(slider.label)
        .style(label_style)
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::NONE).title(" "));
    f.render_widget(label, cols[0]);

    let border = if focused {
        colors.focus_border
    } else {
        colors.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let track = block.inner(cols[1]);

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Style::default().fg(colors.track_fill).bg(colors.track_bg))
        .ratio(slider.fraction())
        .label(Span::raw(""));
    f.render_widget(gauge, cols[1]);

    let readout = Paragraph::new(format_slider_value(slider.value(), slider.step()))
        .style(Style::default().fg(colors.value))
        .block(Block::default().borders(Borders::NONE).title(" "));
    f.render_widget(readout, cols[2]);

    track
}

/// Draw the button at the right edge of `area` and return its face.
fn draw_button(
    f: &mut Frame<'_>,
    button: &Button,
    area: Rect,
    cfg: &ControlLayoutConfig,
    colors: &ThemeColors,
) -> Rect {
    let width = cfg.button_width.min(area.width);
    let rect = Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height: area.height,
    };

    let face = if button.hovered {
        colors.button_hover
    } else {
        colors.button_bg
    };
    let widget = Paragraph::new(button.label)
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors.text).bg(face))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border)),
        );
    f.render_widget(widget, rect);

    rect
}
