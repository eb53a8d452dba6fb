//! Intensity plot rendering.

use super::formatters::axis_labels;
use super::ThemeColors;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

/// Draw the intensity curve with the dotted incidence marker.
pub(super) fn draw_plot(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let cfg = &app.layout.plot;
    let [y_min, y_max] = cfg.y_bounds;

    let curve = app.pattern.points();
    let marker = app.pattern.marker_dots(y_min, y_max, cfg.marker_spacing);

    let datasets = vec![
        Dataset::default()
            .name("I")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(colors.curve))
            .data(&curve),
        Dataset::default()
            .name("θ0")
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(colors.marker))
            .data(&marker),
    ];

    let x_axis = Axis::default()
        .title("θ/π")
        .style(Style::default().fg(colors.text))
        .bounds(cfg.x_bounds)
        .labels(axis_labels(cfg.x_bounds, cfg.label_count));

    let y_axis = Axis::default()
        .title("I")
        .style(Style::default().fg(colors.text))
        .bounds(cfg.y_bounds)
        .labels(axis_labels(cfg.y_bounds, 3));

    let params = app.pattern.params;
    let title = format!(
        " Two-slit interference  d/λ={:.2}  θ0/π={:.3} ",
        params.d, params.theta0
    );

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .title(title)
                .title_style(
                    Style::default()
                        .fg(colors.heading)
                        .add_modifier(Modifier::BOLD),
                )
                .style(Style::default().bg(colors.bg)),
        )
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}
