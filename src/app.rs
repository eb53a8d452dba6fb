//! Application state and logic.

use ratatui::layout::Rect;

use crate::controls::{ControlPanel, Focus};
use crate::input::Action;
use crate::physics::{AngleGrid, InterferencePattern, Parameters};
use crate::util::LayoutConfig;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Screen areas of the clickable controls, recorded on each draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitAreas {
    /// Track of the slit-spacing slider.
    pub spacing: Rect,
    /// Track of the incidence-angle slider.
    pub incidence: Rect,
    /// Reset button.
    pub reset: Rect,
}

impl HitAreas {
    fn slider_at(&self, column: u16, row: u16) -> Option<Focus> {
        if contains(self.spacing, column, row) {
            Some(Focus::Spacing)
        } else if contains(self.incidence, column, row) {
            Some(Focus::Incidence)
        } else {
            None
        }
    }

    fn track(&self, which: Focus) -> Rect {
        match which {
            Focus::Spacing => self.spacing,
            Focus::Incidence => self.incidence,
        }
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    area.width > 0
        && area.height > 0
        && column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

/// Position of `column` along a track, 0.0 at its left edge and 1.0 at its right.
fn track_fraction(track: Rect, column: u16) -> f64 {
    if track.width <= 1 {
        return 0.0;
    }
    let offset = column.saturating_sub(track.x).min(track.width - 1);
    f64::from(offset) / f64::from(track.width - 1)
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Sliders and reset button.
    pub controls: ControlPanel,
    /// Angle samples shared by every recompute.
    pub grid: AngleGrid,
    /// Curve for the current slider values.
    pub pattern: InterferencePattern,
    /// Layout constants.
    pub layout: LayoutConfig,
    /// Clickable areas from the last draw.
    pub hit_areas: HitAreas,
    /// Slider being dragged with the mouse.
    pub dragging: Option<Focus>,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Number of recomputes since start.
    pub updates: u64,
}

impl App {
    /// Create a new application instance with sliders at `initial`.
    ///
    /// The curve is computed from the sliders after they clamp `initial`.
    pub fn new(initial: Parameters) -> Self {
        let controls = ControlPanel::new(initial);
        let params = controls.parameters();
        let grid = AngleGrid::standard();
        let pattern = InterferencePattern::compute(params, &grid);
        tracing::info!(
            "Initial pattern: d={} theta0={} ({} samples)",
            params.d,
            params.theta0,
            grid.len()
        );

        Self {
            controls,
            grid,
            pattern,
            layout: LayoutConfig::default(),
            hit_areas: HitAreas::default(),
            dragging: None,
            status: "Ready".to_string(),
            theme: Theme::GruvboxDark,
            updates: 0,
        }
    }

    /// Current slider values.
    pub fn parameters(&self) -> Parameters {
        self.controls.parameters()
    }

    /// Recompute the curve and marker from the slider values.
    ///
    /// Runs synchronously on every slider change; the next loop iteration
    /// redraws.
    pub fn on_parameters_changed(&mut self) {
        let params = self.controls.parameters();
        self.pattern = InterferencePattern::compute(params, &self.grid);
        self.updates += 1;
        self.status = format!(
            "d/λ = {:.2}  θ0/π = {:.3}  bright fringes: {}",
            params.d,
            params.theta0,
            self.pattern.peak_count()
        );
        tracing::debug!(
            "Recomputed pattern #{}: d={} theta0={}",
            self.updates,
            params.d,
            params.theta0
        );
    }

    /// Restore both sliders to their initial values.
    pub fn reset(&mut self) {
        tracing::debug!("Reset requested");
        if self.controls.spacing.reset() {
            self.on_parameters_changed();
        }
        if self.controls.incidence.reset() {
            self.on_parameters_changed();
        }
        self.dragging = None;
        self.status = "Reset".to_string();
    }

    /// Step the focused slider by `steps` fine or coarse steps.
    pub fn step_focused(&mut self, steps: i32, coarse: bool) {
        let slider = self.controls.focused_mut();
        let changed = if coarse {
            slider.nudge_coarse(steps)
        } else {
            slider.nudge(steps)
        };
        if changed {
            self.on_parameters_changed();
        }
    }

    /// Move keyboard focus to the other slider.
    pub fn cycle_focus(&mut self) {
        self.controls.cycle_focus();
        let label = match self.controls.focus {
            Focus::Spacing => self.controls.spacing.label,
            Focus::Incidence => self.controls.incidence.label,
        };
        self.status = format!("Focus: {}", label);
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Show key help in the status bar.
    pub fn show_help(&mut self) {
        self.status =
            "Help: q=quit, Tab/jk=focus, hl=step, HL=coarse, r=reset, T=theme, mouse=drag sliders"
                .to_string();
    }

    /// Perform a key action. Returns `false` when the app should quit.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return false,
            Action::CycleFocus => self.cycle_focus(),
            Action::Step { steps, coarse } => self.step_focused(steps, coarse),
            Action::Reset => self.reset(),
            Action::CycleTheme => self.cycle_theme(),
            Action::Help => self.show_help(),
        }
        true
    }

    /// Left mouse button pressed at a cell.
    pub fn mouse_down(&mut self, column: u16, row: u16) {
        if contains(self.hit_areas.reset, column, row) {
            self.reset();
            return;
        }
        if let Some(which) = self.hit_areas.slider_at(column, row) {
            self.controls.focus = which;
            self.dragging = Some(which);
            self.set_from_column(which, column);
        }
    }

    /// Mouse moved with the left button held.
    pub fn mouse_drag(&mut self, column: u16, _row: u16) {
        if let Some(which) = self.dragging {
            self.set_from_column(which, column);
        }
    }

    /// Left mouse button released.
    pub fn mouse_up(&mut self) {
        self.dragging = None;
    }

    /// Mouse moved without a button held.
    pub fn mouse_move(&mut self, column: u16, row: u16) {
        self.controls.reset_button.hovered = contains(self.hit_areas.reset, column, row);
    }

    fn set_from_column(&mut self, which: Focus, column: u16) {
        let fraction = track_fraction(self.hit_areas.track(which), column);
        if self.controls.slider_mut(which).set_fraction(fraction) {
            self.on_parameters_changed();
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Parameters::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with_areas() -> App {
        let mut app = App::default();
        app.hit_areas = HitAreas {
            spacing: Rect::new(10, 20, 51, 1),
            incidence: Rect::new(10, 22, 51, 1),
            reset: Rect::new(70, 24, 9, 1),
        };
        app
    }

    #[test]
    fn starts_with_default_pattern() {
        let app = App::default();
        assert_eq!(app.parameters(), Parameters::default());
        assert_eq!(app.pattern.samples.len(), 1000);
        assert_eq!(app.updates, 0);
    }

    #[test]
    fn stepping_recomputes_pattern() {
        let mut app = App::default();
        let before = app.pattern.clone();
        app.step_focused(1, false);
        assert_eq!(app.updates, 1);
        assert!((app.pattern.params.d - 5.1).abs() < 1e-12);
        assert_ne!(app.pattern.samples, before.samples);
    }

    #[test]
    fn stepping_past_bound_does_not_recompute() {
        let mut app = App::default();
        app.step_focused(10, true);
        let updates = app.updates;
        app.step_focused(1, true);
        assert_eq!(app.updates, updates);
        assert_eq!(app.parameters().d, 10.0);
    }

    #[test]
    fn reset_reproduces_initial_pattern_exactly() {
        let mut app = App::default();
        let initial = app.pattern.clone();

        app.step_focused(-3, true);
        app.cycle_focus();
        app.step_focused(7, false);
        assert_ne!(app.pattern, initial);

        app.reset();
        assert_eq!(app.parameters().d, 5.0);
        assert_eq!(app.parameters().theta0, 0.0);
        assert_eq!(app.pattern, initial);
    }

    #[test]
    fn reset_fires_update_once_per_changed_slider() {
        let mut app = App::default();
        app.step_focused(1, false);
        let updates = app.updates;
        app.reset();
        assert_eq!(app.updates, updates + 1);

        app.reset();
        assert_eq!(app.updates, updates + 1);
    }

    #[test]
    fn reset_targets_custom_initial_values() {
        let initial = Parameters::new(2.0, -0.2).unwrap();
        let mut app = App::new(initial);
        app.step_focused(4, true);
        app.reset();
        assert_eq!(app.parameters(), initial);
    }

    #[test]
    fn out_of_range_initial_values_are_clamped_before_plotting() {
        let mut app = App::new(Parameters {
            d: 20.0,
            theta0: f64::NAN,
        });
        assert_eq!(app.parameters(), Parameters { d: 10.0, theta0: -0.5 });
        assert_eq!(app.pattern.params, app.parameters());

        app.step_focused(-2, true);
        app.reset();
        assert_eq!(app.pattern.params, app.parameters());
        assert_eq!(app.pattern.params.d, 10.0);
    }

    #[test]
    fn theme_cycles_and_reports_name() {
        assert_eq!(Theme::GruvboxDark.next(), Theme::GruvboxLight);
        assert_eq!(Theme::GruvboxLight.next(), Theme::GruvboxDark);

        let mut app = App::default();
        app.cycle_theme();
        assert_eq!(app.theme, Theme::GruvboxLight);
        assert_eq!(app.status, "Theme: Gruvbox Light");
        app.cycle_theme();
        assert_eq!(app.status, "Theme: Gruvbox Dark");
    }

    #[test]
    fn actions_drive_the_app() {
        let mut app = App::default();
        assert!(app.apply(Action::Step {
            steps: 1,
            coarse: true
        }));
        assert!((app.parameters().d - 6.0).abs() < 1e-12);

        assert!(app.apply(Action::CycleFocus));
        assert!(app.apply(Action::Step {
            steps: -1,
            coarse: false
        }));
        assert!((app.parameters().theta0 + 0.01).abs() < 1e-12);

        assert!(app.apply(Action::Reset));
        assert_eq!(app.parameters(), Parameters::default());

        assert!(app.apply(Action::CycleTheme));
        assert_eq!(app.theme, Theme::GruvboxLight);
        assert!(!app.apply(Action::Quit));
    }

    #[test]
    fn focus_and_help_update_status() {
        let mut app = App::default();
        app.cycle_focus();
        assert_eq!(app.status, "Focus: θ0/π");
        app.show_help();
        assert!(app.status.starts_with("Help:"));
    }

    #[test]
    fn click_on_track_sets_slider() {
        let mut app = app_with_areas();
        app.mouse_down(10, 20);
        assert_eq!(app.parameters().d, 0.0);
        app.mouse_down(60, 20);
        assert_eq!(app.parameters().d, 10.0);

        app.mouse_down(35, 22);
        assert_eq!(app.controls.focus, Focus::Incidence);
        assert!(app.parameters().theta0.abs() < 1e-12);
        assert_eq!(app.pattern.params, app.parameters());
    }

    #[test]
    fn drag_follows_pointer_until_release() {
        let mut app = app_with_areas();
        app.mouse_down(35, 22);
        app.mouse_drag(60, 5);
        assert_eq!(app.parameters().theta0, 0.5);
        app.mouse_drag(200, 22);
        assert_eq!(app.parameters().theta0, 0.5);

        app.mouse_up();
        app.mouse_drag(10, 22);
        assert_eq!(app.parameters().theta0, 0.5);
    }

    #[test]
    fn click_on_reset_button_resets() {
        let mut app = app_with_areas();
        app.mouse_down(60, 20);
        app.mouse_down(10, 22);
        app.mouse_down(74, 24);
        assert_eq!(app.parameters(), Parameters::default());
        assert_eq!(app.pattern, App::default().pattern);
    }

    #[test]
    fn hover_tracks_reset_button() {
        let mut app = app_with_areas();
        app.mouse_move(71, 24);
        assert!(app.controls.reset_button.hovered);
        app.mouse_move(0, 0);
        assert!(!app.controls.reset_button.hovered);
    }

    #[test]
    fn clicks_outside_controls_are_ignored() {
        let mut app = app_with_areas();
        app.mouse_down(0, 0);
        assert_eq!(app.updates, 0);
        assert_eq!(app.dragging, None);
    }
}
