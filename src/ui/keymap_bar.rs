//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Key bindings shown at the bottom of the screen.
pub const KEYMAP_TEXT: &str =
    "q:quit | Tab/jk:focus | hl/←→:step | HL:coarse | r:reset | T:theme | ?:help | mouse:drag";

/// Draw the keymap help bar.
pub fn draw_keymap(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let paragraph =
        Paragraph::new(KEYMAP_TEXT).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
