//! Keyboard bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Something a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the event loop.
    Quit,
    /// Move keyboard focus to the other slider.
    CycleFocus,
    /// Step the focused slider.
    Step {
        /// Signed number of steps.
        steps: i32,
        /// Use the coarse step size.
        coarse: bool,
    },
    /// Restore both sliders.
    Reset,
    /// Switch color theme.
    CycleTheme,
    /// Show key help.
    Help,
}

/// Map a key event to its action, if it is bound.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let action = match (key.modifiers, key.code) {
        // Quit
        (KeyModifiers::NONE, KeyCode::Char('q'))
        | (KeyModifiers::NONE, KeyCode::Esc)
        | (KeyModifiers::CONTROL, KeyCode::Char('c')) => Action::Quit,

        // Focus
        (KeyModifiers::NONE, KeyCode::Tab)
        | (KeyModifiers::SHIFT, KeyCode::BackTab)
        | (KeyModifiers::NONE, KeyCode::Up)
        | (KeyModifiers::NONE, KeyCode::Down)
        | (KeyModifiers::NONE, KeyCode::Char('j'))
        | (KeyModifiers::NONE, KeyCode::Char('k')) => Action::CycleFocus,

        // Fine steps
        (KeyModifiers::NONE, KeyCode::Left) | (KeyModifiers::NONE, KeyCode::Char('h')) => {
            Action::Step {
                steps: -1,
                coarse: false,
            }
        },
        (KeyModifiers::NONE, KeyCode::Right) | (KeyModifiers::NONE, KeyCode::Char('l')) => {
            Action::Step {
                steps: 1,
                coarse: false,
            }
        },

        // Coarse steps
        (KeyModifiers::SHIFT, KeyCode::Left) | (KeyModifiers::SHIFT, KeyCode::Char('H')) => {
            Action::Step {
                steps: -1,
                coarse: true,
            }
        },
        (KeyModifiers::SHIFT, KeyCode::Right) | (KeyModifiers::SHIFT, KeyCode::Char('L')) => {
            Action::Step {
                steps: 1,
                coarse: true,
            }
        },

        // Features
        (KeyModifiers::NONE, KeyCode::Char('r')) => Action::Reset,
        (KeyModifiers::SHIFT, KeyCode::Char('T')) => Action::CycleTheme,
        (KeyModifiers::SHIFT, KeyCode::Char('?')) | (KeyModifiers::NONE, KeyCode::Char('?')) => {
            Action::Help
        },

        _ => return None,
    };

    Some(action)
}
