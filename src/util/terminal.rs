//! Terminal mode setup and restore.

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;

/// Raw mode, alternate screen and mouse capture, restored on drop.
///
/// Restoring runs every step even when an earlier one fails.
#[derive(Debug)]
pub struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    /// Enter raw mode, the alternate screen and mouse capture.
    ///
    /// If entering fails part way, whatever was already changed is undone.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self { restored: false };
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture) {
            let _ = guard.restore();
            return Err(e);
        }
        Ok(guard)
    }

    /// Undo everything `enter` changed. Later calls do nothing.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        let mut raw_mode = || disable_raw_mode();
        let mut screen = || execute!(io::stdout(), LeaveAlternateScreen);
        let mut mouse = || execute!(io::stdout(), DisableMouseCapture);
        let mut steps: [&mut dyn FnMut() -> io::Result<()>; 3] =
            [&mut raw_mode, &mut screen, &mut mouse];
        run_all(&mut steps)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::error!("Failed to restore terminal: {}", e);
        }
    }
}

/// Run every step, returning the first error after all have run.
pub fn run_all(steps: &mut [&mut dyn FnMut() -> io::Result<()>]) -> io::Result<()> {
    let mut first_err = None;
    for step in steps.iter_mut() {
        if let Err(e) = step() {
            first_err.get_or_insert(e);
        }
    }
    first_err.map_or(Ok(()), Err)
}
