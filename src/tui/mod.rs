//! Terminal front end.

pub mod components;
pub mod interaction;
pub mod theme;
pub mod ui;

use std::io::{self, stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

use crate::error::{PickerError, Result};

/// Switch the terminal into raw mode on the alternate screen.
pub fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    let entered = execute!(stdout(), EnterAlternateScreen, EnableMouseCapture);
    leave_raw_mode_on_failure(entered, disable_raw_mode)
}

/// A half-finished setup must not leave the shell in raw mode.
fn leave_raw_mode_on_failure(
    entered: io::Result<()>,
    disable: impl FnOnce() -> io::Result<()>,
) -> Result<()> {
    entered.map_err(|e| {
        let _ = disable();
        PickerError::Terminal(format!("failed to enter alternate screen: {}", e))
    })
}

/// Undo [`setup_terminal`]. Safe to call more than once.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen)
        .map_err(|e| PickerError::Terminal(format!("failed to leave alternate screen: {}", e)))
}
