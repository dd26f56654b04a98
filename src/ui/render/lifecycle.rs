use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

use crate::error::UiError;

pub trait UiActions {
    /// Initializes the terminal for overlay rendering.
    ///
    /// # Errors
    ///
    /// Returns an error when terminal setup fails.
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, UiError>;
    fn cleanup();
}

pub struct Ui;

impl UiActions for Ui {
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, UiError> {
        enable_raw_mode().map_err(|source| UiError::Setup { source })?;
        if let Err(source) = execute!(io::stdout(), EnterAlternateScreen) {
            disable_raw_mode().ok();
            return Err(UiError::Setup { source });
        }

        let backend = CrosstermBackend::new(io::stdout());
        match Terminal::new(backend) {
            Ok(mut terminal) => {
                if let Err(source) = terminal.clear() {
                    Self::cleanup();
                    return Err(UiError::Setup { source });
                }
                Ok(terminal)
            }
            Err(source) => {
                Self::cleanup();
                Err(UiError::Setup { source })
            }
        }
    }

    fn cleanup() {
        disable_raw_mode().ok();
        execute!(io::stdout(), LeaveAlternateScreen).ok();
    }
}

/// Restores the terminal when dropped.
pub struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        Ui::cleanup();
    }
}
