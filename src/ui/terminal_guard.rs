//! Raw-mode and alternate-screen handling for the interactive wizard.

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Holds the terminal in wizard mode until restored or dropped.
///
/// The normal exit path calls [`TerminalGuard::restore`] so failures surface
/// as errors. Early `?` returns fall back to a best-effort restore in `Drop`,
/// and [`install_panic_hook`] covers panics.
pub struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen with the cursor hidden
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen, Hide)
            .context("Failed to enter alternate screen")?;
        Ok(Self { restored: false })
    }

    /// Leave wizard mode, reporting the first failure. Calling it twice is a no-op.
    pub fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(io::stdout(), LeaveAlternateScreen, Show)
            .context("Failed to leave alternate screen")?;
        io::stdout().flush().context("Failed to flush stdout")
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if !self.restored {
            self.restored = true;
            restore_best_effort();
        }
    }
}

/// Restore the shell ignoring errors; safe to call from a panic hook
fn restore_best_effort() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
    let _ = io::stdout().flush();
}

/// Restore the terminal before the default hook prints the panic message
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_best_effort();
        previous(info);
    }));
}
