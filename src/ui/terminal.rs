//! Raw-mode terminal session

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// Owns the terminal while the TUI runs
///
/// Raw mode and the alternate screen are restored when the session is
/// dropped, including on early returns and panics that unwind.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    pub fn start() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        or_restore(execute!(stdout, EnterAlternateScreen), || {
            let _ = disable_raw_mode();
        })?;
        let terminal = or_restore(Terminal::new(CrosstermBackend::new(stdout)), || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
        })?;
        Ok(TerminalSession { terminal })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

/// Run `restore` before handing back a failed setup step
fn or_restore<T>(result: io::Result<T>, restore: impl FnOnce()) -> io::Result<T> {
    if let Err(err) = &result {
        tracing::warn!(error = %err, "terminal setup failed, restoring");
        restore();
    }
    result
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        // Restore terminal
        if let Err(err) = disable_raw_mode() {
            tracing::warn!(error = %err, "failed to disable raw mode");
        }
        if let Err(err) = execute!(self.terminal.backend_mut(), LeaveAlternateScreen) {
            tracing::warn!(error = %err, "failed to leave alternate screen");
        }
        let _ = self.terminal.show_cursor();
    }
}
