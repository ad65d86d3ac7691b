//! Raw-mode terminal setup and restore.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use tracing::{debug, instrument, warn};

/// Puts the terminal back into cooked mode on the main screen.
///
/// Safe to call when raw mode was never enabled.
pub fn restore(writer: &mut impl Write, mouse: bool) -> io::Result<()> {
    disable_raw_mode()?;
    if mouse {
        execute!(writer, LeaveAlternateScreen, DisableMouseCapture, Show)
    } else {
        execute!(writer, LeaveAlternateScreen, Show)
    }
}

/// Restores the terminal when dropped.
///
/// Armed from construction, so a failure halfway through [`enter`](Self::enter),
/// an error from the game loop, or a panic that unwinds all leave the
/// terminal usable.
#[derive(Debug)]
pub struct TerminalGuard<W: Write> {
    writer: W,
    mouse: bool,
    armed: bool,
}

impl<W: Write> TerminalGuard<W> {
    /// Wraps `writer` without touching the terminal yet.
    pub fn new(writer: W, mouse: bool) -> Self {
        Self {
            writer,
            mouse,
            armed: true,
        }
    }

    /// Enables raw mode and switches to the alternate screen.
    #[instrument(skip(self), fields(mouse = self.mouse))]
    pub fn enter(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        if self.mouse {
            execute!(self.writer, EnterAlternateScreen, EnableMouseCapture)
        } else {
            execute!(self.writer, EnterAlternateScreen)
        }
    }

    /// Restores the terminal now and disarms the guard.
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.armed {
            return Ok(());
        }
        self.armed = false;
        debug!("Restoring terminal");
        restore(&mut self.writer, self.mouse)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Restores the terminal before the default panic message is printed.
///
/// Without this the message is written to the alternate screen and lost
/// when the guard leaves it.
pub fn install_panic_hook(mouse: bool) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore(&mut io::stdout(), mouse);
        default_hook(info);
    }));
}
