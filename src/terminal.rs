use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::tty::IsTty;
use std::io;

/// Keeps the terminal in raw mode (no echo, no line buffering) while alive
/// and restores the previous mode when dropped, including during unwinding.
///
/// When stdin is not a terminal the guard is inert, so piped input still
/// plays.
#[derive(Debug)]
pub struct RawMode {
    enabled: bool,
}

impl RawMode {
    pub fn acquire() -> io::Result<Self> {
        if !io::stdin().is_tty() {
            tracing::debug!("stdin is not a terminal, leaving terminal mode untouched");
            return Ok(Self { enabled: false });
        }
        enable_raw_mode()?;
        tracing::debug!("raw mode enabled");
        Ok(Self { enabled: true })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if !self.enabled {
            return;
        }
        if let Err(err) = disable_raw_mode() {
            tracing::error!(%err, "failed to restore terminal mode");
        }
    }
}
