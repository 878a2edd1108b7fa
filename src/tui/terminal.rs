//! Process-wide terminal setup.
//!
//! Raw mode is what lets Ctrl+C reach the selection loop as an ordinary key
//! event instead of interrupting the process. `Terminal` switches it on once
//! when constructed and restores the previous mode when dropped, so the
//! binary creates a single `Terminal` at startup and lends it to every
//! session it runs.

use std::io::{self, stdout};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode};
use log::{info, warn};

use crate::core::config::ResolvedConfig;

pub struct Terminal {
    window_size: usize,
    truncate: bool,
}

impl Terminal {
    pub fn init(config: &ResolvedConfig) -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(e) = execute!(stdout(), Hide) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        info!(
            "Terminal ready (raw mode, window_size={}, truncate={})",
            config.window_size, config.truncate
        );
        Ok(Self {
            window_size: config.window_size,
            truncate: config.truncate,
        })
    }

    /// Maximum number of options visible at once.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Column budget for one frame line, if clipping is enabled and the
    /// terminal size can be queried.
    pub fn text_width(&self) -> Option<usize> {
        if !self.truncate {
            return None;
        }
        match terminal::size() {
            Ok((cols, _rows)) if cols > 0 => Some(cols as usize),
            Ok(_) => None,
            Err(e) => {
                warn!("Could not query terminal size, not clipping: {}", e);
                None
            }
        }
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
        if let Err(e) = disable_raw_mode() {
            warn!("Failed to leave raw mode: {}", e);
        }
    }
}
