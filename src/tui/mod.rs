//! # TUI Adapter
//!
//! The crossterm-specific layer. Reads key events, draws frames, and runs
//! the selection loop on top of the pure state machine in `core`.
//!
//! This is the only module that knows about crossterm.
//!
//! ## Redraw Strategy
//!
//! The selection is drawn inline below the cursor, not on an alternate
//! screen. Every redraw erases the previous frame and writes a new one, so
//! redrawing on a no-op would only add flicker. The loop therefore redraws
//! exactly when `update()` reports `Effect::Redraw`, and erases using the
//! viewport the previous frame was drawn with.

mod event;
mod render;
mod terminal;

use std::fmt;
use std::io::{self, Write};

use log::{debug, error, info, warn};

use crate::core::{Effect, SelectionState, SessionResult, Viewport, update};

pub use event::{CrosstermInput, InputSource, map_event};
pub use render::{HELP_TEXT, Renderer};
pub use terminal::Terminal;

/// Printed in place of the frame when the user cancels.
pub const CANCELLED_TEXT: &str = "cancelled";

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum SelectError {
    /// The terminal could not deliver the next input event.
    InputRead(io::Error),
    /// Writing a frame to the terminal failed.
    Output(io::Error),
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectError::InputRead(e) => write!(f, "error reading input: {e}"),
            SelectError::Output(e) => write!(f, "error writing to terminal: {e}"),
        }
    }
}

impl std::error::Error for SelectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SelectError::InputRead(e) | SelectError::Output(e) => Some(e),
        }
    }
}

// ============================================================================
// Controller
// ============================================================================

/// Runs selection sessions against an input source and an output surface.
///
/// The controller owns `out` for the duration of a session; nothing else
/// may write to it between a draw and the following erase.
pub struct SelectionController<I, W> {
    input: I,
    out: W,
    renderer: Renderer,
    window_size: usize,
}

impl<I: InputSource, W: Write> SelectionController<I, W> {
    pub fn new(input: I, out: W, renderer: Renderer, window_size: usize) -> Self {
        Self {
            input,
            out,
            renderer,
            window_size,
        }
    }

    /// Run one session to completion.
    ///
    /// An empty `options` list is cancelled straight away, without drawing or
    /// reading any input. A failed read ends the session immediately with
    /// `SelectError::InputRead`, leaving the last frame on screen.
    pub fn run<S: AsRef<str>>(
        &mut self,
        options: &[S],
        label: &str,
    ) -> Result<SessionResult, SelectError> {
        let Some(mut state) = SelectionState::new(options.len(), self.window_size) else {
            warn!("Selection '{}' has no options, cancelling", label);
            return Ok(SessionResult::Cancelled);
        };
        info!(
            "Selection '{}' started ({} options, window {})",
            label,
            options.len(),
            state.viewport().len()
        );

        let mut drawn = state.viewport();
        self.draw(options, &state, label)?;

        loop {
            let action = self.input.next_action().map_err(|e| {
                error!("Selection '{}' aborted, input read failed: {}", label, e);
                SelectError::InputRead(e)
            })?;

            match update(&mut state, action) {
                Effect::None => {}
                Effect::Redraw => {
                    debug!(
                        "Redraw: selected={} window={:?}",
                        state.selected(),
                        state.viewport()
                    );
                    self.erase(drawn)?;
                    drawn = state.viewport();
                    self.draw(options, &state, label)?;
                }
                Effect::Select(index) => {
                    self.erase(drawn)?;
                    self.print_line(&format!("{}> {}", label, options[index].as_ref()))?;
                    info!("Selection '{}' confirmed index {}", label, index);
                    return Ok(SessionResult::Selected(index));
                }
                Effect::Cancel => {
                    self.erase(drawn)?;
                    self.print_line(CANCELLED_TEXT)?;
                    info!("Selection '{}' cancelled", label);
                    return Ok(SessionResult::Cancelled);
                }
            }
        }
    }

    fn draw<S: AsRef<str>>(
        &mut self,
        options: &[S],
        state: &SelectionState,
        label: &str,
    ) -> Result<(), SelectError> {
        self.renderer
            .draw(&mut self.out, options, state.selected(), state.viewport(), label)
            .map_err(SelectError::Output)
    }

    fn erase(&mut self, drawn: Viewport) -> Result<(), SelectError> {
        self.renderer
            .erase(&mut self.out, drawn)
            .map_err(SelectError::Output)
    }

    fn print_line(&mut self, text: &str) -> Result<(), SelectError> {
        self.renderer
            .print_line(&mut self.out, text)
            .map_err(SelectError::Output)
    }
}

/// Let the user pick one of `options` on the real terminal.
///
/// Returns `SessionResult::Selected` with the zero-based index of the chosen
/// option, or `SessionResult::Cancelled` on Ctrl+C or an empty list.
pub fn run_selection<S: AsRef<str>>(
    terminal: &mut Terminal,
    options: &[S],
    label: &str,
) -> Result<SessionResult, SelectError> {
    let renderer = Renderer::new(terminal.text_width());
    let stdout = io::stdout();
    let mut controller = SelectionController::new(
        CrosstermInput,
        stdout.lock(),
        renderer,
        terminal.window_size(),
    );
    controller.run(options, label)
}
