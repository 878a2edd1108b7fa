//! # Selection State
//!
//! Core state for one selection session. Domain logic only, no terminal
//! types. Rendering state lives in the `tui` module.
//!
//! ```text
//! SelectionState
//! ├── len: usize            // number of options, fixed for the session
//! ├── selected: usize       // highlighted option, always < len
//! └── viewport: Viewport    // visible window, always contains `selected`
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::viewport::Viewport;

/// Default maximum number of options visible at once.
pub const DEFAULT_WINDOW_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    len: usize,
    pub(crate) selected: usize,
    pub(crate) viewport: Viewport,
}

impl SelectionState {
    /// Start a session over `len` options with the cursor on the first one.
    ///
    /// Returns `None` for an empty list, which has no valid index to hold.
    /// A `window_size` of zero is treated as one.
    pub fn new(len: usize, window_size: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self {
            len,
            selected: 0,
            viewport: Viewport::anchored(len, window_size.max(1)),
        })
    }

    pub fn option_count(&self) -> usize {
        self.len
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionResult {
    Selected(usize),
    Cancelled,
}

impl SessionResult {
    pub fn index(self) -> Option<usize> {
        match self {
            SessionResult::Selected(index) => Some(index),
            SessionResult::Cancelled => None,
        }
    }
}
