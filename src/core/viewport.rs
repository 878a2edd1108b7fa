//! The visible window over the option list.
//!
//! A `Viewport` is a half-open range `[top, bottom)` into the option list.
//! It only ever moves by one row at a time and never past either end of
//! the list, so its height is fixed for the whole session.

/// Lines every frame draws in addition to the visible options
/// (the label line and the help line).
pub const FRAME_CHROME_LINES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub top: usize,
    pub bottom: usize,
}

impl Viewport {
    /// Window anchored at the top of a list of `len` items, at most
    /// `max_size` rows tall.
    pub fn anchored(len: usize, max_size: usize) -> Self {
        Self {
            top: 0,
            bottom: len.min(max_size),
        }
    }

    /// Number of visible options.
    pub fn len(&self) -> usize {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.top == self.bottom
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.top..self.bottom).contains(&index)
    }

    /// Total terminal lines a frame drawn for this window occupies.
    ///
    /// Both drawing and erasing derive their line count from here.
    pub fn frame_height(&self) -> usize {
        self.len() + FRAME_CHROME_LINES
    }

    /// Shift the window down one row. Refuses to move past `list_len`.
    ///
    /// Returns `true` if the window moved.
    pub fn shift_down(&mut self, list_len: usize) -> bool {
        if self.bottom >= list_len {
            return false;
        }
        self.top += 1;
        self.bottom += 1;
        true
    }

    /// Shift the window up one row. Refuses to move above index 0.
    ///
    /// Returns `true` if the window moved.
    pub fn shift_up(&mut self) -> bool {
        if self.top == 0 {
            return false;
        }
        self.top -= 1;
        self.bottom -= 1;
        true
    }
}
