//! # Actions
//!
//! Every key the user presses becomes an `Action`.
//! Down arrow? That's `Action::MoveDown`. Ctrl+C? `Action::Cancel`.
//!
//! The `update()` function applies an action to the current state and
//! returns an `Effect` telling the controller what to do with the screen.
//! No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use crate::core::state::SelectionState;

/// Platform-independent input, produced by the terminal adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    Confirm,
    Cancel,
    /// Key-up events, unmapped keys and non-key events.
    Ignored,
}

/// What the controller must do after an action was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing visible changed. The frame on screen stays as it is.
    None,
    /// Selection or window moved. Erase and redraw the frame.
    Redraw,
    /// Session ends with the option at this index chosen.
    Select(usize),
    /// Session ends without a choice.
    Cancel,
}

pub fn update(state: &mut SelectionState, action: Action) -> Effect {
    match action {
        Action::MoveDown => {
            let len = state.option_count();
            if state.selected + 1 >= len {
                return Effect::None;
            }
            state.selected += 1;
            if state.selected >= state.viewport.bottom {
                state.viewport.shift_down(len);
            }
            Effect::Redraw
        }
        Action::MoveUp => {
            if state.selected == 0 {
                return Effect::None;
            }
            state.selected -= 1;
            if state.selected < state.viewport.top {
                state.viewport.shift_up();
            }
            Effect::Redraw
        }
        Action::Confirm => Effect::Select(state.selected),
        Action::Cancel => Effect::Cancel,
        Action::Ignored => Effect::None,
    }
}
