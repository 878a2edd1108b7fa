use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::core::Action;

/// Where a selection session gets its input from.
///
/// `next_action` blocks until one event is available. An `Err` means the
/// input stream is no longer usable and the session must end.
pub trait InputSource {
    fn next_action(&mut self) -> io::Result<Action>;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn next_action(&mut self) -> io::Result<Action> {
        (**self).next_action()
    }
}

/// Reads key events from the real terminal through crossterm.
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn next_action(&mut self) -> io::Result<Action> {
        let event = event::read()?;
        let action = map_event(&event);
        log::debug!("Input {:?} -> {:?}", event, action);
        Ok(action)
    }
}

/// Translate a raw terminal event into a selection `Action`.
///
/// Only key-down events count, so a held arrow key keeps moving. Releases,
/// mouse, resize and focus events all map to `Action::Ignored`.
pub fn map_event(event: &Event) -> Action {
    let Event::Key(key) = event else {
        return Action::Ignored;
    };
    if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
        return Action::Ignored;
    }
    // Ctrl+C with either Ctrl key, but not combined with Alt
    let ctrl_only = key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::Char('c' | 'C') if ctrl_only => Action::Cancel,
        KeyCode::Up => Action::MoveUp,
        KeyCode::Down => Action::MoveDown,
        KeyCode::Enter => Action::Confirm,
        _ => Action::Ignored,
    }
}
