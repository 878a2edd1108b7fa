//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::io::{self, Write};

use crate::core::Action;
use crate::tui::InputSource;

/// An input source that replays a fixed script and counts reads.
///
/// Reading past the end of the script is an error, so a session that keeps
/// reading after it should have stopped fails loudly.
pub struct ScriptedInput {
    script: VecDeque<io::Result<Action>>,
    pub reads: usize,
}

impl ScriptedInput {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            script: actions.into_iter().map(Ok).collect(),
            reads: 0,
        }
    }

    /// Append a read failure after the scripted actions.
    pub fn then_fail(mut self) -> Self {
        self.script
            .push_back(Err(io::Error::new(io::ErrorKind::BrokenPipe, "input closed")));
        self
    }
}

impl InputSource for ScriptedInput {
    fn next_action(&mut self) -> io::Result<Action> {
        self.reads += 1;
        self.script.pop_front().unwrap_or_else(|| {
            Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "read past end of script",
            ))
        })
    }
}

/// Remove CSI escape sequences, keeping plain text and line endings.
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// A tiny terminal model that understands just what the renderer emits:
/// text, `\r`, `\n`, `CSI n F` (previous line), `CSI J` (clear below) and
/// SGR styling (ignored).
///
/// Writes are buffered and replayed on demand, since a single escape
/// sequence may arrive split across several `write` calls.
#[derive(Debug, Default)]
pub struct VirtualScreen {
    raw: Vec<u8>,
}

#[derive(Default)]
struct Grid {
    rows: Vec<Vec<char>>,
    row: usize,
    col: usize,
    moves_up: usize,
}

impl VirtualScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, bytes: &[u8]) {
        self.raw.extend_from_slice(bytes);
    }

    /// Visible lines, with trailing empty lines dropped.
    pub fn lines(&self) -> Vec<String> {
        let grid = self.replay();
        let mut lines: Vec<String> = grid.rows.iter().map(|r| r.iter().collect()).collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        lines
    }

    pub fn cursor_row(&self) -> usize {
        self.replay().row
    }

    /// Number of `CSI n F` sequences seen, i.e. how many erases ran.
    pub fn moves_up(&self) -> usize {
        self.replay().moves_up
    }

    /// Everything written so far, escape sequences included.
    pub fn raw(&self) -> String {
        String::from_utf8_lossy(&self.raw).into_owned()
    }

    fn replay(&self) -> Grid {
        let mut grid = Grid::default();
        let text = self.raw();
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\x1b' if chars.peek() == Some(&'[') => {
                    chars.next();
                    let mut params = String::new();
                    let mut command = None;
                    for c in chars.by_ref() {
                        if c.is_ascii_alphabetic() {
                            command = Some(c);
                            break;
                        }
                        params.push(c);
                    }
                    grid.csi(&params, command);
                }
                '\r' => grid.col = 0,
                '\n' => {
                    grid.row += 1;
                    grid.ensure_row();
                }
                c => grid.put(c),
            }
        }
        grid
    }
}

impl Grid {
    fn csi(&mut self, params: &str, command: Option<char>) {
        match command {
            Some('F') => {
                let n = params.parse::<usize>().unwrap_or(1);
                self.row = self.row.saturating_sub(n);
                self.col = 0;
                self.moves_up += 1;
            }
            Some('J') => {
                self.rows.truncate(self.row + 1);
                if let Some(line) = self.rows.get_mut(self.row) {
                    line.truncate(self.col);
                }
            }
            _ => {}
        }
    }

    fn put(&mut self, c: char) {
        self.ensure_row();
        let line = &mut self.rows[self.row];
        if line.len() <= self.col {
            line.resize(self.col, ' ');
            line.push(c);
        } else {
            line[self.col] = c;
        }
        self.col += 1;
    }

    fn ensure_row(&mut self) {
        while self.rows.len() <= self.row {
            self.rows.push(Vec::new());
        }
    }
}

impl Write for VirtualScreen {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.feed(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
