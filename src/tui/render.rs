//! # Frame Rendering
//!
//! Draws and erases one selection frame inline in the terminal:
//!
//! ```text
//! options>          ← label (blue)
//! option 2
//! option 3          ← selected row (reverse video)
//! option 4
//! Enter: Select, Ctrl+C: Cancel   ← help (yellow)
//! ```
//!
//! Lines end in `\r\n` because the terminal is in raw mode, where a bare
//! `\n` does not return the carriage. A frame always occupies exactly
//! `Viewport::frame_height()` lines, and `erase` walks back exactly that
//! many. Text is clipped to the terminal width when one is known so that no
//! line wraps and throws the count off.

use std::io::{self, Write};

use crossterm::cursor::MoveToPreviousLine;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use unicode_width::UnicodeWidthChar;

use crate::core::Viewport;

pub const HELP_TEXT: &str = "Enter: Select, Ctrl+C: Cancel";

const LINE_END: &str = "\r\n";

#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    /// Terminal width in columns. `None` disables clipping.
    max_width: Option<usize>,
}

impl Renderer {
    pub fn new(max_width: Option<usize>) -> Self {
        Self { max_width }
    }

    /// Draw the label, the options inside `viewport` and the help line.
    pub fn draw<W: Write, S: AsRef<str>>(
        &self,
        out: &mut W,
        options: &[S],
        selected: usize,
        viewport: Viewport,
        label: &str,
    ) -> io::Result<()> {
        queue!(
            out,
            SetForegroundColor(Color::Blue),
            Print(self.clip(&format!("{label}>"))),
            ResetColor,
            Print(LINE_END)
        )?;

        for (index, option) in options
            .iter()
            .enumerate()
            .take(viewport.bottom)
            .skip(viewport.top)
        {
            let text = self.clip(option.as_ref());
            if index == selected {
                queue!(
                    out,
                    SetAttribute(Attribute::Reverse),
                    Print(text),
                    SetAttribute(Attribute::Reset),
                    Print(LINE_END)
                )?;
            } else {
                queue!(out, Print(text), Print(LINE_END))?;
            }
        }

        queue!(
            out,
            SetForegroundColor(Color::Yellow),
            Print(self.clip(HELP_TEXT)),
            ResetColor,
            Print(LINE_END)
        )?;
        out.flush()
    }

    /// Remove a frame previously drawn for `viewport` and leave the cursor
    /// where that frame started.
    ///
    /// `viewport` must be the window the frame was drawn with, not the one
    /// about to be drawn.
    pub fn erase<W: Write>(&self, out: &mut W, viewport: Viewport) -> io::Result<()> {
        let height = u16::try_from(viewport.frame_height()).unwrap_or(u16::MAX);
        // The frame is the last thing on screen, so clearing to the end of
        // the display clears exactly its lines.
        queue!(out, MoveToPreviousLine(height), Clear(ClearType::FromCursorDown))?;
        out.flush()
    }

    /// Print a single unstyled line, used for the closing message.
    pub fn print_line<W: Write>(&self, out: &mut W, text: &str) -> io::Result<()> {
        queue!(out, Print(self.clip(text)), Print(LINE_END))?;
        out.flush()
    }

    fn clip(&self, text: &str) -> String {
        let text = flatten_controls(text);
        match self.max_width {
            Some(width) => truncate_to_width(&text, width),
            None => text,
        }
    }
}

/// Replace control characters (newlines, tabs, stray escapes) with spaces so
/// every piece of text occupies exactly one terminal line.
fn flatten_controls(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut used = 0;
    let mut clipped = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        clipped.push(c);
    }
    clipped.push_str("...");
    clipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{VirtualScreen, strip_ansi};

    fn options(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("option {i}")).collect()
    }

    fn draw_to_vec(renderer: &Renderer, opts: &[String], selected: usize, vp: Viewport) -> Vec<u8> {
        let mut out = Vec::new();
        renderer.draw(&mut out, opts, selected, vp, "options").unwrap();
        out
    }

    #[test]
    fn test_draw_emits_frame_height_lines() {
        let renderer = Renderer::default();
        let opts = options(9);
        for vp in [
            Viewport { top: 0, bottom: 5 },
            Viewport { top: 4, bottom: 9 },
            Viewport { top: 0, bottom: 1 },
        ] {
            let out = draw_to_vec(&renderer, &opts, vp.top, vp);
            let newlines = out.iter().filter(|&&b| b == b'\n').count();
            assert_eq!(newlines, vp.frame_height());
        }
    }

    #[test]
    fn test_draw_shows_only_visible_window() {
        let renderer = Renderer::default();
        let out = draw_to_vec(&renderer, &options(9), 5, Viewport { top: 1, bottom: 6 });
        let text = strip_ansi(&String::from_utf8(out).unwrap());
        let lines: Vec<&str> = text.split("\r\n").collect();
        assert_eq!(
            lines,
            vec![
                "options>",
                "option 2",
                "option 3",
                "option 4",
                "option 5",
                "option 6",
                HELP_TEXT,
                "",
            ]
        );
    }

    #[test]
    fn test_only_selected_row_is_reversed() {
        let renderer = Renderer::default();
        let out = draw_to_vec(&renderer, &options(3), 1, Viewport { top: 0, bottom: 3 });
        let raw = String::from_utf8(out).unwrap();
        assert_eq!(raw.matches("\x1b[7m").count(), 1);
        assert!(raw.contains("\x1b[7moption 2"));
        assert!(!raw.contains("\x1b[7moption 1"));
    }

    #[test]
    fn test_erase_moves_up_frame_height() {
        let renderer = Renderer::default();
        let vp = Viewport { top: 2, bottom: 7 };
        let mut out = Vec::new();
        renderer.erase(&mut out, vp).unwrap();
        let raw = String::from_utf8(out).unwrap();
        assert_eq!(raw, format!("\x1b[{}F\x1b[J", vp.frame_height()));
    }

    #[test]
    fn test_erase_after_draw_restores_screen() {
        let renderer = Renderer::default();
        let opts = options(9);
        for vp in [Viewport { top: 0, bottom: 5 }, Viewport { top: 0, bottom: 2 }] {
            let mut screen = VirtualScreen::new();
            screen.feed(b"$ picklist\r\n");
            renderer.draw(&mut screen, &opts, 0, vp, "options").unwrap();
            assert_eq!(screen.lines().len(), 1 + vp.frame_height());

            renderer.erase(&mut screen, vp).unwrap();
            assert_eq!(screen.lines(), vec!["$ picklist".to_string()]);
            assert_eq!(screen.cursor_row(), 1);
        }
    }

    #[test]
    fn test_long_options_are_clipped_to_width() {
        let renderer = Renderer::new(Some(10));
        let opts = vec!["a much longer option than fits".to_string()];
        let out = draw_to_vec(&renderer, &opts, 0, Viewport { top: 0, bottom: 1 });
        let text = strip_ansi(&String::from_utf8(out).unwrap());
        assert!(text.contains("a much ...\r\n"));
        assert!(text.lines().all(|l| l.trim_end_matches('\r').chars().count() <= 10));
    }

    #[test]
    fn test_multi_line_option_stays_on_one_line() {
        let renderer = Renderer::default();
        let opts = vec!["first\nsecond".to_string(), "other".to_string()];
        let vp = Viewport { top: 0, bottom: 2 };
        let out = draw_to_vec(&renderer, &opts, 0, vp);
        let newlines = out.iter().filter(|&&b| b == b'\n').count();
        assert_eq!(newlines, vp.frame_height());

        let text = strip_ansi(&String::from_utf8(out).unwrap());
        assert!(text.contains("first second\r\n"));
    }

    #[test]
    fn test_tabs_and_escapes_are_flattened() {
        let renderer = Renderer::new(Some(10));
        let opts = vec!["a\tb\x1bc\rd".to_string()];
        let out = draw_to_vec(&renderer, &opts, 0, Viewport { top: 0, bottom: 1 });
        let raw = String::from_utf8(out).unwrap();
        assert!(!raw.contains("\x1bc"));
        assert!(strip_ansi(&raw).contains("a b c d\r\n"));
        assert_eq!(flatten_controls("x\ty\n"), "x y ");
    }

    #[test]
    fn test_control_chars_do_not_survive_erase() {
        let renderer = Renderer::new(Some(80));
        let opts = vec!["first\nsecond".to_string(), "other\tline".to_string()];
        let vp = Viewport { top: 0, bottom: 2 };
        let mut screen = VirtualScreen::new();
        screen.feed(b"$ demo\r\n");
        renderer.draw(&mut screen, &opts, 1, vp, "pick\n").unwrap();
        renderer.erase(&mut screen, vp).unwrap();
        assert_eq!(screen.lines(), vec!["$ demo".to_string()]);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_to_width("abcdefghijk", 10), "abcdefg...");
        assert_eq!(truncate_to_width("abcdef", 2), "..");
        // Wide characters count as two columns
        assert_eq!(truncate_to_width("日本語テキスト", 8), "日本...");
    }
}
