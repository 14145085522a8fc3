// SPDX-License-Identifier: MIT
//
// View — paints the editor into a frame.
//
// Layout:
//
//   ┌──────────────────────────────┐
//   │ document rows                │  ← h - 2 rows (the core's viewport)
//   ├──────────────────────────────┤
//   │ status line (INVERSE)        │  ← 1 row
//   ├──────────────────────────────┤
//   │ message / prompt line        │  ← 1 row
//   └──────────────────────────────┘
//
// The core scrolls vertically. Horizontal scrolling lives here because only
// the adapter knows the screen width: `left_col` is the first display
// column shown, and it follows the cursor so the cursor is always on screen.

use scrawl_core::render::RenderModel;
use scrawl_term::frame::{Frame, Style};
use scrawl_term::width;

use crate::prompt::Prompt;

/// Key hint shown at the end of the status line.
pub const HELP: &str = "^S save  ^O open  ^F find  ^R replace  ^Z undo  ^Y redo  ^Q quit";

/// Document rows for a terminal `height` rows tall. Never zero.
#[must_use]
pub fn text_rows(height: u16) -> usize {
    usize::from(height).saturating_sub(2).max(1)
}

/// The status line text.
#[must_use]
pub fn status_line(model: &RenderModel<'_>, show_help: bool) -> String {
    let marker = if model.modified { " [+]" } else { "" };
    let mut text = format!(
        "{} | {} | {}{marker}",
        model.cursor_label(),
        model.mode,
        model.file_name()
    );
    if show_help {
        text.push_str(" | ");
        text.push_str(HELP);
    }
    text
}

/// What goes in the bottom row.
#[derive(Debug, Clone, Copy)]
pub enum Bottom<'a> {
    Prompt(&'a Prompt),
    Message(&'a str),
    Empty,
}

/// Horizontal scroll state.
#[derive(Debug, Default)]
pub struct View {
    left_col: usize,
}

impl View {
    #[must_use]
    pub const fn new() -> Self {
        Self { left_col: 0 }
    }

    /// Paint everything. Returns the screen position for the hardware
    /// cursor: on the prompt while one is open, in the text otherwise.
    #[allow(clippy::cast_possible_truncation)]
    pub fn paint(
        &mut self,
        model: &RenderModel<'_>,
        tab_stop: usize,
        show_help: bool,
        bottom: Bottom<'_>,
        frame: &mut Frame,
    ) -> Option<(u16, u16)> {
        let w = frame.width();
        let rows = text_rows(frame.size().rows);

        let cursor_line = model.line(model.cursor.row).unwrap_or("");
        let cursor_x = cursor_display_col(cursor_line, model.cursor.col, tab_stop);
        self.scroll_to(cursor_x, w);

        for y in 0..rows.min(model.rows) {
            if let Some(line) = model.line(y) {
                let text = width::visible_slice(line, self.left_col, w, tab_stop);
                frame.set_row(y, &text, Style::Plain);
            }
        }
        frame.set_row(rows, &status_line(model, show_help), Style::Inverse);

        let bottom_y = rows + 1;
        match bottom {
            Bottom::Prompt(prompt) => {
                return Some(paint_prompt(frame, prompt, tab_stop, bottom_y));
            }
            Bottom::Message(msg) => frame.set_row(bottom_y, msg, Style::Plain),
            Bottom::Empty => {}
        }

        let x = cursor_x - self.left_col;
        (x < w && model.cursor.row < rows).then(|| (x as u16, model.cursor.row as u16))
    }

    /// Keep display column `col` inside `[left_col, left_col + width)`.
    fn scroll_to(&mut self, col: usize, width: usize) {
        let width = width.max(1);
        if col < self.left_col {
            self.left_col = col;
        }
        if col >= self.left_col + width {
            self.left_col = col - width + 1;
        }
    }
}

/// Display column of the cursor. A column past the end of the line (only
/// possible with column clamping off) counts one cell per missing char.
fn cursor_display_col(line: &str, col: usize, tab_stop: usize) -> usize {
    let len = line.chars().count();
    width::display_col(line, col, tab_stop) + col.saturating_sub(len)
}

/// Draw the label and input, scrolled so the prompt cursor stays visible.
#[allow(clippy::cast_possible_truncation)]
fn paint_prompt(frame: &mut Frame, prompt: &Prompt, tab_stop: usize, y: usize) -> (u16, u16) {
    let w = frame.width();
    let label = prompt.kind().label();
    let label_w = width::str_width(label);
    let room = w.saturating_sub(label_w).max(1);

    let cursor_col = width::display_col(prompt.input(), prompt.cursor(), tab_stop);
    let skip = (cursor_col + 1).saturating_sub(room);
    let text = format!(
        "{label}{}",
        width::visible_slice(prompt.input(), skip, room, tab_stop)
    );
    frame.set_row(y, &text, Style::Plain);

    let x = (label_w + cursor_col - skip).min(w.saturating_sub(1));
    (x as u16, y as u16)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::PromptKind;
    use pretty_assertions::assert_eq;
    use scrawl_core::{Mode, Position};
    use scrawl_term::terminal::Size;
    use std::path::Path;

    fn model<'a>(lines: &'a [String], cursor: Position) -> RenderModel<'a> {
        RenderModel {
            lines,
            rows: 3,
            cursor,
            absolute: cursor,
            mode: Mode::Overwrite,
            path: None,
            modified: false,
        }
    }

    fn lines(text: &[&str]) -> Vec<String> {
        text.iter().map(ToString::to_string).collect()
    }

    fn frame(cols: u16) -> Frame {
        Frame::new(Size { cols, rows: 5 })
    }

    fn row(frame: &Frame, y: usize) -> &str {
        &frame.row(y).unwrap().text
    }

    // ── Layout ──────────────────────────────────────────────────────

    #[test]
    fn text_rows_leave_room_for_bars() {
        assert_eq!(text_rows(24), 22);
        assert_eq!(text_rows(2), 1);
        assert_eq!(text_rows(0), 1);
    }

    #[test]
    fn paints_text_status_and_message() {
        let doc = lines(&["hello", "world"]);
        let m = model(&doc, Position::new(1, 2));
        let mut f = frame(80);
        let cursor = View::new().paint(&m, 4, false, Bottom::Message("hi"), &mut f);

        assert_eq!(row(&f, 0), "hello");
        assert_eq!(row(&f, 1), "world");
        assert_eq!(row(&f, 2), "");
        assert_eq!(row(&f, 3), "Cursor: (1, 2) | OVERWRITE | [No Name]");
        assert_eq!(f.row(3).unwrap().style, Style::Inverse);
        assert_eq!(row(&f, 4), "hi");
        assert_eq!(cursor, Some((2, 1)));
    }

    #[test]
    fn status_line_shows_path_and_modified() {
        let doc = lines(&["x"]);
        let mut m = model(&doc, Position::ZERO);
        m.path = Some(Path::new("notes.txt"));
        m.modified = true;
        m.mode = Mode::Insert;
        assert_eq!(
            status_line(&m, true),
            format!("Cursor: (0, 0) | INSERT | notes.txt [+] | {HELP}")
        );
    }

    // ── Horizontal scroll ───────────────────────────────────────────

    #[test]
    fn scrolls_right_to_follow_cursor() {
        let doc = lines(&["abcdefghij"]);
        let m = model(&doc, Position::new(0, 8));
        let mut f = frame(5);
        let mut view = View::new();
        let cursor = view.paint(&m, 4, false, Bottom::Empty, &mut f);
        assert_eq!(view.left_col, 4);
        assert_eq!(row(&f, 0), "efghi");
        assert_eq!(cursor, Some((4, 0)));
    }

    #[test]
    fn scrolls_back_left() {
        let doc = lines(&["abcdefghij"]);
        let mut f = frame(5);
        let mut view = View::new();
        view.paint(&model(&doc, Position::new(0, 9)), 4, false, Bottom::Empty, &mut f);
        f.clear();
        view.paint(&model(&doc, Position::new(0, 1)), 4, false, Bottom::Empty, &mut f);
        assert_eq!(view.left_col, 1);
        assert_eq!(row(&f, 0), "bcdef");
    }

    #[test]
    fn cursor_after_tab_uses_display_column() {
        let doc = lines(&["\tx"]);
        let mut f = frame(20);
        let cursor = View::new().paint(&model(&doc, Position::new(0, 1)), 4, false, Bottom::Empty, &mut f);
        assert_eq!(row(&f, 0), "    x");
        assert_eq!(cursor, Some((4, 0)));
    }

    #[test]
    fn unclamped_column_past_end() {
        let doc = lines(&["ab"]);
        let mut f = frame(20);
        let cursor = View::new().paint(&model(&doc, Position::new(0, 5)), 4, false, Bottom::Empty, &mut f);
        assert_eq!(cursor, Some((5, 0)));
    }

    // ── Prompt ──────────────────────────────────────────────────────

    #[test]
    fn prompt_owns_the_cursor() {
        let doc = lines(&["x"]);
        let prompt = Prompt::with_text(PromptKind::Find, "abc");
        let mut f = frame(40);
        let cursor = View::new().paint(&model(&doc, Position::ZERO), 4, false, Bottom::Prompt(&prompt), &mut f);
        assert_eq!(row(&f, 4), "Find: abc");
        assert_eq!(cursor, Some((9, 4)));
    }

    #[test]
    fn long_prompt_input_scrolls() {
        let doc = lines(&["x"]);
        let prompt = Prompt::with_text(PromptKind::Find, "0123456789");
        let mut f = frame(10);
        let cursor = View::new().paint(&model(&doc, Position::ZERO), 4, false, Bottom::Prompt(&prompt), &mut f);
        assert_eq!(row(&f, 4), "Find: 789");
        assert_eq!(cursor, Some((9, 4)));
    }
}
