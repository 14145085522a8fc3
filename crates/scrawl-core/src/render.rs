//! Render model — what the display adapter needs to draw one frame.
//!
//! The model borrows from the editor state, so it lives only for the draw
//! call. It carries the visible slice of lines and the cursor translated to
//! viewport coordinates; clipping to the screen width and drawing the status
//! line are up to the adapter.

use std::path::Path;

use crate::mode::Mode;
use crate::position::Position;

/// A read-only view of the editor for one frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderModel<'a> {
    /// Document lines in `[start, end)`, cut short at the end of the
    /// document.
    pub lines: &'a [String],
    /// Number of text rows in the viewport. Rows past `lines.len()` are
    /// blank.
    pub rows: usize,
    /// Cursor relative to the viewport: `(row - start, col)`.
    pub cursor: Position,
    /// Cursor in document coordinates, for the status line.
    pub absolute: Position,
    pub mode: Mode,
    pub path: Option<&'a Path>,
    pub modified: bool,
}

impl<'a> RenderModel<'a> {
    /// Text of screen row `row`, or `None` past the end of the document.
    #[must_use]
    pub fn line(&self, row: usize) -> Option<&'a str> {
        self.lines.get(row).map(String::as_str)
    }

    /// File name for the status line, `[No Name]` without a path.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path.map_or_else(
            || "[No Name]".to_string(),
            |p| p.display().to_string(),
        )
    }

    /// `Cursor: (row, col)` with absolute coordinates.
    #[must_use]
    pub fn cursor_label(&self) -> String {
        format!("Cursor: {}", self.absolute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(lines: &[String]) -> RenderModel<'_> {
        RenderModel {
            lines,
            rows: 4,
            cursor: Position::new(1, 2),
            absolute: Position::new(11, 2),
            mode: Mode::Insert,
            path: None,
            modified: false,
        }
    }

    #[test]
    fn rows_past_document_are_blank() {
        let lines = vec!["a".to_string(), "b".to_string()];
        let m = model(&lines);
        assert_eq!(m.line(1), Some("b"));
        assert_eq!(m.line(2), None);
        assert_eq!(m.line(3), None);
    }

    #[test]
    fn labels() {
        let lines = Vec::new();
        let mut m = model(&lines);
        assert_eq!(m.cursor_label(), "Cursor: (11, 2)");
        assert_eq!(m.file_name(), "[No Name]");
        m.path = Some(Path::new("notes.txt"));
        assert_eq!(m.file_name(), "notes.txt");
    }
}
