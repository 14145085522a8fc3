// SPDX-License-Identifier: MIT
//
// Frame — one screen's worth of rows.
//
// scrawl's UI is line-oriented: document rows, a status bar, a message
// line. A frame therefore stores whole rows of already-expanded text plus a
// style per row instead of a cell grid. The renderer diffs frames row by
// row.

use crate::terminal::Size;
use crate::width;

/// How a row is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Plain,
    /// Reverse video across the full width (status bar).
    Inverse,
}

/// One screen row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    pub text: String,
    pub style: Style,
}

/// A full screen of rows, each no wider than the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    size: Size,
    rows: Vec<Row>,
}

impl Frame {
    /// A blank frame.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            rows: vec![Row::default(); usize::from(size.rows)],
        }
    }

    #[inline]
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.size.cols as usize
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.size.rows as usize
    }

    /// Row `y`, if on screen.
    #[must_use]
    pub fn row(&self, y: usize) -> Option<&Row> {
        self.rows.get(y)
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Blank every row, keeping the size.
    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.text.clear();
            row.style = Style::Plain;
        }
    }

    /// Change the size and blank everything.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
        self.rows = vec![Row::default(); usize::from(size.rows)];
    }

    /// Set row `y` to `text`, cut to the screen width. Rows off screen are
    /// ignored. `text` must not contain tabs or control characters; expand it
    /// with [`width::visible_slice`] first.
    pub fn set_row(&mut self, y: usize, text: &str, style: Style) {
        let width = self.width();
        if let Some(row) = self.rows.get_mut(y) {
            row.text.clear();
            row.text.push_str(width::truncate(text, width));
            row.style = style;
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn size(cols: u16, rows: u16) -> Size {
        Size { cols, rows }
    }

    #[test]
    fn new_frame_is_blank() {
        let f = Frame::new(size(10, 3));
        assert_eq!(f.height(), 3);
        assert!(f.rows().iter().all(|r| r.text.is_empty()));
    }

    #[test]
    fn set_row_truncates_to_width() {
        let mut f = Frame::new(size(4, 2));
        f.set_row(0, "abcdef", Style::Plain);
        assert_eq!(f.row(0).unwrap().text, "abcd");
    }

    #[test]
    fn set_row_off_screen_is_ignored() {
        let mut f = Frame::new(size(4, 2));
        f.set_row(5, "x", Style::Plain);
        assert_eq!(f, Frame::new(size(4, 2)));
    }

    #[test]
    fn clear_resets_style() {
        let mut f = Frame::new(size(4, 1));
        f.set_row(0, "bar", Style::Inverse);
        f.clear();
        assert_eq!(f.row(0), Some(&Row::default()));
    }

    #[test]
    fn resize_changes_row_count() {
        let mut f = Frame::new(size(4, 1));
        f.resize(size(8, 5));
        assert_eq!(f.height(), 5);
        assert_eq!(f.width(), 8);
    }
}
