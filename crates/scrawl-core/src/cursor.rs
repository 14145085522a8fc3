//! Cursor — a (row, column) position with bounded single-step movement.
//!
//! Movement never wraps: Left stops at column 0, Right stops at the mode's
//! column limit, Up/Down stop at the first/last line. Hitting a bound is a
//! silent no-op, reported only through the `bool` each method returns.
//!
//! # Mode-dependent limit
//!
//! The right-hand limit depends on the [`Mode`]: overwrite mode keeps the
//! cursor ON a character (`len - 1`), insert mode lets it sit just past the
//! last character (`len`) so typing appends.
//!
//! # Vertical movement and short lines
//!
//! Moving Up/Down onto a shorter line either re-clamps the column to that
//! line's limit or leaves it untouched, depending on the `clamp` argument.
//! When left untouched, the column can point past the end of its line;
//! [`effective_col`](Cursor::effective_col) gives the column editing code
//! should actually use.

use crate::document::Document;
use crate::mode::Mode;
use crate::position::Position;

/// The editing cursor. A plain value type: it does not own or borrow the
/// document, which is passed to each movement method instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pos: Position,
}

impl Cursor {
    /// A cursor at the origin.
    #[must_use]
    pub const fn new() -> Self {
        Self { pos: Position::ZERO }
    }

    /// A cursor at `pos`. No clamping.
    #[must_use]
    pub const fn at(pos: Position) -> Self {
        Self { pos }
    }

    // -- Accessors ----------------------------------------------------------

    #[inline]
    #[must_use]
    pub const fn position(&self) -> Position {
        self.pos
    }

    #[inline]
    #[must_use]
    pub const fn row(&self) -> usize {
        self.pos.row
    }

    #[inline]
    #[must_use]
    pub const fn col(&self) -> usize {
        self.pos.col
    }

    /// The column clipped to the length of the current line. Equal to
    /// [`col`](Self::col) whenever the cursor is in range.
    #[must_use]
    pub fn effective_col(&self, doc: &Document) -> usize {
        self.pos.col.min(doc.line_len(self.pos.row).unwrap_or(0))
    }

    // -- Direct positioning -------------------------------------------------

    /// Jump to `pos` as-is. Callers clamp afterwards if needed.
    pub const fn set_position(&mut self, pos: Position) {
        self.pos = pos;
    }

    /// Pull the cursor back inside the document: row into `0..line_count`,
    /// column into the mode limit of that row.
    pub fn clamp(&mut self, doc: &Document, mode: Mode) {
        self.pos.row = self.pos.row.min(doc.line_count() - 1);
        self.clamp_col(doc, mode);
    }

    /// Pull only the column into the mode limit of the current row.
    pub fn clamp_col(&mut self, doc: &Document, mode: Mode) {
        self.pos.col = self.pos.col.min(max_col(doc, self.pos.row, mode));
    }

    // -- Movement -----------------------------------------------------------

    /// One row up. Returns `false` at the top row.
    pub fn move_up(&mut self, doc: &Document, mode: Mode, clamp: bool) -> bool {
        if self.pos.row == 0 {
            return false;
        }
        self.pos.row -= 1;
        if clamp {
            self.clamp_col(doc, mode);
        }
        true
    }

    /// One row down. Returns `false` at the last row.
    pub fn move_down(&mut self, doc: &Document, mode: Mode, clamp: bool) -> bool {
        if self.pos.row + 1 >= doc.line_count() {
            return false;
        }
        self.pos.row += 1;
        if clamp {
            self.clamp_col(doc, mode);
        }
        true
    }

    /// One column left. Returns `false` at column 0; never wraps to the
    /// previous line.
    pub const fn move_left(&mut self) -> bool {
        if self.pos.col == 0 {
            return false;
        }
        self.pos.col -= 1;
        true
    }

    /// One column right, up to the mode limit. Returns `false` at the limit;
    /// never wraps to the next line.
    pub fn move_right(&mut self, doc: &Document, mode: Mode) -> bool {
        if self.pos.col >= max_col(doc, self.pos.row, mode) {
            return false;
        }
        self.pos.col += 1;
        true
    }
}

/// Largest valid column on `row` for `mode`.
fn max_col(doc: &Document, row: usize, mode: Mode) -> usize {
    mode.max_col(doc.line_len(row).unwrap_or(0))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
