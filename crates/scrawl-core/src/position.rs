//! Cursor coordinates.
//!
//! All coordinates are **0-indexed**. Row 0 is the first line, column 0 is
//! the first character. Columns count chars, not bytes and not grapheme
//! clusters.
//!
//! The status line shows these coordinates as-is, without converting to
//! 1-indexed values.

use std::fmt;

/// A position in a document: (row, column), both 0-indexed.
///
/// `col` is the char offset from the start of the line. For the line
/// `"café"`, column 3 is `'é'` and column 4 is the append position used in
/// insert mode.
///
/// # Ordering
///
/// Positions are ordered row first, then column.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// The origin — row 0, column 0.
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl Ord for Position {
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl PartialOrd for Position {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pos({}:{})", self.row, self.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
