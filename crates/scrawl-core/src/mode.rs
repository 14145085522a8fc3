//! Insert vs. overwrite editing.
//!
//! The mode is global to the editor, not per line. It decides two things:
//!
//! | Mode      | Typed char                 | Cursor limit        |
//! |-----------|----------------------------|---------------------|
//! | Overwrite | replaces the char under it | `0..len-1` (0 if empty) |
//! | Insert    | shifts the rest right      | `0..=len`           |

use std::fmt;

/// The current editing mode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Typed characters replace the character under the cursor. The startup
    /// mode unless configured otherwise.
    #[default]
    Overwrite,
    /// Typed characters are inserted at the cursor.
    Insert,
}

impl Mode {
    /// Build the mode from an "insert mode on" flag.
    #[inline]
    #[must_use]
    pub const fn from_insert(insert: bool) -> Self {
        if insert { Self::Insert } else { Self::Overwrite }
    }

    /// Human-readable name for the status line.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Overwrite => "OVERWRITE",
            Self::Insert => "INSERT",
        }
    }

    /// The other mode.
    #[inline]
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Overwrite => Self::Insert,
            Self::Insert => Self::Overwrite,
        }
    }

    /// True if the cursor may sit one past the last char (append position).
    #[inline]
    #[must_use]
    pub const fn cursor_past_end(self) -> bool {
        matches!(self, Self::Insert)
    }

    /// Largest valid column on a line of `len` chars.
    #[inline]
    #[must_use]
    pub const fn max_col(self, len: usize) -> usize {
        if self.cursor_past_end() {
            len
        } else {
            len.saturating_sub(1)
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
