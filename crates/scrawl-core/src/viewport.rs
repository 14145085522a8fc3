//! Viewport — the window of rows currently on screen.
//!
//! The viewport is the half-open row range `[start, end)` where
//! `end - start` always equals the number of text rows the display offers.
//! It may extend past the last line of the document; those rows render as
//! blank.
//!
//! Scrolling is driven by the cursor: single-step moves shift the window by
//! one row ([`scroll_up`](Viewport::scroll_up) /
//! [`scroll_down`](Viewport::scroll_down)), jumps (search, undo) use
//! [`follow`](Viewport::follow) to bring the cursor row back into view with
//! the smallest possible shift.

use std::ops::Range;

/// A contiguous window of visible rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    start: usize,
    rows: usize,
}

impl Viewport {
    /// A window of `rows` rows starting at the top. At least one row is
    /// always shown, otherwise no row could contain the cursor.
    #[must_use]
    pub fn new(rows: usize) -> Self {
        Self {
            start: 0,
            rows: rows.max(1),
        }
    }

    // -- Accessors ----------------------------------------------------------

    /// First visible row.
    #[inline]
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// One past the last visible row.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.rows
    }

    /// Number of visible rows (`end - start`).
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// The visible rows as a range.
    #[inline]
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// True if `row` is on screen.
    #[inline]
    #[must_use]
    pub const fn contains(&self, row: usize) -> bool {
        row >= self.start && row < self.end()
    }

    // -- Scrolling ----------------------------------------------------------

    /// Shift the window up by one row. No-op at the top.
    pub const fn scroll_up(&mut self) {
        self.start = self.start.saturating_sub(1);
    }

    /// Shift the window down by one row.
    pub const fn scroll_down(&mut self) {
        self.start += 1;
    }

    /// Shift the window the minimum amount needed to show `row`.
    pub const fn follow(&mut self, row: usize) {
        if row < self.start {
            self.start = row;
        } else if row >= self.end() {
            self.start = row + 1 - self.rows;
        }
    }

    /// Back to the top of the document, keeping the height.
    pub const fn reset(&mut self) {
        self.start = 0;
    }

    /// Change the height, keeping the first visible row. Callers follow the
    /// cursor afterwards since it may now be below the window.
    pub fn resize(&mut self, rows: usize) {
        self.rows = rows.max(1);
    }
}
