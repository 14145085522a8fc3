//! Search — literal forward search with wraparound.
//!
//! Matching is a plain substring comparison on each line; matches never span
//! lines. Columns going in and out are char columns.
//!
//! # Scan order
//!
//! Starting from `(row, col)`:
//!
//! 1. the rest of `row`, at or after `col`
//! 2. rows `row + 1 ..` from column 0
//! 3. rows `0 .. row` from column 0 (the wrap)
//!
//! The part of `row` before `col` is never revisited, so a search whose only
//! match sits behind the cursor on its own row reports "not found".

use crate::document::{byte_offset, char_col, Document};
use crate::position::Position;

/// Find the first occurrence of `query` at or after `from`, wrapping to the
/// top of the document. Returns `None` for an empty query.
#[must_use]
pub fn find_forward(doc: &Document, query: &str, from: Position) -> Option<Position> {
    if query.is_empty() {
        return None;
    }

    let rows = doc.line_count();
    if from.row >= rows {
        return None;
    }

    if let Some(col) = find_in_line(doc, query, from.row, from.col) {
        return Some(Position::new(from.row, col));
    }

    (from.row + 1..rows)
        .chain(0..from.row)
        .find_map(|row| find_in_line(doc, query, row, 0).map(|col| Position::new(row, col)))
}

/// Leftmost match of `query` on `row` starting at char column `col`.
fn find_in_line(doc: &Document, query: &str, row: usize, col: usize) -> Option<usize> {
    let line = doc.line(row)?;
    let start = byte_offset(line, col);
    line[start..]
        .find(query)
        .map(|found| char_col(line, start + found))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
