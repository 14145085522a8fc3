//! Undo/redo history — whole-document snapshots.
//!
//! Every mutating command pushes a full copy of the document *before* it
//! changes anything. Undo and redo then swap snapshots between two stacks:
//!
//! ```text
//! history.record(&doc);   // before the edit
//! // ... mutate doc ...
//! history.undo(&mut doc); // doc = snapshot, old doc -> redo stack
//! history.redo(&mut doc); // doc = redo top, old doc -> undo stack
//! ```
//!
//! Snapshots are deep clones, never references to the live document, so
//! later edits cannot leak into them. Documents in this editor are small
//! enough that copying the whole thing costs less than tracking diffs.
//!
//! # Redo after a new edit
//!
//! By default recording a new snapshot leaves the redo stack alone, so a
//! redo after "undo, type" jumps back to the undone state. Construct the
//! history with [`History::with_redo_invalidation`] to get the usual
//! "new edit discards redo" behavior instead.

use crate::document::Document;

/// Two LIFO stacks of document snapshots.
#[derive(Debug, Default)]
pub struct History {
    undo_stack: Vec<Document>,
    redo_stack: Vec<Document>,
    clear_redo_on_record: bool,
}

impl History {
    /// Empty history. New edits keep the redo stack.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            clear_redo_on_record: false,
        }
    }

    /// Empty history where every [`record`](Self::record) clears the redo
    /// stack.
    #[must_use]
    pub const fn with_redo_invalidation() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            clear_redo_on_record: true,
        }
    }

    /// Push a snapshot of `doc` onto the undo stack. Call this before the
    /// document is mutated.
    pub fn record(&mut self, doc: &Document) {
        self.undo_stack.push(doc.clone());
        if self.clear_redo_on_record {
            self.redo_stack.clear();
        }
    }

    /// Restore the most recent snapshot into `doc`. The current content
    /// goes onto the redo stack. Returns `false` if there is nothing to
    /// undo, leaving `doc` untouched.
    pub fn undo(&mut self, doc: &mut Document) -> bool {
        let Some(snapshot) = self.undo_stack.pop() else {
            return false;
        };
        self.redo_stack.push(std::mem::replace(doc, snapshot));
        true
    }

    /// Re-apply the most recently undone state. Symmetric to
    /// [`undo`](Self::undo). Returns `false` if there is nothing to redo.
    pub fn redo(&mut self, doc: &mut Document) -> bool {
        let Some(snapshot) = self.redo_stack.pop() else {
            return false;
        };
        self.undo_stack.push(std::mem::replace(doc, snapshot));
        true
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of snapshots on the undo stack.
    #[must_use]
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn edit(h: &mut History, doc: &mut Document, line: &str) {
        h.record(doc);
        doc.set_line(0, line);
    }

    // -- Basic undo / redo --------------------------------------------------

    #[test]
    fn undo_restores_snapshot() {
        let mut doc = Document::from_lines(["before"]);
        let mut h = History::new();
        edit(&mut h, &mut doc, "after");

        assert!(h.undo(&mut doc));
        assert_eq!(doc.line(0), Some("before"));
    }

    #[test]
    fn redo_after_undo() {
        let mut doc = Document::from_lines(["before"]);
        let mut h = History::new();
        edit(&mut h, &mut doc, "after");

        h.undo(&mut doc);
        assert!(h.redo(&mut doc));
        assert_eq!(doc.line(0), Some("after"));
    }

    #[test]
    fn undo_restores_every_line() {
        let mut doc = Document::from_lines(["a", "b", "c"]);
        let original = doc.clone();
        let mut h = History::new();

        h.record(&doc);
        doc.replace_all("b", "B");
        doc.set_line(2, "C");

        h.undo(&mut doc);
        assert_eq!(doc, original);
    }

    // -- Underflow ----------------------------------------------------------

    #[test]
    fn undo_nothing() {
        let mut doc = Document::from_lines(["x"]);
        let mut h = History::new();
        assert!(!h.undo(&mut doc));
        assert_eq!(doc.line(0), Some("x"));
    }

    #[test]
    fn redo_nothing() {
        let mut doc = Document::from_lines(["x"]);
        let mut h = History::new();
        assert!(!h.redo(&mut doc));
        assert_eq!(doc.line(0), Some("x"));
    }

    // -- Stacks -------------------------------------------------------------

    #[test]
    fn undo_all_then_redo_all() {
        let mut doc = Document::from_lines([""]);
        let mut h = History::new();
        for text in ["h", "he", "hey"] {
            edit(&mut h, &mut doc, text);
        }

        h.undo(&mut doc);
        assert_eq!(doc.line(0), Some("he"));
        h.undo(&mut doc);
        assert_eq!(doc.line(0), Some("h"));
        h.undo(&mut doc);
        assert_eq!(doc.line(0), Some(""));
        assert!(!h.can_undo());

        h.redo(&mut doc);
        h.redo(&mut doc);
        h.redo(&mut doc);
        assert_eq!(doc.line(0), Some("hey"));
        assert!(!h.can_redo());
    }

    #[test]
    fn counts_track_stacks() {
        let mut doc = Document::new();
        let mut h = History::new();
        edit(&mut h, &mut doc, "a");
        edit(&mut h, &mut doc, "b");
        assert_eq!(h.undo_count(), 2);
        assert!(!h.can_redo());

        h.undo(&mut doc);
        assert_eq!(h.undo_count(), 1);
        assert!(h.can_redo());
    }

    #[test]
    fn snapshots_do_not_alias_live_document() {
        let mut doc = Document::from_lines(["one"]);
        let mut h = History::new();
        h.record(&doc);
        doc.insert_char(0, 3, '!');
        doc.insert_char(0, 4, '!');

        h.undo(&mut doc);
        assert_eq!(doc.line(0), Some("one"));
    }

    // -- Redo after a new edit ----------------------------------------------

    #[test]
    fn new_edit_keeps_redo_by_default() {
        let mut doc = Document::from_lines(["v1"]);
        let mut h = History::new();
        edit(&mut h, &mut doc, "v2");
        h.undo(&mut doc);
        edit(&mut h, &mut doc, "v3");

        assert!(h.can_redo());
        h.redo(&mut doc);
        assert_eq!(doc.line(0), Some("v2"));
    }

    #[test]
    fn new_edit_clears_redo_when_invalidating() {
        let mut doc = Document::from_lines(["v1"]);
        let mut h = History::with_redo_invalidation();
        edit(&mut h, &mut doc, "v2");
        h.undo(&mut doc);
        edit(&mut h, &mut doc, "v3");

        assert!(!h.can_redo());
        assert!(!h.redo(&mut doc));
        assert_eq!(doc.line(0), Some("v3"));
    }

    #[test]
    fn default_is_empty() {
        let h = History::default();
        assert!(!h.can_undo());
        assert!(!h.can_redo());
    }
}
