//! Line document — the fundamental unit of text storage.
//!
//! A `Document` is an ordered list of lines. Each line is a `String` without
//! its terminator; line breaks exist only *between* entries. The editor never
//! creates or removes line breaks through editing, so a flat `Vec<String>`
//! is all the structure we need.
//!
//! # Invariants
//!
//! - There is always at least one line. Every constructor and
//!   [`load_lines`](Document::load_lines) restore this when handed an empty
//!   sequence.
//! - Columns are char offsets. Byte offsets never leak into the public API.
//!
//! Row arguments must be in range (`row < line_count()`); the cursor layer
//! guarantees that. Column arguments past the end of a line are clamped to
//! the line length rather than rejected.

/// An ordered sequence of text lines. Never empty.
///
/// `Clone` produces a deep, independent copy. That is exactly what the
/// undo/redo history stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    // -- Construction -------------------------------------------------------

    /// A document holding one empty line.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Build a document from a sequence of lines. An empty sequence yields a
    /// single empty line.
    #[must_use]
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut doc = Self { lines: Vec::new() };
        doc.load_lines(lines);
        doc
    }

    /// Split `text` on `\n` the way a line reader does: a trailing newline
    /// terminates the last line instead of opening a new one.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(split_lines(text))
    }

    // -- Access -------------------------------------------------------------

    /// Number of lines. Always at least 1.
    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The content of `row`, or `None` past the end.
    #[inline]
    #[must_use]
    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(String::as_str)
    }

    /// Length of `row` in chars, or `None` past the end.
    #[must_use]
    pub fn line_len(&self, row: usize) -> Option<usize> {
        self.lines.get(row).map(|l| l.chars().count())
    }

    /// All lines, in order.
    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines `start..end`, with `end` clipped to the line count. Returns an
    /// empty slice when `start` is past the end.
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> &[String] {
        let end = end.min(self.lines.len());
        let start = start.min(end);
        &self.lines[start..end]
    }

    /// A copy of every line, for persistence.
    #[must_use]
    pub fn dump_lines(&self) -> Vec<String> {
        self.lines.clone()
    }

    // -- Whole-document replacement -----------------------------------------

    /// Replace the entire content. The previous lines are discarded in one
    /// step; an empty sequence leaves a single empty line.
    pub fn load_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut fresh: Vec<String> = lines.into_iter().map(Into::into).collect();
        if fresh.is_empty() {
            fresh.push(String::new());
        }
        self.lines = fresh;
    }

    // -- Editing ------------------------------------------------------------

    /// Replace the whole content of `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= line_count()`.
    pub fn set_line(&mut self, row: usize, line: impl Into<String>) {
        self.lines[row] = line.into();
    }

    /// Insert `ch` before the char at `col`. A column past the end appends.
    ///
    /// # Panics
    ///
    /// Panics if `row >= line_count()`.
    pub fn insert_char(&mut self, row: usize, col: usize, ch: char) {
        let line = &mut self.lines[row];
        let idx = byte_offset(line, col);
        line.insert(idx, ch);
    }

    /// Overwrite the char at `col` with `ch`. At or past the end of the line
    /// there is nothing to overwrite, so `ch` is appended instead.
    ///
    /// # Panics
    ///
    /// Panics if `row >= line_count()`.
    pub fn overwrite_char(&mut self, row: usize, col: usize, ch: char) {
        let line = &mut self.lines[row];
        let start = byte_offset(line, col);
        let old = line[start..].chars().next();
        match old {
            Some(old) => {
                let mut utf8 = [0; 4];
                line.replace_range(start..start + old.len_utf8(), ch.encode_utf8(&mut utf8));
            }
            None => line.push(ch),
        }
    }

    /// Remove the char immediately before `col` and return it. Column 0 has
    /// nothing before it on this line: returns `None` and never touches the
    /// previous line.
    ///
    /// # Panics
    ///
    /// Panics if `row >= line_count()`.
    pub fn delete_before(&mut self, row: usize, col: usize) -> Option<char> {
        let line = &mut self.lines[row];
        let col = col.min(line.chars().count());
        if col == 0 {
            return None;
        }
        let idx = byte_offset(line, col - 1);
        Some(line.remove(idx))
    }

    /// Replace every non-overlapping occurrence of `target` with
    /// `replacement`, line by line. Returns the number of replacements.
    ///
    /// After each replacement the scan resumes just past the inserted text,
    /// so a replacement that contains `target` is never rescanned. An empty
    /// `target` matches nothing.
    pub fn replace_all(&mut self, target: &str, replacement: &str) -> usize {
        if target.is_empty() {
            return 0;
        }
        self.lines
            .iter_mut()
            .map(|line| replace_in_line(line, target, replacement))
            .sum()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Convert a char column to a byte index in `line`. Columns past the end map
/// to `line.len()`.
#[must_use]
pub fn byte_offset(line: &str, col: usize) -> usize {
    line.char_indices().nth(col).map_or(line.len(), |(idx, _)| idx)
}

/// Convert a byte index in `line` to a char column.
#[must_use]
pub fn char_col(line: &str, byte_idx: usize) -> usize {
    line[..byte_idx].chars().count()
}

/// Split text into lines, treating `\n` as a terminator.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let body = text.strip_suffix('\n').unwrap_or(text);
    let empty = text.is_empty();
    body.split('\n').filter(move |_| !empty)
}

fn replace_in_line(line: &mut String, target: &str, replacement: &str) -> usize {
    let mut count = 0;
    let mut from = 0;
    while let Some(found) = line[from..].find(target) {
        let start = from + found;
        line.replace_range(start..start + target.len(), replacement);
        from = start + replacement.len();
        count += 1;
    }
    count
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn doc(lines: &[&str]) -> Document {
        Document::from_lines(lines.iter().copied())
    }

    // -- Construction -------------------------------------------------------

    #[test]
    fn new_has_one_empty_line() {
        let d = Document::new();
        assert_eq!(d.line_count(), 1);
        assert_eq!(d.line(0), Some(""));
    }

    #[test]
    fn from_empty_sequence_keeps_one_line() {
        let d = Document::from_lines(Vec::<String>::new());
        assert_eq!(d.lines(), &[String::new()]);
    }

    #[test]
    fn from_text_trailing_newline_terminates() {
        let d = Document::from_text("a\nb\n");
        assert_eq!(d.dump_lines(), vec!["a", "b"]);
    }

    #[test]
    fn from_text_without_trailing_newline() {
        let d = Document::from_text("a\nb");
        assert_eq!(d.dump_lines(), vec!["a", "b"]);
    }

    #[test]
    fn from_text_keeps_blank_lines() {
        let d = Document::from_text("a\n\n\nb\n\n");
        assert_eq!(d.dump_lines(), vec!["a", "", "", "b", ""]);
    }

    #[test]
    fn from_text_empty_is_single_empty_line() {
        assert_eq!(Document::from_text("").line_count(), 1);
        assert_eq!(Document::from_text("\n").dump_lines(), vec![""]);
    }

    // -- Access -------------------------------------------------------------

    #[test]
    fn line_out_of_bounds() {
        let d = doc(&["one"]);
        assert_eq!(d.line(1), None);
        assert_eq!(d.line_len(1), None);
    }

    #[test]
    fn line_len_counts_chars() {
        let d = doc(&["café", "日本"]);
        assert_eq!(d.line_len(0), Some(4));
        assert_eq!(d.line_len(1), Some(2));
    }

    #[test]
    fn slice_clips_end() {
        let d = doc(&["a", "b", "c"]);
        assert_eq!(d.slice(1, 10), &["b".to_string(), "c".to_string()]);
        assert!(d.slice(5, 8).is_empty());
    }

    // -- Load ---------------------------------------------------------------

    #[test]
    fn load_replaces_everything() {
        let mut d = doc(&["old", "content", "here"]);
        d.load_lines(["new"]);
        assert_eq!(d.dump_lines(), vec!["new"]);
    }

    #[test]
    fn load_empty_restores_invariant() {
        let mut d = doc(&["x"]);
        d.load_lines(Vec::<&str>::new());
        assert_eq!(d.line_count(), 1);
        assert_eq!(d.line(0), Some(""));
    }

    // -- Insert / overwrite -------------------------------------------------

    #[test]
    fn insert_in_middle() {
        let mut d = doc(&["hllo"]);
        d.insert_char(0, 1, 'e');
        assert_eq!(d.line(0), Some("hello"));
    }

    #[test]
    fn insert_at_end_appends() {
        let mut d = doc(&["ab"]);
        d.insert_char(0, 2, 'c');
        assert_eq!(d.line(0), Some("abc"));
    }

    #[test]
    fn insert_past_end_clamps() {
        let mut d = doc(&["ab"]);
        d.insert_char(0, 40, 'c');
        assert_eq!(d.line(0), Some("abc"));
    }

    #[test]
    fn insert_after_multibyte() {
        let mut d = doc(&["日本"]);
        d.insert_char(0, 1, 'x');
        assert_eq!(d.line(0), Some("日x本"));
    }

    #[test]
    fn overwrite_replaces_char() {
        let mut d = doc(&["cat"]);
        d.overwrite_char(0, 1, 'u');
        assert_eq!(d.line(0), Some("cut"));
    }

    #[test]
    fn overwrite_multibyte_with_ascii() {
        let mut d = doc(&["café"]);
        d.overwrite_char(0, 3, 'e');
        assert_eq!(d.line(0), Some("cafe"));
    }

    #[test]
    fn overwrite_empty_line_appends() {
        let mut d = doc(&[""]);
        d.overwrite_char(0, 0, 'z');
        assert_eq!(d.line(0), Some("z"));
    }

    #[test]
    fn overwrite_at_end_appends() {
        let mut d = doc(&["ab"]);
        d.overwrite_char(0, 2, 'c');
        assert_eq!(d.line(0), Some("abc"));
    }

    #[test]
    fn set_line_replaces_row() {
        let mut d = doc(&["a", "b"]);
        d.set_line(1, "bee");
        assert_eq!(d.dump_lines(), vec!["a", "bee"]);
    }

    // -- Delete -------------------------------------------------------------

    #[test]
    fn delete_before_removes_previous_char() {
        let mut d = doc(&["hello"]);
        assert_eq!(d.delete_before(0, 5), Some('o'));
        assert_eq!(d.line(0), Some("hell"));
    }

    #[test]
    fn delete_before_col_zero_is_noop() {
        let mut d = doc(&["first", "second"]);
        assert_eq!(d.delete_before(1, 0), None);
        assert_eq!(d.dump_lines(), vec!["first", "second"]);
    }

    #[test]
    fn delete_before_past_end_uses_line_end() {
        let mut d = doc(&["ab"]);
        assert_eq!(d.delete_before(0, 9), Some('b'));
        assert_eq!(d.line(0), Some("a"));
    }

    // -- Replace ------------------------------------------------------------

    #[test]
    fn replace_growing_replacement() {
        let mut d = doc(&["aaa"]);
        assert_eq!(d.replace_all("a", "bb"), 3);
        assert_eq!(d.line(0), Some("bbbbbb"));
    }

    #[test]
    fn replace_replacement_contains_target() {
        let mut d = doc(&["a-a"]);
        assert_eq!(d.replace_all("a", "aa"), 2);
        assert_eq!(d.line(0), Some("aa-aa"));
    }

    #[test]
    fn replace_non_overlapping() {
        let mut d = doc(&["aaaa"]);
        assert_eq!(d.replace_all("aa", "x"), 2);
        assert_eq!(d.line(0), Some("xx"));
    }

    #[test]
    fn replace_with_empty_deletes() {
        let mut d = doc(&["a,b,c"]);
        assert_eq!(d.replace_all(",", ""), 2);
        assert_eq!(d.line(0), Some("abc"));
    }

    #[test]
    fn replace_across_all_lines() {
        let mut d = doc(&["foo bar", "bar", "baz"]);
        assert_eq!(d.replace_all("bar", "qux"), 2);
        assert_eq!(d.dump_lines(), vec!["foo qux", "qux", "baz"]);
    }

    #[test]
    fn replace_empty_target_matches_nothing() {
        let mut d = doc(&["abc"]);
        assert_eq!(d.replace_all("", "x"), 0);
        assert_eq!(d.line(0), Some("abc"));
    }

    // -- Snapshots ----------------------------------------------------------

    #[test]
    fn clone_is_independent() {
        let mut d = doc(&["abc"]);
        let snapshot = d.clone();
        d.insert_char(0, 0, '!');
        assert_eq!(snapshot.line(0), Some("abc"));
        assert_eq!(d.line(0), Some("!abc"));
    }

    // -- Helpers ------------------------------------------------------------

    #[test]
    fn byte_offset_and_char_col_agree() {
        let line = "aé日b";
        for col in 0..=4 {
            assert_eq!(char_col(line, byte_offset(line, col)), col);
        }
        assert_eq!(byte_offset(line, 10), line.len());
    }
}
