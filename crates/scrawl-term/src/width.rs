// SPDX-License-Identifier: MIT
//
// Display widths.
//
// A document column counts chars; a screen column counts cells. The two
// differ for tabs (which advance to the next tab stop), wide CJK and emoji
// characters (two cells), zero-width marks (none) and control characters,
// which are shown in caret notation (`^M` for `\r`) so they can never move
// the real terminal cursor.

use unicode_width::UnicodeWidthChar;

/// Cells `ch` occupies when it starts at screen column `col`.
#[must_use]
pub fn char_width(ch: char, col: usize, tab_stop: usize) -> usize {
    match ch {
        '\t' => {
            let stop = tab_stop.max(1);
            stop - col % stop
        }
        c if c.is_control() => caret(c).map_or(1, |_| 2),
        c => c.width().unwrap_or(0),
    }
}

/// Screen column at which char column `char_col` of `line` starts.
#[must_use]
pub fn display_col(line: &str, char_col: usize, tab_stop: usize) -> usize {
    line.chars()
        .take(char_col)
        .fold(0, |col, ch| col + char_width(ch, col, tab_stop))
}

/// Expand `line` into exactly what the screen shows between screen columns
/// `skip` and `skip + width`: tabs become spaces, control chars become caret
/// pairs, and a wide char cut by either edge becomes spaces.
#[must_use]
pub fn visible_slice(line: &str, skip: usize, width: usize, tab_stop: usize) -> String {
    let end = skip + width;
    let mut out = String::with_capacity(width);
    let mut col = 0;

    for ch in line.chars() {
        if col >= end {
            break;
        }
        let w = char_width(ch, col, tab_stop);
        let next = col + w;

        if col >= skip && next <= end {
            push_glyph(&mut out, ch, w);
        } else if next > skip {
            // Straddles an edge: pad the part that is on screen.
            let from = col.max(skip);
            let to = next.min(end);
            out.extend(std::iter::repeat_n(' ', to - from));
        }
        col = next;
    }
    out
}

/// Cells `text` occupies, for text that has already been expanded.
#[must_use]
pub fn str_width(text: &str) -> usize {
    text.chars().map(|c| c.width().unwrap_or(0)).sum()
}

/// Longest prefix of `text` that fits in `width` cells.
#[must_use]
pub fn truncate(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            return &text[..idx];
        }
        used += w;
    }
    text
}

fn push_glyph(out: &mut String, ch: char, width: usize) {
    match ch {
        '\t' => out.extend(std::iter::repeat_n(' ', width)),
        c if c.is_control() => match caret(c) {
            Some(letter) => {
                out.push('^');
                out.push(letter);
            }
            None => out.push('?'),
        },
        c => out.push(c),
    }
}

/// The caret-notation letter for C0 controls and DEL.
fn caret(ch: char) -> Option<char> {
    let code = u32::from(ch);
    match code {
        0..=0x1F | 0x7F => char::from_u32(code ^ 0x40),
        _ => None,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Widths ──────────────────────────────────────────────────────

    #[test]
    fn tab_advances_to_next_stop() {
        assert_eq!(char_width('\t', 0, 4), 4);
        assert_eq!(char_width('\t', 1, 4), 3);
        assert_eq!(char_width('\t', 4, 4), 4);
        assert_eq!(char_width('\t', 3, 0), 1);
    }

    #[test]
    fn wide_and_control_chars() {
        assert_eq!(char_width('世', 0, 4), 2);
        assert_eq!(char_width('a', 0, 4), 1);
        assert_eq!(char_width('\r', 0, 4), 2);
        assert_eq!(char_width('\u{301}', 0, 4), 0);
    }

    #[test]
    fn display_col_expands_tabs() {
        assert_eq!(display_col("\tab", 0, 4), 0);
        assert_eq!(display_col("\tab", 1, 4), 4);
        assert_eq!(display_col("a\tb", 2, 4), 4);
        assert_eq!(display_col("世x", 1, 4), 2);
    }

    #[test]
    fn display_col_past_end_stops_at_line_width() {
        assert_eq!(display_col("ab", 10, 4), 2);
    }

    // ── Visible slice ───────────────────────────────────────────────

    #[test]
    fn slice_clips_right_edge() {
        assert_eq!(visible_slice("hello world", 0, 5, 4), "hello");
    }

    #[test]
    fn slice_skips_left_columns() {
        assert_eq!(visible_slice("hello world", 6, 10, 4), "world");
    }

    #[test]
    fn slice_expands_tabs() {
        assert_eq!(visible_slice("a\tb", 0, 10, 4), "a   b");
    }

    #[test]
    fn slice_pads_wide_char_cut_by_edges() {
        assert_eq!(visible_slice("a世b", 0, 2, 4), "a ");
        assert_eq!(visible_slice("a世b", 2, 5, 4), " b");
    }

    #[test]
    fn slice_shows_controls_as_carets() {
        assert_eq!(visible_slice("ab\r", 0, 10, 4), "ab^M");
        assert_eq!(visible_slice("\x7f", 0, 10, 4), "^?");
    }

    // ── Truncate ────────────────────────────────────────────────────

    #[test]
    fn truncate_respects_wide_chars() {
        assert_eq!(truncate("ab世c", 3), "ab");
        assert_eq!(truncate("ab世c", 4), "ab世");
        assert_eq!(truncate("abc", 10), "abc");
        assert_eq!(str_width("ab世"), 4);
    }
}
