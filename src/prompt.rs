// SPDX-License-Identifier: MIT
//
// Prompt — the one-line input shown in the message row.
//
// Save, Load and Find ask for one string; Replace asks twice, first for the
// text to look for and then for its replacement. The prompt owns only the
// text being typed. Turning a submitted string into a command is the app's
// job, so this module knows nothing about the editor core.

use scrawl_term::input::{KeyCode, KeyEvent, Modifiers};

/// What the prompt is asking for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    Save,
    Load,
    Find,
    ReplaceTarget,
    /// Second Replace prompt; carries the target from the first.
    ReplaceWith(String),
}

impl PromptKind {
    /// The label drawn before the input.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Save => "Save as: ",
            Self::Load => "Open: ",
            Self::Find => "Find: ",
            Self::ReplaceTarget => "Replace: ",
            Self::ReplaceWith(_) => "With: ",
        }
    }
}

/// Result of feeding a key to the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResult {
    /// Still typing.
    Pending,
    /// Escape: drop the prompt.
    Cancelled,
    /// Enter: the text as typed.
    Submitted(String),
}

/// Text being typed, with a char-indexed cursor.
#[derive(Debug, Clone)]
pub struct Prompt {
    kind: PromptKind,
    input: String,
    cursor: usize,
}

impl Prompt {
    #[must_use]
    pub const fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            input: String::new(),
            cursor: 0,
        }
    }

    /// A prompt pre-filled with `text`, cursor at the end.
    #[must_use]
    pub fn with_text(kind: PromptKind, text: &str) -> Self {
        Self {
            kind,
            input: text.to_string(),
            cursor: text.chars().count(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> &PromptKind {
        &self.kind
    }

    #[inline]
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Cursor position within the input, in chars.
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Handle one key.
    pub fn handle(&mut self, key: &KeyEvent) -> PromptResult {
        match key.code {
            KeyCode::Enter => return PromptResult::Submitted(self.input.clone()),
            KeyCode::Escape => return PromptResult::Cancelled,
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.len(),
            KeyCode::Tab => self.insert_char('\t'),
            KeyCode::Char(ch) if !key.modifiers.intersects(Modifiers::CTRL | Modifiers::ALT) => {
                self.insert_char(ch);
            }
            _ => {}
        }
        PromptResult::Pending
    }

    /// Insert pasted text. Line breaks end a prompt, so they are dropped.
    pub fn insert_str(&mut self, text: &str) {
        for ch in text.chars().filter(|c| !matches!(c, '\n' | '\r')) {
            self.insert_char(ch);
        }
    }

    fn insert_char(&mut self, ch: char) {
        let idx = self.byte_index(self.cursor);
        self.input.insert(idx, ch);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let idx = self.byte_index(self.cursor);
        self.input.remove(idx);
    }

    fn delete(&mut self) {
        if self.cursor < self.len() {
            let idx = self.byte_index(self.cursor);
            self.input.remove(idx);
        }
    }

    fn len(&self) -> usize {
        self.input.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_idx)
            .map_or(self.input.len(), |(i, _)| i)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, Modifiers::empty())
    }

    fn typed(prompt: &mut Prompt, text: &str) {
        for ch in text.chars() {
            prompt.handle(&key(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn typing_and_submit() {
        let mut p = Prompt::new(PromptKind::Find);
        typed(&mut p, "foo");
        assert_eq!(p.input(), "foo");
        assert_eq!(p.handle(&key(KeyCode::Enter)), PromptResult::Submitted("foo".into()));
    }

    #[test]
    fn escape_cancels() {
        let mut p = Prompt::new(PromptKind::Find);
        typed(&mut p, "x");
        assert_eq!(p.handle(&key(KeyCode::Escape)), PromptResult::Cancelled);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut p = Prompt::new(PromptKind::Save);
        p.handle(&key(KeyCode::Backspace));
        assert_eq!(p.input(), "");
        assert_eq!(p.cursor(), 0);
    }

    #[test]
    fn editing_in_the_middle() {
        let mut p = Prompt::with_text(PromptKind::Load, "a.txt");
        assert_eq!(p.cursor(), 5);
        p.handle(&key(KeyCode::Home));
        typed(&mut p, "b");
        assert_eq!(p.input(), "ba.txt");
        p.handle(&key(KeyCode::End));
        p.handle(&key(KeyCode::Left));
        p.handle(&key(KeyCode::Backspace));
        assert_eq!(p.input(), "ba.tt");
        p.handle(&key(KeyCode::Delete));
        assert_eq!(p.input(), "ba.t");
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut p = Prompt::with_text(PromptKind::Find, "ab");
        p.handle(&key(KeyCode::Right));
        assert_eq!(p.cursor(), 2);
        p.handle(&key(KeyCode::Home));
        p.handle(&key(KeyCode::Left));
        assert_eq!(p.cursor(), 0);
    }

    #[test]
    fn multibyte_input() {
        let mut p = Prompt::new(PromptKind::Find);
        typed(&mut p, "héllo");
        p.handle(&key(KeyCode::Left));
        p.handle(&key(KeyCode::Left));
        p.handle(&key(KeyCode::Left));
        p.handle(&key(KeyCode::Backspace));
        assert_eq!(p.input(), "hllo");
    }

    #[test]
    fn ctrl_chars_are_not_typed() {
        let mut p = Prompt::new(PromptKind::Find);
        p.handle(&KeyEvent::new(KeyCode::Char('s'), Modifiers::CTRL));
        assert_eq!(p.input(), "");
    }

    #[test]
    fn paste_drops_line_breaks() {
        let mut p = Prompt::new(PromptKind::Find);
        p.insert_str("a\r\nb");
        assert_eq!(p.input(), "ab");
        assert_eq!(p.cursor(), 2);
    }

    #[test]
    fn labels() {
        assert_eq!(PromptKind::Find.label(), "Find: ");
        assert_eq!(PromptKind::ReplaceWith("x".into()).label(), "With: ");
    }
}
