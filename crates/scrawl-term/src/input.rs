// SPDX-License-Identifier: MIT
//
// Terminal input parser.
//
// Turns raw stdin bytes into key and paste events. Understands what a
// plain xterm-compatible terminal sends in raw mode:
//
// - printable ASCII and UTF-8 multi-byte characters
// - C0 control bytes as Ctrl+letter (plus Tab, Enter, Backspace)
// - CSI sequences for arrows, Home/End, Insert/Delete, PageUp/PageDown,
//   with xterm modifier parameters
// - SS3 arrows and Home/End (application cursor mode)
// - Alt+key as ESC followed by the key
// - bracketed paste, delivered as one event
//
// Sequences can be split across reads, so the parser keeps unconsumed bytes
// between calls to `advance`. A lone ESC stays pending until `flush` is
// called after a read timeout, at which point it becomes the Escape key.

use bitflags::bitflags;

// ─── Events ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    /// Text pasted between `CSI 200~` and `CSI 201~`.
    Paste(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    /// True for Ctrl + `ch` with no other modifier.
    #[must_use]
    pub fn is_ctrl(&self, ch: char) -> bool {
        self.code == KeyCode::Char(ch) && self.modifiers == Modifiers::CTRL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Char(char),
    Enter,
    Tab,
    Backspace,
    Escape,
    Delete,
    Insert,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

bitflags! {
    /// Modifier keys, in the xterm encoding (`param = 1 + bits`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const ALT   = 0b0010;
        const CTRL  = 0b0100;
    }
}

// ─── Parser ──────────────────────────────────────────────────────────────────

const PASTE_START: &[u8] = b"\x1b[200~";
const PASTE_END: &[u8] = b"\x1b[201~";

/// Incremental byte-to-event parser.
#[derive(Debug, Default)]
pub struct Parser {
    buf: Vec<u8>,
    in_paste: bool,
}

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `data` and return every event that is now complete.
    pub fn advance(&mut self, data: &[u8]) -> Vec<Event> {
        self.buf.extend_from_slice(data);
        let mut events = Vec::new();
        let mut pos = 0;

        while pos < self.buf.len() {
            let rest = &self.buf[pos..];

            if self.in_paste {
                let Some(end) = find_subsequence(rest, PASTE_END) else {
                    break;
                };
                events.push(Event::Paste(
                    String::from_utf8_lossy(&rest[..end]).into_owned(),
                ));
                pos += end + PASTE_END.len();
                self.in_paste = false;
                continue;
            }

            if rest.starts_with(PASTE_START) {
                self.in_paste = true;
                pos += PASTE_START.len();
                continue;
            }
            // A prefix of the paste opener: wait for the rest.
            if rest.len() > 2 && PASTE_START.starts_with(rest) {
                break;
            }

            match parse_one(rest) {
                Parsed::Event(event, used) => {
                    events.push(event);
                    pos += used;
                }
                Parsed::Skip(used) => pos += used,
                Parsed::Incomplete => break,
            }
        }

        self.buf.drain(..pos);
        events
    }

    /// True if bytes are waiting for the rest of a sequence.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.buf.is_empty() && !self.in_paste
    }

    /// Give up waiting: a pending ESC becomes Escape, other pending bytes
    /// become their literal keys.
    pub fn flush(&mut self) -> Vec<Event> {
        if self.in_paste {
            return Vec::new();
        }
        let events = self
            .buf
            .iter()
            .filter_map(|&b| match b {
                0x1B => Some(press(KeyCode::Escape)),
                0x20..=0x7E => Some(press(KeyCode::Char(b as char))),
                _ => None,
            })
            .collect();
        self.buf.clear();
        events
    }
}

// ─── Parsing ─────────────────────────────────────────────────────────────────

enum Parsed {
    Event(Event, usize),
    Skip(usize),
    Incomplete,
}

fn parse_one(buf: &[u8]) -> Parsed {
    match buf[0] {
        0x1B => parse_escape(buf),
        0x09 => Parsed::Event(press(KeyCode::Tab), 1),
        0x0A | 0x0D => Parsed::Event(press(KeyCode::Enter), 1),
        0x08 | 0x7F => Parsed::Event(press(KeyCode::Backspace), 1),
        0x00 => Parsed::Event(ctrl(' '), 1),
        b @ 0x01..=0x1A => Parsed::Event(ctrl((b'a' + b - 1) as char), 1),
        b @ 0x20..=0x7E => Parsed::Event(press(KeyCode::Char(b as char)), 1),
        0xC0..=0xF7 => parse_utf8(buf),
        _ => Parsed::Skip(1),
    }
}

fn parse_escape(buf: &[u8]) -> Parsed {
    let Some(&next) = buf.get(1) else {
        return Parsed::Incomplete;
    };
    match next {
        b'[' => parse_csi(buf),
        b'O' => parse_ss3(buf),
        b @ 0x20..=0x7E => Parsed::Event(
            Event::Key(KeyEvent::new(KeyCode::Char(b as char), Modifiers::ALT)),
            2,
        ),
        _ => Parsed::Event(press(KeyCode::Escape), 1),
    }
}

/// `ESC [ params final`. Parameter bytes are `0x30..=0x3F`, the final byte
/// `0x40..=0x7E`.
fn parse_csi(buf: &[u8]) -> Parsed {
    let mut end = 2;
    loop {
        let Some(&b) = buf.get(end) else {
            return Parsed::Incomplete;
        };
        if (0x40..=0x7E).contains(&b) {
            break;
        }
        if !(0x20..=0x3F).contains(&b) {
            return Parsed::Skip(end);
        }
        end += 1;
    }

    let used = end + 1;
    let mut params = buf[2..end].split(|&b| b == b';').map(parse_number);
    let first = params.next().unwrap_or(0);
    let modifiers = decode_modifiers(params.next().unwrap_or(0));

    let code = match buf[end] {
        b'A' => KeyCode::Up,
        b'B' => KeyCode::Down,
        b'C' => KeyCode::Right,
        b'D' => KeyCode::Left,
        b'H' => KeyCode::Home,
        b'F' => KeyCode::End,
        b'~' => match first {
            1 | 7 => KeyCode::Home,
            2 => KeyCode::Insert,
            3 => KeyCode::Delete,
            4 | 8 => KeyCode::End,
            5 => KeyCode::PageUp,
            6 => KeyCode::PageDown,
            _ => return Parsed::Skip(used),
        },
        _ => return Parsed::Skip(used),
    };
    Parsed::Event(Event::Key(KeyEvent::new(code, modifiers)), used)
}

fn parse_ss3(buf: &[u8]) -> Parsed {
    let Some(&b) = buf.get(2) else {
        return Parsed::Incomplete;
    };
    let code = match b {
        b'A' => KeyCode::Up,
        b'B' => KeyCode::Down,
        b'C' => KeyCode::Right,
        b'D' => KeyCode::Left,
        b'H' => KeyCode::Home,
        b'F' => KeyCode::End,
        _ => return Parsed::Skip(3),
    };
    Parsed::Event(press(code), 3)
}

fn parse_utf8(buf: &[u8]) -> Parsed {
    let len = match buf[0] {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        _ => 4,
    };
    if buf.len() < len {
        return Parsed::Incomplete;
    }
    match std::str::from_utf8(&buf[..len]) {
        Ok(s) => s
            .chars()
            .next()
            .map_or(Parsed::Skip(len), |ch| Parsed::Event(press(KeyCode::Char(ch)), len)),
        Err(_) => Parsed::Skip(1),
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

const fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, Modifiers::empty()))
}

const fn ctrl(ch: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(ch), Modifiers::CTRL))
}

fn parse_number(digits: &[u8]) -> u16 {
    digits
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .fold(0u16, |n, b| n.saturating_mul(10).saturating_add(u16::from(b - b'0')))
}

/// xterm sends `1 + bits`; 0 and 1 both mean "no modifiers".
#[allow(clippy::cast_possible_truncation)]
const fn decode_modifiers(param: u16) -> Modifiers {
    Modifiers::from_bits_truncate(param.saturating_sub(1) as u8)
}

fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
