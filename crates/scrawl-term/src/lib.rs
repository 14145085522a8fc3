// SPDX-License-Identifier: MIT
//
// scrawl-term — Terminal frontend plumbing for scrawl.
//
// Raw termios and hand-written ANSI output, no TUI framework. The pieces:
// `terminal` owns raw mode and the alternate screen, `input` parses key
// bytes, `width` maps chars to screen cells, `frame` holds one screen of
// rows, `render` diffs frames row by row, and `event_loop` ties them to an
// `App`.

pub mod ansi;
pub mod event_loop;
pub mod frame;
pub mod input;
pub mod render;
pub mod terminal;
pub mod width;
