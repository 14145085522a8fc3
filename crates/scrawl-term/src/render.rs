// SPDX-License-Identifier: MIT
//
// Row-diff renderer.
//
// Compares each frame with the previous one and redraws only the rows that
// changed. A keystroke usually touches the edited row and the status bar, so
// most frames are two short writes. The whole frame is wrapped in
// synchronized output and collected in memory so it reaches the terminal in
// one write.

use std::io::{self, Write};

use crate::ansi;
use crate::frame::{Frame, Row, Style};

/// Remembers the last frame drawn.
#[derive(Debug, Default)]
pub struct Renderer {
    previous: Option<Frame>,
}

impl Renderer {
    #[must_use]
    pub const fn new() -> Self {
        Self { previous: None }
    }

    /// Forget the last frame so the next render repaints everything.
    pub fn force_redraw(&mut self) {
        self.previous = None;
    }

    /// Draw `frame`, then park the cursor at `cursor` (`(x, y)`) or keep it
    /// hidden. Returns the number of rows redrawn.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn render(
        &mut self,
        frame: &Frame,
        cursor: Option<(u16, u16)>,
        out: &mut impl Write,
    ) -> io::Result<usize> {
        let mut buf = Vec::with_capacity(frame.width() * 4);
        ansi::begin_sync(&mut buf)?;
        ansi::cursor_hide(&mut buf)?;

        let previous = self
            .previous
            .as_ref()
            .filter(|prev| prev.size() == frame.size());
        if previous.is_none() {
            ansi::clear_screen(&mut buf)?;
        }

        let mut drawn = 0;
        for (y, row) in frame.rows().iter().enumerate() {
            if previous.and_then(|p| p.row(y)) == Some(row) {
                continue;
            }
            draw_row(&mut buf, y, row, frame.width())?;
            drawn += 1;
        }

        if let Some((x, y)) = cursor {
            ansi::cursor_to(&mut buf, x, y)?;
            ansi::cursor_show(&mut buf)?;
        }
        ansi::end_sync(&mut buf)?;

        out.write_all(&buf)?;
        out.flush()?;

        match &mut self.previous {
            Some(prev) if prev.size() == frame.size() => prev.clone_from(frame),
            slot => *slot = Some(frame.clone()),
        }
        Ok(drawn)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn draw_row(buf: &mut Vec<u8>, y: usize, row: &Row, width: usize) -> io::Result<()> {
    ansi::cursor_to(buf, 0, y as u16)?;
    match row.style {
        Style::Plain => {
            buf.extend_from_slice(row.text.as_bytes());
            ansi::clear_to_eol(buf)?;
        }
        Style::Inverse => {
            ansi::inverse(buf)?;
            buf.extend_from_slice(row.text.as_bytes());
            let used = crate::width::str_width(&row.text);
            buf.extend(std::iter::repeat_n(b' ', width.saturating_sub(used)));
            ansi::reset(buf)?;
        }
    }
    Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
