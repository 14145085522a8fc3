// SPDX-License-Identifier: MIT
#![allow(unsafe_code)]
//
// Event loop — read keys, hand them to the app, redraw.
//
// The loop is single-threaded. Each iteration polls stdin with a timeout,
// parses whatever arrived, lets the application handle every event in
// order, and repaints once if anything changed. One input event is fully
// handled before the next frame is drawn.
//
// # Timeouts
//
// While the parser holds a lone ESC, the poll timeout drops to
// `escape_timeout_ms`; if nothing follows, the ESC is flushed as the Escape
// key. Otherwise the loop wakes every `idle_timeout_ms` to notice resizes.
//
// # SIGWINCH
//
// A signal handler sets an `AtomicBool`. The signal also interrupts `poll`,
// so a resize is picked up on the very next iteration: the size is
// re-queried, the frame reallocated, and the renderer forced to repaint.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::frame::Frame;
use crate::input::{Event, Parser};
use crate::render::Renderer;
use crate::terminal::{Size, Terminal};

// ─── SIGWINCH ────────────────────────────────────────────────────────────────

static SIGWINCH_RECEIVED: AtomicBool = AtomicBool::new(false);

#[cfg(unix)]
fn install_sigwinch_handler() {
    unsafe {
        let mut sa: libc::sigaction = std::mem::zeroed();
        sa.sa_sigaction = sigwinch_handler as *const () as usize;
        sa.sa_flags = 0;
        libc::sigemptyset(&raw mut sa.sa_mask);
        libc::sigaction(libc::SIGWINCH, &raw const sa, std::ptr::null_mut());
    }
}

#[cfg(unix)]
extern "C" fn sigwinch_handler(_sig: libc::c_int) {
    SIGWINCH_RECEIVED.store(true, Ordering::Relaxed);
}

#[cfg(not(unix))]
fn install_sigwinch_handler() {}

// ─── App ─────────────────────────────────────────────────────────────────────

/// What the app wants after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

/// The application side of the loop.
pub trait App {
    /// Handle one input event.
    fn on_event(&mut self, event: &Event) -> Action;

    /// The terminal changed size. Called once before the first paint too.
    fn on_resize(&mut self, _size: Size) {}

    /// Paint the whole UI into `frame`, which has been cleared.
    fn paint(&mut self, frame: &mut Frame);

    /// Where to show the hardware cursor after painting, or `None` to hide
    /// it.
    fn cursor(&self) -> Option<(u16, u16)> {
        None
    }
}

/// Hand `events` to `app` in order, stopping at the first `Quit`.
pub fn deliver(app: &mut impl App, events: &[Event]) -> Action {
    for event in events {
        if app.on_event(event) == Action::Quit {
            return Action::Quit;
        }
    }
    Action::Continue
}

// ─── Config ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopConfig {
    /// How long a lone ESC waits for the rest of a sequence.
    pub escape_timeout_ms: i32,
    /// Poll timeout when nothing is pending.
    pub idle_timeout_ms: i32,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            escape_timeout_ms: 25,
            idle_timeout_ms: 250,
        }
    }
}

// ─── EventLoop ───────────────────────────────────────────────────────────────

/// Owns the terminal, the input parser and the renderer.
pub struct EventLoop {
    terminal: Terminal,
    parser: Parser,
    renderer: Renderer,
    config: LoopConfig,
}

impl EventLoop {
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be initialized.
    pub fn new() -> io::Result<Self> {
        Self::with_config(LoopConfig::default())
    }

    /// # Errors
    ///
    /// Returns an error if the terminal cannot be initialized.
    pub fn with_config(config: LoopConfig) -> io::Result<Self> {
        Ok(Self {
            terminal: Terminal::new()?,
            parser: Parser::new(),
            renderer: Renderer::new(),
            config,
        })
    }

    #[inline]
    #[must_use]
    pub const fn size(&self) -> Size {
        self.terminal.size()
    }

    /// Take over the terminal and run until the app quits or stdin closes.
    /// The terminal is restored on every exit path.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup, input or output fails.
    pub fn run(&mut self, app: &mut impl App) -> io::Result<()> {
        self.terminal.enter()?;
        install_sigwinch_handler();

        let result = self.run_inner(app);
        let left = self.terminal.leave();
        result.and(left)
    }

    fn run_inner(&mut self, app: &mut impl App) -> io::Result<()> {
        let mut frame = Frame::new(self.terminal.size());
        app.on_resize(frame.size());
        let mut dirty = true;
        let mut buf = [0u8; 4096];

        loop {
            if dirty {
                frame.clear();
                app.paint(&mut frame);
                self.renderer
                    .render(&frame, app.cursor(), &mut io::stdout().lock())?;
                dirty = false;
            }

            let timeout = if self.parser.has_pending() {
                self.config.escape_timeout_ms
            } else {
                self.config.idle_timeout_ms
            };

            let events = match read_stdin(&mut buf, timeout)? {
                Input::Bytes(n) => self.parser.advance(&buf[..n]),
                Input::Timeout if self.parser.has_pending() => self.parser.flush(),
                Input::Timeout => Vec::new(),
                Input::Eof => return Ok(()),
            };
            if !events.is_empty() {
                dirty = true;
                if deliver(app, &events) == Action::Quit {
                    return Ok(());
                }
            }

            if SIGWINCH_RECEIVED.swap(false, Ordering::Relaxed) {
                let size = self.terminal.refresh_size();
                frame.resize(size);
                self.renderer.force_redraw();
                app.on_resize(size);
                dirty = true;
            }
        }
    }
}

// ─── Stdin ───────────────────────────────────────────────────────────────────

enum Input {
    Bytes(usize),
    Timeout,
    Eof,
}

/// Wait up to `timeout_ms` for stdin, then read what is there.
#[cfg(unix)]
fn read_stdin(buf: &mut [u8], timeout_ms: i32) -> io::Result<Input> {
    let mut pfd = libc::pollfd {
        fd: libc::STDIN_FILENO,
        events: libc::POLLIN,
        revents: 0,
    };
    let ready = unsafe { libc::poll(&raw mut pfd, 1, timeout_ms) };
    if ready < 0 {
        let err = io::Error::last_os_error();
        // SIGWINCH interrupts poll.
        return if err.kind() == io::ErrorKind::Interrupted {
            Ok(Input::Timeout)
        } else {
            Err(err)
        };
    }
    if ready == 0 {
        return Ok(Input::Timeout);
    }

    let n = unsafe { libc::read(libc::STDIN_FILENO, buf.as_mut_ptr().cast(), buf.len()) };
    match n {
        0 => Ok(Input::Eof),
        #[allow(clippy::cast_sign_loss)]
        n if n > 0 => Ok(Input::Bytes(n as usize)),
        _ => {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                Ok(Input::Timeout)
            } else {
                Err(err)
            }
        }
    }
}

#[cfg(not(unix))]
fn read_stdin(buf: &mut [u8], _timeout_ms: i32) -> io::Result<Input> {
    use std::io::Read;
    match io::stdin().read(buf)? {
        0 => Ok(Input::Eof),
        n => Ok(Input::Bytes(n)),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{KeyCode, KeyEvent, Modifiers};

    /// Records keys and quits on `q`.
    #[derive(Default)]
    struct Recorder {
        seen: Vec<char>,
    }

    impl App for Recorder {
        fn on_event(&mut self, event: &Event) -> Action {
            if let Event::Key(KeyEvent {
                code: KeyCode::Char(c),
                ..
            }) = event
            {
                self.seen.push(*c);
                if *c == 'q' {
                    return Action::Quit;
                }
            }
            Action::Continue
        }

        fn paint(&mut self, _frame: &mut Frame) {}
    }

    fn chars(s: &str) -> Vec<Event> {
        s.chars()
            .map(|c| Event::Key(KeyEvent::new(KeyCode::Char(c), Modifiers::empty())))
            .collect()
    }

    #[test]
    fn deliver_handles_events_in_order() {
        let mut app = Recorder::default();
        assert_eq!(deliver(&mut app, &chars("abc")), Action::Continue);
        assert_eq!(app.seen, vec!['a', 'b', 'c']);
    }

    #[test]
    fn deliver_stops_at_quit() {
        let mut app = Recorder::default();
        assert_eq!(deliver(&mut app, &chars("aqz")), Action::Quit);
        assert_eq!(app.seen, vec!['a', 'q']);
    }

    #[test]
    fn default_cursor_is_hidden() {
        assert!(Recorder::default().cursor().is_none());
    }

    #[test]
    fn default_config() {
        let config = LoopConfig::default();
        assert!(config.escape_timeout_ms < config.idle_timeout_ms);
    }

    #[test]
    fn event_loop_new_has_size() {
        let event_loop = EventLoop::new().unwrap();
        assert!(event_loop.size().cols > 0);
        assert!(event_loop.size().rows > 0);
    }

    #[test]
    fn sigwinch_flag_swap() {
        SIGWINCH_RECEIVED.store(true, Ordering::Relaxed);
        assert!(SIGWINCH_RECEIVED.swap(false, Ordering::Relaxed));
        assert!(!SIGWINCH_RECEIVED.load(Ordering::Relaxed));
    }
}
