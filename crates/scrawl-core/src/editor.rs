//! Editor state — the single owner of everything the core knows.
//!
//! [`EditorState`] ties the document, cursor, viewport, mode and history
//! together and implements every command. The adapter holds one instance,
//! feeds it [`Command`]s through [`apply`](EditorState::apply), and asks for
//! a [`RenderModel`] after each one.
//!
//! # Invariants kept after every command
//!
//! - the document has at least one line
//! - `cursor.row < line_count`
//! - the viewport contains the cursor row and is exactly `rows` tall
//! - with column clamping on, the cursor column is within the mode limit of
//!   its line
//!
//! # Snapshots
//!
//! Insert, delete and replace push a snapshot before touching the document,
//! even when they end up changing nothing (delete at column 0, replace with
//! no match), so one undo always reverts exactly one command. A paste is one
//! command and one snapshot. Moves, search, save and load never push.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::command::{Command, Outcome};
use crate::cursor::Cursor;
use crate::document::Document;
use crate::error::{Error, Result};
use crate::history::History;
use crate::mode::Mode;
use crate::options::Options;
use crate::persist;
use crate::position::Position;
use crate::render::RenderModel;
use crate::search::find_forward;
use crate::viewport::Viewport;

/// Content shown when the editor starts without a file.
pub const WELCOME: [&str; 3] = [
    "Welcome to scrawl! This is a sample text.",
    "Press Ctrl-Q to quit, Ctrl-S to save, Ctrl-O to load, Ctrl-F to find, Ctrl-R to replace.",
    "Use arrow keys to navigate. Press Insert or Ctrl-T to toggle insert mode.",
];

/// The whole editing session.
#[derive(Debug)]
pub struct EditorState {
    doc: Document,
    cursor: Cursor,
    viewport: Viewport,
    mode: Mode,
    history: History,
    options: Options,
    path: Option<PathBuf>,
    modified: bool,
    /// Content as of the last save or load; undo and redo compare against
    /// it to decide `modified`.
    saved: Document,
    /// Query and position of the last successful search, for find-next.
    last_match: Option<(String, Position)>,
}

impl EditorState {
    /// A session over `doc` with a viewport of `rows` text rows.
    #[must_use]
    pub fn new(doc: Document, rows: usize, options: Options) -> Self {
        let history = if options.clear_redo_on_edit {
            History::with_redo_invalidation()
        } else {
            History::new()
        };
        Self {
            saved: doc.clone(),
            doc,
            cursor: Cursor::new(),
            viewport: Viewport::new(rows),
            mode: Mode::from_insert(options.insert_mode),
            history,
            options,
            path: None,
            modified: false,
            last_match: None,
        }
    }

    /// A session showing the welcome text.
    #[must_use]
    pub fn welcome(rows: usize, options: Options) -> Self {
        Self::new(Document::from_lines(WELCOME), rows, options)
    }

    /// A session for `path`. A missing file starts an empty document that
    /// will be written to `path` on save.
    ///
    /// # Errors
    ///
    /// [`Error::Read`] if the file exists but cannot be read.
    pub fn open(path: &Path, rows: usize, options: Options) -> Result<Self> {
        let doc = if path.exists() {
            let mut doc = Document::new();
            doc.load_lines(persist::load(path)?);
            info!(path = %path.display(), lines = doc.line_count(), "opened");
            doc
        } else {
            info!(path = %path.display(), "new file");
            Document::new()
        };
        let mut state = Self::new(doc, rows, options);
        state.path = Some(path.to_path_buf());
        Ok(state)
    }

    // -- Accessors ----------------------------------------------------------

    #[inline]
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.doc
    }

    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Position {
        self.cursor.position()
    }

    #[inline]
    #[must_use]
    pub const fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    #[inline]
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[inline]
    #[must_use]
    pub const fn is_modified(&self) -> bool {
        self.modified
    }

    // -- Dispatch -----------------------------------------------------------

    /// Run one command.
    ///
    /// # Errors
    ///
    /// Whatever the command reports; see the individual methods. Errors
    /// never leave the state inconsistent.
    pub fn apply(&mut self, command: Command) -> Result<Outcome> {
        debug!(command = command.name(), cursor = %self.cursor.position(), "apply");
        let result = match command {
            Command::MoveUp => Ok(self.move_up()),
            Command::MoveDown => Ok(self.move_down()),
            Command::MoveLeft => Ok(self.move_left()),
            Command::MoveRight => Ok(self.move_right()),
            Command::ToggleInsertMode => Ok(self.toggle_insert_mode()),
            Command::DeleteCharacter => Ok(self.delete_character()),
            Command::InsertCharacter(ch) => Ok(self.insert_character(ch)),
            Command::InsertText(text) => Ok(self.insert_text(&text)),
            Command::Save(path) => self.save(&path),
            Command::Load(path) => self.load(&path),
            Command::Find(query) => self.find(&query),
            Command::Replace {
                target,
                replacement,
            } => self.replace(&target, &replacement),
            Command::Undo => self.undo(),
            Command::Redo => self.redo(),
            Command::Quit => Ok(Outcome::Quit),
        };
        if let Err(err) = &result {
            warn!(%err, io = err.is_io(), "command failed");
        }
        result
    }

    // -- Navigation ---------------------------------------------------------

    pub fn move_up(&mut self) -> Outcome {
        self.last_match = None;
        if self
            .cursor
            .move_up(&self.doc, self.mode, self.options.clamp_column)
            && self.cursor.row() < self.viewport.start()
        {
            self.viewport.scroll_up();
        }
        Outcome::Done
    }

    pub fn move_down(&mut self) -> Outcome {
        self.last_match = None;
        if self
            .cursor
            .move_down(&self.doc, self.mode, self.options.clamp_column)
            && self.cursor.row() >= self.viewport.end()
        {
            self.viewport.scroll_down();
        }
        Outcome::Done
    }

    pub fn move_left(&mut self) -> Outcome {
        self.last_match = None;
        self.cursor.move_left();
        Outcome::Done
    }

    pub fn move_right(&mut self) -> Outcome {
        self.last_match = None;
        self.cursor.move_right(&self.doc, self.mode);
        Outcome::Done
    }

    /// Switch between insert and overwrite. Entering overwrite pulls a
    /// cursor sitting at the append position back onto the last char.
    pub fn toggle_insert_mode(&mut self) -> Outcome {
        self.mode = self.mode.toggled();
        if self.mode == Mode::Overwrite {
            self.cursor.clamp_col(&self.doc, self.mode);
        }
        Outcome::Message(format!("-- {} --", self.mode))
    }

    // -- Mutation -----------------------------------------------------------

    /// Type `ch` at the cursor.
    ///
    /// Insert mode shifts the rest of the line right and always advances.
    /// Overwrite mode replaces the char under the cursor (appending at the
    /// end of the line) and advances unless the cursor is on the last char.
    pub fn insert_character(&mut self, ch: char) -> Outcome {
        self.record();
        self.put_char(ch);
        self.modified = true;
        Outcome::Done
    }

    /// Type every char of `text` behind a single snapshot, so one undo
    /// removes all of it. Line breaks are dropped; an empty result records
    /// nothing.
    pub fn insert_text(&mut self, text: &str) -> Outcome {
        let mut chars = text.chars().filter(|c| !matches!(c, '\n' | '\r')).peekable();
        if chars.peek().is_none() {
            return Outcome::Done;
        }
        self.record();
        for ch in chars {
            self.put_char(ch);
        }
        self.modified = true;
        Outcome::Done
    }

    /// Backspace. At column 0 nothing is removed and lines are never
    /// joined, but the snapshot is still recorded.
    pub fn delete_character(&mut self) -> Outcome {
        self.record();
        let row = self.cursor.row();
        let col = self.cursor.effective_col(&self.doc);

        if self.doc.delete_before(row, col).is_some() {
            self.cursor.set_position(Position::new(row, col - 1));
            self.modified = true;
        }
        Outcome::Done
    }

    /// Replace every occurrence of `target` in the document.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTarget`] if `target` is empty; nothing is recorded.
    pub fn replace(&mut self, target: &str, replacement: &str) -> Result<Outcome> {
        if target.is_empty() {
            return Err(Error::EmptyTarget);
        }
        self.record();
        let count = self.doc.replace_all(target, replacement);
        if count > 0 {
            self.modified = true;
        }
        self.settle_cursor();
        info!(from = target, to = replacement, count, "replace");
        Ok(Outcome::Message(format!(
            "Replaced {count} occurrence{}",
            if count == 1 { "" } else { "s" }
        )))
    }

    // -- Search -------------------------------------------------------------

    /// Move the cursor to the next occurrence of `query`.
    ///
    /// Searching again for the same query while the cursor still sits on the
    /// previous match skips that match.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyQuery`] for an empty query, [`Error::NotFound`] if no
    /// occurrence is reachable. The cursor does not move in either case.
    pub fn find(&mut self, query: &str) -> Result<Outcome> {
        if query.is_empty() {
            return Err(Error::EmptyQuery);
        }

        let here = self.cursor.position();
        let mut from = Position::new(here.row, self.cursor.effective_col(&self.doc));
        if self
            .last_match
            .as_ref()
            .is_some_and(|(q, at)| q == query && *at == here)
        {
            from.col += 1;
        }

        let Some(found) = find_forward(&self.doc, query, from) else {
            return Err(Error::NotFound {
                query: query.to_string(),
            });
        };
        self.cursor.set_position(found);
        self.viewport.follow(found.row);
        self.last_match = Some((query.to_string(), found));
        Ok(Outcome::Done)
    }

    // -- History ------------------------------------------------------------

    /// Restore the content before the last edit.
    ///
    /// # Errors
    ///
    /// [`Error::NothingToUndo`] if the undo stack is empty.
    pub fn undo(&mut self) -> Result<Outcome> {
        if !self.history.undo(&mut self.doc) {
            return Err(Error::NothingToUndo);
        }
        self.modified = self.doc != self.saved;
        self.settle_cursor();
        Ok(Outcome::Done)
    }

    /// Re-apply the last undone edit.
    ///
    /// # Errors
    ///
    /// [`Error::NothingToRedo`] if the redo stack is empty.
    pub fn redo(&mut self) -> Result<Outcome> {
        if !self.history.redo(&mut self.doc) {
            return Err(Error::NothingToRedo);
        }
        self.modified = self.doc != self.saved;
        self.settle_cursor();
        Ok(Outcome::Done)
    }

    // -- Files --------------------------------------------------------------

    /// Write the document to `path` and make it the current file.
    ///
    /// # Errors
    ///
    /// [`Error::NoPath`] for an empty path, [`Error::Write`] on I/O failure.
    pub fn save(&mut self, path: &Path) -> Result<Outcome> {
        if path.as_os_str().is_empty() {
            return Err(Error::NoPath);
        }
        persist::save(path, &self.doc)?;
        self.path = Some(path.to_path_buf());
        self.modified = false;
        self.saved.clone_from(&self.doc);

        let lines = self.doc.line_count();
        info!(path = %path.display(), lines, "saved");
        Ok(Outcome::Message(format!(
            "Wrote {lines} line{} to {}",
            if lines == 1 { "" } else { "s" },
            path.display()
        )))
    }

    /// Replace the document with the contents of `path`. Cursor and viewport
    /// go back to the top. The history is kept.
    ///
    /// # Errors
    ///
    /// [`Error::NoPath`] for an empty path, [`Error::Read`] if the file
    /// cannot be read. The session is unchanged on error.
    pub fn load(&mut self, path: &Path) -> Result<Outcome> {
        if path.as_os_str().is_empty() {
            return Err(Error::NoPath);
        }
        let lines = persist::load(path)?;
        self.doc.load_lines(lines);
        self.cursor = Cursor::new();
        self.viewport.reset();
        self.path = Some(path.to_path_buf());
        self.modified = false;
        self.saved.clone_from(&self.doc);
        self.last_match = None;

        let lines = self.doc.line_count();
        info!(path = %path.display(), lines, "loaded");
        Ok(Outcome::Message(format!(
            "Read {lines} line{} from {}",
            if lines == 1 { "" } else { "s" },
            path.display()
        )))
    }

    // -- Display ------------------------------------------------------------

    /// Change the number of text rows. The first visible row stays put
    /// unless the cursor would fall outside the window.
    pub fn resize(&mut self, rows: usize) {
        self.viewport.resize(rows);
        self.viewport.follow(self.cursor.row());
    }

    /// Everything needed to draw the current frame.
    #[must_use]
    pub fn render(&self) -> RenderModel<'_> {
        let abs = self.cursor.position();
        RenderModel {
            lines: self.doc.slice(self.viewport.start(), self.viewport.end()),
            rows: self.viewport.rows(),
            cursor: Position::new(abs.row - self.viewport.start(), abs.col),
            absolute: abs,
            mode: self.mode,
            path: self.path.as_deref(),
            modified: self.modified,
        }
    }

    // -- Internal -----------------------------------------------------------

    fn put_char(&mut self, ch: char) {
        let row = self.cursor.row();
        let col = self.cursor.effective_col(&self.doc);

        let new_col = match self.mode {
            Mode::Insert => {
                self.doc.insert_char(row, col, ch);
                col + 1
            }
            Mode::Overwrite => {
                self.doc.overwrite_char(row, col, ch);
                let last = self.doc.line_len(row).unwrap_or(0).saturating_sub(1);
                if col < last { col + 1 } else { col }
            }
        };
        self.cursor.set_position(Position::new(row, new_col));
    }

    fn record(&mut self) {
        self.history.record(&self.doc);
        self.last_match = None;
    }

    /// Pull the cursor back into the document after its content was swapped
    /// or rewritten, then scroll to it.
    fn settle_cursor(&mut self) {
        self.cursor.clamp(&self.doc, self.mode);
        self.viewport.follow(self.cursor.row());
        self.last_match = None;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
