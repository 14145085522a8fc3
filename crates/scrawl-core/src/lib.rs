//! # scrawl-core — Editor core for scrawl
//!
//! Everything the editor knows, with no knowledge of the terminal:
//!
//! - **[`position`]** — `Position` (row, col), 0-indexed, char columns
//! - **[`document`]** — `Document`, the ordered list of lines
//! - **[`mode`]** — insert vs. overwrite editing
//! - **[`cursor`]** — cursor with bounded single-step movement
//! - **[`viewport`]** — the window of visible rows
//! - **[`history`]** — whole-document undo/redo snapshots
//! - **[`search`]** — literal forward search with wraparound
//! - **[`persist`]** — newline-delimited load/save
//! - **[`options`]** — session settings read from the config file
//! - **[`command`]** — the commands the input adapter sends
//! - **[`editor`]** — `EditorState`, which runs commands
//! - **[`render`]** — the per-frame model handed to the display adapter
//! - **[`error`]** — the non-fatal errors commands report

pub mod command;
pub mod cursor;
pub mod document;
pub mod editor;
pub mod error;
pub mod history;
pub mod mode;
pub mod options;
pub mod persist;
pub mod position;
pub mod render;
pub mod search;
pub mod viewport;

pub use command::{Command, Outcome};
pub use document::Document;
pub use editor::EditorState;
pub use error::{Error, Result};
pub use mode::Mode;
pub use options::Options;
pub use position::Position;
