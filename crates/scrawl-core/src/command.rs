//! Commands — the discrete operations the input adapter sends to the core.
//!
//! The adapter turns keys (and, for file names and queries, prompt input)
//! into a [`Command`]; [`EditorState::apply`](crate::editor::EditorState::apply)
//! runs it and answers with an [`Outcome`] or an [`Error`](crate::error::Error).

use std::path::PathBuf;

/// One editor operation, with any free-text arguments already collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    ToggleInsertMode,
    /// Backspace: remove the char before the cursor.
    DeleteCharacter,
    InsertCharacter(char),
    /// Pasted text, typed as one edit.
    InsertText(String),
    Save(PathBuf),
    Load(PathBuf),
    Find(String),
    Replace { target: String, replacement: String },
    Undo,
    Redo,
    Quit,
}

impl Command {
    /// True if the command pushes an undo snapshot before running.
    #[must_use]
    pub const fn records_history(&self) -> bool {
        matches!(
            self,
            Self::DeleteCharacter
                | Self::InsertCharacter(_)
                | Self::InsertText(_)
                | Self::Replace { .. }
        )
    }

    /// Short name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MoveUp => "move-up",
            Self::MoveDown => "move-down",
            Self::MoveLeft => "move-left",
            Self::MoveRight => "move-right",
            Self::ToggleInsertMode => "toggle-insert",
            Self::DeleteCharacter => "delete",
            Self::InsertCharacter(_) => "insert",
            Self::InsertText(_) => "insert-text",
            Self::Save(_) => "save",
            Self::Load(_) => "load",
            Self::Find(_) => "find",
            Self::Replace { .. } => "replace",
            Self::Undo => "undo",
            Self::Redo => "redo",
            Self::Quit => "quit",
        }
    }
}

/// What a successful command asks of the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to report; redraw.
    Done,
    /// Redraw and show this in the message line.
    Message(String),
    /// Leave the event loop.
    Quit,
}

impl Outcome {
    /// The status message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Message(msg) => Some(msg),
            _ => None,
        }
    }
}
