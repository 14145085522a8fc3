//! Editor errors.
//!
//! Nothing here is fatal: every variant describes a command that did nothing
//! (or failed to touch the disk) and renders as a one-line status message.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Something a command could not do.
#[derive(Debug, Error)]
pub enum Error {
    #[error("search query is empty")]
    EmptyQuery,

    #[error("replace target is empty")]
    EmptyTarget,

    #[error("not found: {query}")]
    NotFound { query: String },

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,

    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("no file name")]
    NoPath,
}

impl Error {
    /// True for failures that touched the filesystem.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Write { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
