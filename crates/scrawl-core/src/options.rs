//! Editor options.
//!
//! Options are read once at startup (from the config file and command-line
//! flags) and stay fixed for the session.
//!
//! | Key                  | Type | Default | Effect                                      |
//! |----------------------|------|---------|---------------------------------------------|
//! | `insert_mode`        | bool | false   | start in insert mode instead of overwrite   |
//! | `clamp_column`       | bool | true    | re-clamp the column on Up/Down              |
//! | `clear_redo_on_edit` | bool | false   | a new edit discards the redo stack          |
//! | `tab_width`          | int  | 4       | display columns per tab stop (at least 1)   |
//! | `show_help`          | bool | true    | show the key hint in the status line        |

use serde::Deserialize;

/// Session-wide editor settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    pub insert_mode: bool,
    pub clamp_column: bool,
    pub clear_redo_on_edit: bool,
    pub tab_width: u8,
    pub show_help: bool,
}

impl Options {
    pub const DEFAULT_TAB_WIDTH: u8 = 4;

    /// Columns per tab stop, never zero.
    #[inline]
    #[must_use]
    pub fn tab_stop(&self) -> usize {
        usize::from(self.tab_width.max(1))
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            insert_mode: false,
            clamp_column: true,
            clear_redo_on_edit: false,
            tab_width: Self::DEFAULT_TAB_WIDTH,
            show_help: true,
        }
    }
}
