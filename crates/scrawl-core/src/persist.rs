//! File persistence — newline-delimited text.
//!
//! Saving writes every line followed by `\n` and truncates whatever the file
//! held before. Loading reads the whole file as UTF-8 and splits on `\n`;
//! `\r` stays part of the line. A file that is not valid UTF-8 is refused
//! rather than decoded lossily, so a load/save round trip never rewrites
//! bytes.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::document::{split_lines, Document};
use crate::error::{Error, Result};

/// Write `doc` to `path`, one `\n`-terminated line per document line.
///
/// # Errors
///
/// [`Error::Write`] if the file cannot be created or written.
pub fn save(path: &Path, doc: &Document) -> Result<()> {
    let write_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut out = BufWriter::new(file);
    for line in doc.lines() {
        out.write_all(line.as_bytes()).map_err(write_err)?;
        out.write_all(b"\n").map_err(write_err)?;
    }
    out.flush().map_err(write_err)
}

/// Read the lines of `path`. An empty file yields no lines; callers loading
/// them into a [`Document`] get a single empty line.
///
/// # Errors
///
/// [`Error::Read`] if the file cannot be opened or read, or is not valid
/// UTF-8 (`io::ErrorKind::InvalidData`).
pub fn load(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(split_lines(&text).map(str::to_owned).collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
