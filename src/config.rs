// SPDX-License-Identifier: MIT
//
// Config file.
//
// An optional TOML file with the same keys as `scrawl_core::Options`:
//
//   insert_mode = true
//   clamp_column = false
//   tab_width = 8
//
// Lookup order: `--config PATH` (must exist), then
// `$XDG_CONFIG_HOME/scrawl/config.toml`, then `~/.config/scrawl/config.toml`.
// A missing default file means default options. Unknown keys are an error.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use scrawl_core::Options;

/// Where the config file lives when `--config` is not given.
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    config_path_from(
        std::env::var_os("XDG_CONFIG_HOME"),
        std::env::var_os("HOME"),
    )
}

fn config_path_from(xdg: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    let base = match xdg.filter(|dir| !dir.is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from(home.filter(|dir| !dir.is_empty())?).join(".config"),
    };
    Some(base.join("scrawl").join("config.toml"))
}

/// Read options from `explicit`, or from the default location if that file
/// exists.
///
/// # Errors
///
/// Returns an error if an explicit file is missing, or if the chosen file
/// cannot be read or parsed.
pub fn load(explicit: Option<&Path>) -> Result<Options> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_path() {
            Some(path) if path.is_file() => path,
            _ => return Ok(Options::default()),
        },
    };
    let text = fs::read_to_string(&path)
        .with_context(|| format!("cannot read config file {}", path.display()))?;
    let options = parse(&text, &path)?;
    tracing::info!(path = %path.display(), "loaded config");
    Ok(options)
}

/// Parse config text. `path` is only used in error messages.
///
/// # Errors
///
/// Returns an error naming `path` if the TOML is malformed or has unknown
/// keys.
pub fn parse(text: &str, path: &Path) -> Result<Options> {
    toml::from_str(text).with_context(|| format!("invalid config file {}", path.display()))
}

/// Apply command-line flags on top of file options.
#[must_use]
pub const fn with_flags(mut options: Options, insert: bool, no_clamp: bool) -> Options {
    if insert {
        options.insert_mode = true;
    }
    if no_clamp {
        options.clamp_column = false;
    }
    options
}

// ─── Tests ───────────────────────────────────────────────────────────────────
