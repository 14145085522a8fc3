// SPDX-License-Identifier: MIT
//
// Logging.
//
// The terminal belongs to the editor while it runs, so logs go to a file
// through a non-blocking writer. The filter comes from `SCRAWL_LOG` (same
// syntax as `RUST_LOG`) and defaults to `info`. The returned guard must be
// held until exit or buffered lines are lost.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const FILTER_ENV: &str = "SCRAWL_LOG";

/// `scrawl.log` in the system temp directory.
#[must_use]
pub fn default_path() -> PathBuf {
    std::env::temp_dir().join("scrawl.log")
}

/// Start logging to `path` (appending) and install the panic hook.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already set.
pub fn init(path: &Path) -> Result<WorkerGuard> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("cannot install logger: {err}"))?;

    install_panic_hook();
    Ok(guard)
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log panics, then hand over to the hook that was installed before.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!(%info, "panic");
        previous(info);
    }));
}
