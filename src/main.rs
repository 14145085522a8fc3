// SPDX-License-Identifier: MIT
//
// scrawl — a small terminal text editor.
//
// This is the main binary that wires the crates together:
//
//   scrawl-core → document, cursor, viewport, history, search, files
//   scrawl-term → raw terminal, input parsing, frame diffing, event loop
//
// Startup: parse the command line, start logging, read the config file,
// open the document, then hand an `app::Scrawl` to the event loop. Any
// failure before the loop starts is printed to stderr with exit code 1.

mod app;
mod config;
mod keymap;
mod logging;
mod prompt;
mod view;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use scrawl_core::EditorState;
use scrawl_term::event_loop::EventLoop;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "scrawl", version, about, long_about = None)]
struct Args {
    /// File to edit; created on first save if it does not exist
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Read options from this TOML file
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start in insert mode
    #[arg(short = 'i', long = "insert")]
    insert: bool,

    /// Keep the column unchanged when moving up and down
    #[arg(long = "no-clamp")]
    no_clamp: bool,

    /// Write logs here instead of the temp directory
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Disable logging
    #[arg(long = "no-log", conflicts_with = "log_file")]
    no_log: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("scrawl: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    // Installed first so the logging hook runs before the terminal is
    // restored.
    scrawl_term::terminal::install_panic_hook();

    let _log_guard = if args.no_log {
        None
    } else {
        let path = args.log_file.clone().unwrap_or_else(logging::default_path);
        Some(logging::init(&path)?)
    };

    let options = config::load(args.config.as_deref())?;
    let options = config::with_flags(options, args.insert, args.no_clamp);

    let mut event_loop = EventLoop::new().context("cannot initialize terminal")?;
    let rows = view::text_rows(event_loop.size().rows);
    let editor = match &args.file {
        Some(path) => EditorState::open(path, rows, options)
            .with_context(|| format!("cannot open {}", path.display()))?,
        None => EditorState::welcome(rows, options),
    };
    info!(file = ?args.file, ?options, "starting");

    let mut app = app::Scrawl::new(editor);
    event_loop.run(&mut app).context("terminal error")?;
    info!("exiting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "scrawl",
            "notes.txt",
            "--config",
            "c.toml",
            "--insert",
            "--no-clamp",
            "--log-file",
            "/tmp/s.log",
        ])
        .unwrap();
        assert_eq!(args.file, Some(PathBuf::from("notes.txt")));
        assert_eq!(args.config, Some(PathBuf::from("c.toml")));
        assert!(args.insert);
        assert!(args.no_clamp);
        assert_eq!(args.log_file, Some(PathBuf::from("/tmp/s.log")));
    }

    #[test]
    fn no_arguments() {
        let args = Args::try_parse_from(["scrawl"]).unwrap();
        assert!(args.file.is_none());
        assert!(!args.insert);
        assert!(!args.no_log);
    }

    #[test]
    fn no_log_conflicts_with_log_file() {
        assert!(Args::try_parse_from(["scrawl", "--no-log", "--log-file", "x"]).is_err());
    }
}
