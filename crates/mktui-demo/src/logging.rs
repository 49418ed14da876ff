#![forbid(unsafe_code)]

//! Optional file-backed tracing.
//!
//! A TUI owns stdout, so tracing output goes to a file or nowhere: with
//! no `--log-file` nothing is installed and all spans/events are no-ops.
//! The filter comes from `MKTUI_LOG` (default `info`).

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

pub const FILTER_ENV: &str = "MKTUI_LOG";

pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
