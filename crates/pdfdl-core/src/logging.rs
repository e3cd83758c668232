//! Logging init: stderr by default, or appended to the XDG state log.

use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,pdfdl=debug,pdfdl_core=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `~/.local/state/pdfdl/pdfdl.log`, with its directory created.
pub fn log_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pdfdl")?;
    Ok(xdg_dirs.place_state_file("pdfdl.log")?)
}

fn open_append(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

/// Initialize structured logging appended to [`log_path`].
///
/// Returns Err if the log file cannot be opened or a subscriber is already
/// installed, so the CLI can fall back to [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let path = log_path()?;
    let file = open_append(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("logging already initialized: {}", e))?;

    tracing::info!(path = %path.display(), "pdfdl logging to file");
    Ok(())
}

/// Initialize logging to stderr. The CLI default.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
