//! `tracing` subscriber setup for the binaries.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::EnvFilter;

pub const ENV_LOG_PATH: &str = "BLOCKFALL_LOG_PATH";

fn filter() -> EnvFilter {
    EnvFilter::from_default_env().add_directive(Level::INFO.into())
}

/// Log to stderr, filtered by `RUST_LOG` (default `info`).
pub fn init_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .init();
}

/// Append logs to `path`. The terminal belongs to the game, so nothing goes
/// to stdout or stderr.
pub fn init_file(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

/// Install the file subscriber when [`ENV_LOG_PATH`] is set.
pub fn init_from_env() -> Result<()> {
    match std::env::var_os(ENV_LOG_PATH) {
        Some(path) if !path.is_empty() => init_file(Path::new(&path)),
        _ => Ok(()),
    }
}
