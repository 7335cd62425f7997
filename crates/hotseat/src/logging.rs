//! Tracing subscriber setup.
//!
//! The terminal UI owns stdout, so it logs to a file. The `play` command
//! keeps stdout for JSON and logs to stderr.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Sends logs to `path`, truncating it. `RUST_LOG` overrides the `info` default.
pub fn init_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    // Don't panic if already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_or("info"))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Sends logs to stderr. `RUST_LOG` overrides the `warn` default.
pub fn init_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_or("warn"))
        .with_writer(std::io::stderr)
        .try_init();
}
