//! Diagnostic logging
//!
//! The TUI owns the terminal, so tracing output goes to a log file instead of
//! stdout.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::EnvFilter;

use crate::error::{TrackerError, TrackerResult};

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber, appending to `log_file`
///
/// `RUST_LOG` takes precedence over `default_filter`. Only the first call has
/// any effect.
pub fn init_tracing(log_file: &Path, default_filter: &str) -> TrackerResult<()> {
    let mut result = Ok(());

    TRACING_INIT.call_once(|| {
        result = install(log_file, default_filter);
    });

    result
}

fn install(log_file: &Path, default_filter: &str) -> TrackerResult<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(|e| {
            TrackerError::Io(format!("Failed to open log file {}: {}", log_file.display(), e))
        })?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // Another subscriber may already be installed (e.g. by a test harness)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();

    tracing::info!("finance tracker logging initialized");
    Ok(())
}
