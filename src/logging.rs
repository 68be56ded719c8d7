//! Logging setup.
//!
//! The viewer owns the terminal, so log output either goes to stderr at
//! WARN (batch modes, and before the TUI starts) or to a debug log file.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable that points the debug log somewhere without a flag.
pub const DEBUG_LOG_ENV: &str = "DOTGRID_DEBUG_LOG";

/// Install the global subscriber.
///
/// With a `debug_log` path every event at DEBUG and above is appended to that
/// file; otherwise warnings go to stderr. `RUST_LOG` replaces either default.
///
/// # Errors
///
/// Returns an error if the debug log file cannot be created.
pub fn init(debug_log: Option<&Path>) -> Result<()> {
    let result = if let Some(path) = debug_log {
        let file = File::create(path)
            .with_context(|| format!("Failed to create debug log {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(env_filter(tracing::Level::DEBUG))
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter(tracing::Level::WARN))
            .with_writer(std::io::stderr)
            .try_init()
    };
    // A subscriber may already be installed (tests); keep the existing one.
    if let Err(err) = result {
        tracing::debug!("logging already initialised: {err}");
    }
    Ok(())
}

/// `level` applies only when `directives` (from `RUST_LOG`) is unset or empty.
fn filter(level: tracing::Level, directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(directives.unwrap_or_default())
}

fn env_filter(level: tracing::Level) -> EnvFilter {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter(level, directives.as_deref())
}
