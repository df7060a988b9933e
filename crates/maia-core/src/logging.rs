//! File logging.
//!
//! The TUI owns the terminal, so tracing output goes to
//! `$MAIA_HOME/logs/maia.log` (rolled daily). `MAIA_LOG` overrides the
//! configured level with a full `EnvFilter` directive.

use std::fs;

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, paths};

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV_VAR: &str = "MAIA_LOG";

/// Installs the global tracing subscriber.
///
/// Keep the returned guard alive for the lifetime of the program; dropping it
/// flushes buffered log lines.
///
/// # Errors
/// Returns an error if the log directory cannot be created or a subscriber
/// is already installed.
pub fn init(config: &Config) -> Result<WorkerGuard> {
    let dir = paths::logs_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(&dir, "maia.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))?;

    Ok(guard)
}

fn filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
