//! Log file setup.
//!
//! The TUI owns stdout/stderr, so logs go to a daily-rolling file under
//! `$TICKETSHUB_HOME/logs`. The filter comes from `TICKETSHUB_LOG` when set,
//! otherwise from `Config::log_level`.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::config::{Config, paths};

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV_VAR: &str = "TICKETSHUB_LOG";

const LOG_FILE_PREFIX: &str = "ticketshub.log";

/// Builds the filter, preferring `TICKETSHUB_LOG` over the configured level.
///
/// An unparsable directive falls back to `info`.
pub fn build_filter(config: &Config) -> EnvFilter {
    let directive = std::env::var(LOG_ENV_VAR).unwrap_or_else(|_| config.log_level.clone());
    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber writing to the default logs directory.
///
/// Keep the returned guard alive for the process lifetime; dropping it
/// flushes and stops the background writer.
///
/// # Errors
/// Returns an error if the logs directory cannot be created or a global
/// subscriber is already installed.
pub fn init(config: &Config) -> Result<WorkerGuard> {
    init_in(config, &paths::logs_dir())
}

/// Installs the global subscriber writing into `dir`.
///
/// # Errors
/// Returns an error if `dir` cannot be created or a global subscriber is
/// already installed.
pub fn init_in(config: &Config, dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(build_filter(config))
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .context("Failed to install log subscriber")?;

    tracing::debug!(dir = %dir.display(), "logging initialized");
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_uses_configured_level() {
        let config = Config {
            log_level: "debug".to_string(),
            ..Config::default()
        };
        if std::env::var(LOG_ENV_VAR).is_err() {
            assert_eq!(build_filter(&config).to_string(), "debug");
        }
    }
}
