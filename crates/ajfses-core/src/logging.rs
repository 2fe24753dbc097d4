//! Tracing setup.
//!
//! The terminal belongs to the UI, so logs go to a daily rolling file under
//! `${AJFSES_HOME}/logs/`. `AJFSES_LOG` overrides the configured filter.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, paths};

pub const LOG_ENV: &str = "AJFSES_LOG";
const LOG_FILE_PREFIX: &str = "ajfses.log";

/// Installs the global subscriber writing to the default logs directory.
///
/// Keep the returned guard alive for the lifetime of the process; dropping it
/// flushes and stops the background writer.
///
/// # Errors
/// Returns an error if the filter is invalid, the directory cannot be created,
/// or a global subscriber is already installed.
pub fn init(config: &Config) -> Result<WorkerGuard> {
    init_in(config, &paths::logs_dir())
}

/// Installs the global subscriber writing under `dir`.
///
/// # Errors
/// See [`init`].
pub fn init_in(config: &Config, dir: &Path) -> Result<WorkerGuard> {
    let filter = build_filter(&config.log.level)?;

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| anyhow::anyhow!("Failed to install tracing subscriber: {err}"))?;

    Ok(guard)
}

/// `AJFSES_LOG` if set, otherwise the configured level.
fn build_filter(default_level: &str) -> Result<EnvFilter> {
    filter_from(std::env::var(LOG_ENV).ok().as_deref(), default_level)
}

fn filter_from(directives: Option<&str>, default_level: &str) -> Result<EnvFilter> {
    match directives {
        Some(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives)
            .with_context(|| format!("Invalid {LOG_ENV} filter '{directives}'")),
        _ => EnvFilter::try_new(default_level)
            .with_context(|| format!("Invalid log level '{default_level}' in config")),
    }
}
