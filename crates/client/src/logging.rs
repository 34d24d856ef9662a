//! File logging for the client.
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_FILE: &str = "arena.log";

/// Routes tracing output to `log_dir/arena.log`.
///
/// Terminal output belongs to the battle display, so nothing is logged to
/// stderr. `RUST_LOG` refines the default `info` level. Keep the returned
/// guard alive for the life of the process or buffered lines are lost.
pub fn setup_logging(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Log file: {}", log_dir.join(LOG_FILE).display());

    Ok(guard)
}
