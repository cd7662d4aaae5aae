//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const DEFAULT_FILTER: &str =
    "warn,tracer=info,tracer_core=info,tracer_store=info,tracer_app=info,tracer_tui=info";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/tracer/logs/` and never to stdout,
/// which carries the ingest pass-through or the TUI.
/// Log level is controlled by `TRACER_LOG` environment variable.
///
/// # Examples
/// ```bash
/// TRACER_LOG=debug tracer errors.db < app.log
/// TRACER_LOG=trace tracer errors.db
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "tracer.log");

    // Default to info for our crates, allow override via TRACER_LOG
    let env_filter =
        EnvFilter::try_from_env("TRACER_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("tracer starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("tracer").join("logs"))
}
