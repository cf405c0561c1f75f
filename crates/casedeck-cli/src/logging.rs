//! Logging configuration using tracing.
//!
//! The TUI owns stdout, so logs go to a daily-rolling file under the user's
//! local data directory. Log level is controlled by the `CASEDECK_LOG`
//! environment variable (e.g. `CASEDECK_LOG=debug casedeck`).

use std::path::PathBuf;

use color_eyre::eyre::Result;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the logging subsystem.
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "casedeck.log");

    let env_filter = EnvFilter::try_from_env("CASEDECK_LOG")
        .unwrap_or_else(|_| EnvFilter::new("casedeck_cli=info,casedeck_core=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::info!("casedeck starting, logging to {}", log_dir.display());

    Ok(())
}

fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("casedeck")
        .join("logs")
}
