use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Initialize the structured logging system.
///
/// Sets up:
/// - Console output on stderr. Stdout is reserved for JSON-RPC frames.
/// - File output (only when `log_dir` is configured): rolling files
///   `{log_dir}/shelton.YYYY-MM-DD.log`, daily rotation, latest 5 kept.
/// - Environment filter: `RUST_LOG` if set, else the configured filter.
///
/// Fails if a global subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .with_context(|| format!("Invalid log filter \"{}\"", config.filter))?;

    let file_layer = match config.log_dir.as_deref() {
        Some(dir) => Some(
            fmt::layer()
                .with_writer(file_appender(Path::new(dir))?)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        ),
        None => None,
    };

    // MCP hosts usually capture stderr into their own log files.
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .context("Logger already initialized")?;

    tracing::info!(
        filter = %config.filter,
        log_dir = config.log_dir.as_deref().unwrap_or("-"),
        "Logger initialized"
    );
    Ok(())
}

fn file_appender(log_dir: &Path) -> Result<RollingFileAppender> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("shelton")
        .filename_suffix("log")
        .max_log_files(5)
        .build(log_dir)
        .context("Failed to create log file appender")
}
