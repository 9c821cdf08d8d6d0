//! Logging configuration using tracing
//!
//! Logs always go to a file, never to stdout/stderr -- writing to the
//! terminal would corrupt the TUI.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/wares/logs/`
/// Log level is controlled by the `WARES_LOG` environment variable.
///
/// # Examples
/// ```bash
/// WARES_LOG=debug cargo run
/// WARES_LOG=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "wares.log");

    // Default to info, allow override via WARES_LOG
    let env_filter =
        EnvFilter::try_from_env("WARES_LOG").unwrap_or_else(|_| EnvFilter::new("wares=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("wares starting");
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("wares").join("logs"))
}

/// Get the log file path for the current day
pub fn get_current_log_file() -> Result<PathBuf> {
    let dir = get_log_directory()?;
    Ok(dir.join("wares.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_ends_with_app_path() {
        let dir = get_log_directory().unwrap();
        assert!(dir.ends_with("wares/logs"));
    }

    #[test]
    fn test_current_log_file_name() {
        let file = get_current_log_file().unwrap();
        assert_eq!(file.file_name().unwrap(), "wares.log");
    }
}
