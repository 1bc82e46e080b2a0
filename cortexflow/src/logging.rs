//! Logging infrastructure for CortexFlow.
//!
//! Provides structured logging with file output and optional console output:
//! - Writes to `logs/cortexflow.log` (cleared on session start)
//! - Stdout output is optional: the dashboard owns the terminal's alternate
//!   screen, so the TUI run logs to file only
//! - Configurable via RUST_LOG environment variable

use std::fs;
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize logging system.
///
/// Creates the logs directory if needed, clears the previous log file, and
/// sets up the file writer. When `with_stdout` is true a console layer is
/// added as well.
///
/// # Arguments
///
/// * `log_dir` - Directory for log files (e.g., "logs")
/// * `log_file` - Log filename (e.g., "cortexflow.log")
/// * `with_stdout` - Also print to stdout (off for TUI sessions)
///
/// # Returns
///
/// LoggingGuard that must be kept alive for logging to work
///
/// # Errors
///
/// Returns error if the log directory cannot be created or the log file
/// cannot be cleared
pub fn init_logging(
    log_dir: &str,
    log_file: &str,
    with_stdout: bool,
) -> Result<LoggingGuard, io::Error> {
    // Create logs directory if it doesn't exist
    fs::create_dir_all(log_dir)?;

    // Clear previous log file by writing empty content
    // This handles both existing and non-existing files
    let log_path = Path::new(log_dir).join(log_file);
    fs::write(&log_path, "")?;

    // Create file appender with non-blocking writer
    let file_appender = tracing_appender::rolling::never(log_dir, log_file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    let stdout_layer = if with_stdout {
        Some(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stdout)
                .with_ansi(true),
        )
    } else {
        None
    };

    // Env filter defaults to INFO if RUST_LOG is not set
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Get default log directory path.
pub fn default_log_dir() -> &'static str {
    "logs"
}
