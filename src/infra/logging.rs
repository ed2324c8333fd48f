use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError, log_layout::LogLayout};

/// Routes tracing output to the log file; the TUI owns the terminal.
///
/// The returned guard flushes buffered records on drop and must outlive
/// every log call.
pub fn init(config: &LogConfig) -> Result<WorkerGuard, AppError> {
    let layout = LogLayout::resolve(config.dir.as_deref())?;
    layout.ensure_dir()?;

    let appender = tracing_appender::rolling::never(&layout.log_dir, layout.log_file_name());
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level)),
        )
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .map_err(AppError::LoggingInit)?;

    tracing::debug!(log_file = %layout.log_file().display(), "file logging initialized");
    Ok(guard)
}
