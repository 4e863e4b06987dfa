use std::path::Path;
use tracing::warn;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Installs the global subscriber for `component`.
///
/// Events go to `<log dir>/<component>.<date>.log`. When that file cannot be
/// opened they go to stderr instead, as they also do with `to_stderr`. The
/// returned guard flushes the file writer on drop and must be held until
/// exit.
pub fn init_logging(component: &str, to_stderr: bool) -> Option<WorkerGuard> {
    let log_dir = config::log_dir();
    let (file_layer, guard, file_error) = match file_writer(&log_dir, component) {
        Ok((writer, guard)) => {
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true);
            (Some(layer), Some(guard), None)
        }
        Err(e) => (None, None, Some(e)),
    };

    let stderr_layer = (to_stderr || file_error.is_some()).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    let installed = tracing_subscriber::registry()
        .with(filter())
        .with(file_layer)
        .with(stderr_layer)
        .try_init();

    if installed.is_ok() {
        if let Some(e) = file_error {
            warn!("Cannot write logs to {}: {e}", log_dir.display());
        }
    }
    guard
}

/// `HANGAR_LOG`, then `RUST_LOG`, then the default level.
fn filter() -> EnvFilter {
    EnvFilter::try_from_env(config::LOG_FILTER_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER))
}

fn file_writer(log_dir: &Path, component: &str) -> Result<(NonBlocking, WorkerGuard), BoxError> {
    std::fs::create_dir_all(log_dir)?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(component)
        .filename_suffix("log")
        .max_log_files(config::MAX_LOG_FILES)
        .build(log_dir)?;
    Ok(tracing_appender::non_blocking(appender))
}
