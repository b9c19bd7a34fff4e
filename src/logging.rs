//! JSONL file logging.
//!
//! The terminal belongs to the TUI, so nothing is written to stdout or
//! stderr. Events go to `<log_dir>/folio.jsonl` through a non-blocking
//! writer. The filter is read from `FOLIO_LOG`, then `RUST_LOG`, and
//! defaults to `info`.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_FILE_NAME: &str = "folio.jsonl";

/// Flushes pending log lines when dropped. Keep it alive until exit.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env("FOLIO_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn init(log_dir: &Path) -> Option<LoggingGuard> {
    if std::fs::create_dir_all(log_dir).is_err() {
        return None;
    }

    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (writer, file_guard) = tracing_appender::non_blocking(appender);

    let json_layer = fmt::layer()
        .json()
        .with_writer(writer)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    if tracing_subscriber::registry()
        .with(env_filter())
        .with(json_layer)
        .try_init()
        .is_err()
    {
        return None;
    }

    tracing::info!(
        event_type = "app_lifecycle",
        log_dir = %log_dir.display(),
        "logging initialized"
    );

    Some(LoggingGuard {
        _file_guard: file_guard,
    })
}
