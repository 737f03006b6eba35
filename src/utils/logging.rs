use crate::constants::{LOG_DIRECTORY, LOG_FILE_NAME};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Resolves a filter directive, falling back to `info` when it cannot be parsed.
fn build_filter(log_level: &str) -> EnvFilter {
    match EnvFilter::try_new(log_level) {
        Ok(f) => f,
        Err(_) => {
            eprintln!("Invalid log level '{}', defaulting to 'info'", log_level);
            EnvFilter::new("info")
        }
    }
}

/// Initialize the logging system with the specified filter.
///
/// Stdout logging is always enabled. When `with_file` is set, events are also
/// written to a daily rotating file under the `logs` directory.
///
/// # Arguments
///
/// * `log_level` - Filter directive (e.g. "info", "debug", "bita_shop=trace,tower_http=debug")
/// * `with_file` - Whether to also log to a rotating file in addition to stdout.
pub fn init_logging(log_level: &str, with_file: bool) {
    let filter = build_filter(log_level);

    let stdout_layer = fmt::layer().with_target(false).with_line_number(true);

    if with_file {
        let file_appender = RollingFileAppender::new(Rotation::DAILY, LOG_DIRECTORY, LOG_FILE_NAME);

        let file_layer = fmt::layer()
            .with_ansi(false)
            .with_line_number(true)
            .with_writer(file_appender);

        tracing_subscriber::registry()
            .with(filter)
            .with(stdout_layer)
            .with(file_layer)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stdout_layer)
            .init();
    }
}
