//! Tracing subscriber setup for hosts embedding the runtime.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::Result;

/// Where and how much to log.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directives used when `RUST_LOG` is unset.
    pub filter: String,
    /// Directory for the log file; `None` logs to stderr only.
    pub log_dir: Option<PathBuf>,
    pub file_name: String,
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_owned(),
            log_dir: None,
            file_name: "dog-runtime.log".to_owned(),
            ansi: true,
        }
    }
}

/// Installs the global subscriber.
///
/// Returns the file writer guard when a log directory is configured; keep it
/// alive for as long as logs should be flushed.
///
/// # Errors
///
/// Fails when the log file cannot be created or a global subscriber is
/// already installed.
pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(config.file_name.clone())
                .build(dir)?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.ansi);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    tracing::info!(
        target: "runtime::logging",
        filter = %config.filter,
        file = ?config.log_dir.as_ref().map(|dir| dir.join(&config.file_name)),
        "Logging initialized"
    );

    Ok(guard)
}
