//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from host wiring, content loading and logging setup so
//! clients can bubble them up with consistent context.
use thiserror::Error;

use dog_core::{ActionTableError, ActorId, DogError, ErrorSeverity};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("no dog spawned with id {0}")]
    UnknownActor(ActorId),

    #[error("a dog with id {0} is already spawned")]
    DuplicateActor(ActorId),

    #[error(transparent)]
    ActionTable(#[from] ActionTableError),

    #[error(transparent)]
    Content(#[from] anyhow::Error),

    #[error("failed to install tracing subscriber")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    #[error("failed to create log file")]
    LogFile(#[from] tracing_appender::rolling::InitError),
}

impl DogError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownActor(_) | Self::DuplicateActor(_) | Self::Content(_) => {
                ErrorSeverity::Validation
            }
            Self::ActionTable(_) | Self::Logging(_) | Self::LogFile(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownActor(_) => "RUNTIME_UNKNOWN_ACTOR",
            Self::DuplicateActor(_) => "RUNTIME_DUPLICATE_ACTOR",
            Self::ActionTable(e) => e.error_code(),
            Self::Content(_) => "RUNTIME_CONTENT",
            Self::Logging(_) => "RUNTIME_LOGGING",
            Self::LogFile(_) => "RUNTIME_LOG_FILE",
        }
    }
}
