//! Unified error types surfaced by the runtime API.
//!
//! Wraps session failures and worker coordination problems so clients can
//! bubble them up with consistent context.
use thiserror::Error;

use raid_core::{ErrorSeverity, RaidError, SessionError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("runtime requires a presenter to be configured before building")]
    MissingPresenter,

    #[error("encounter update channel closed")]
    UpdateChannelClosed,

    #[error("encounter worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}

impl RaidError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Session(err) => err.severity(),
            Self::MissingPresenter => ErrorSeverity::Configuration,
            Self::UpdateChannelClosed | Self::WorkerJoin(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Session(err) => err.error_code(),
            Self::MissingPresenter => "RUNTIME_MISSING_PRESENTER",
            Self::UpdateChannelClosed => "RUNTIME_UPDATE_CHANNEL_CLOSED",
            Self::WorkerJoin(_) => "RUNTIME_WORKER_JOIN",
        }
    }
}
