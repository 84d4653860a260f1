//! Planning session errors.

use crate::error::{ErrorSeverity, RaidError};
use crate::power::{PowerError, WorkerKind};
use crate::solver::SolverError;

use super::SessionPhase;

/// Errors raised by [`super::PlanningSession`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Units could not be rated (incomplete stats table or bad roster).
    #[error(transparent)]
    Power(#[from] PowerError),

    #[error(transparent)]
    Solver(#[from] SolverError),

    /// The encounter names a participant the roster does not know about.
    #[error("participant `{kind}` is missing from the roster, refresh the worker list")]
    RosterOutdated { kind: WorkerKind },

    #[error("session is {actual}, expected {expected}")]
    WrongPhase {
        expected: SessionPhase,
        actual: SessionPhase,
    },

    /// The session reached a terminal phase and accepts nothing further.
    #[error("session already ended ({phase})")]
    SessionClosed { phase: SessionPhase },
}

impl RaidError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Power(error) => error.severity(),
            Self::Solver(error) => error.severity(),
            Self::RosterOutdated { .. } => ErrorSeverity::Validation,
            Self::WrongPhase { .. } => ErrorSeverity::Internal,
            Self::SessionClosed { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Power(error) => error.error_code(),
            Self::Solver(error) => error.error_code(),
            Self::RosterOutdated { .. } => "SESSION_ROSTER_OUTDATED",
            Self::WrongPhase { .. } => "SESSION_WRONG_PHASE",
            Self::SessionClosed { .. } => "SESSION_CLOSED",
        }
    }
}
