//! Power model errors.

use crate::error::{ErrorSeverity, RaidError};

use super::WorkerKind;

/// Errors raised while rating units.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PowerError {
    /// The stats table has no entry for a reported kind.
    #[error("stats table has no entry for worker kind `{kind}`")]
    MissingStats { kind: WorkerKind },

    /// The roster lists the same kind more than once.
    #[error("worker kind `{kind}` appears more than once in the roster")]
    DuplicateAttacker { kind: WorkerKind },
}

impl RaidError for PowerError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingStats { .. } => ErrorSeverity::Configuration,
            Self::DuplicateAttacker { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingStats { .. } => "POWER_MISSING_STATS",
            Self::DuplicateAttacker { .. } => "POWER_DUPLICATE_ATTACKER",
        }
    }
}
