//! Event types for different topics.

use std::fmt;

use raid_core::{PlanView, SolveStats};
use serde::{Deserialize, Serialize};

use crate::api::SessionOutcome;

/// Runtime-assigned identifier of an encounter.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct EncounterId(pub u64);

impl fmt::Display for EncounterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "encounter#{}", self.0)
    }
}

/// Events carrying plans for presenters and observers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlanEvent {
    /// The solver produced a new plan, on start or after an invalidating update.
    Produced {
        encounter: EncounterId,
        plan: PlanView,
        solve_count: usize,
        stats: SolveStats,
    },

    /// The attacker at the cursor fell as planned; the plan still holds.
    Advanced {
        encounter: EncounterId,
        cursor: usize,
        plan: PlanView,
    },
}

impl PlanEvent {
    pub fn encounter(&self) -> EncounterId {
        match self {
            PlanEvent::Produced { encounter, .. } | PlanEvent::Advanced { encounter, .. } => {
                *encounter
            }
        }
    }
}

/// Session lifecycle events (lightweight)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LifecycleEvent {
    Started { encounter: EncounterId },

    /// The first plan was presented and the session waits for updates.
    Listening { encounter: EncounterId },

    Finished {
        encounter: EncounterId,
        outcome: SessionOutcome,
    },

    /// The session failed and produced no outcome.
    Failed {
        encounter: EncounterId,
        code: String,
        error: String,
    },
}

impl LifecycleEvent {
    pub fn encounter(&self) -> EncounterId {
        match self {
            LifecycleEvent::Started { encounter }
            | LifecycleEvent::Listening { encounter }
            | LifecycleEvent::Finished { encounter, .. }
            | LifecycleEvent::Failed { encounter, .. } => *encounter,
        }
    }
}
