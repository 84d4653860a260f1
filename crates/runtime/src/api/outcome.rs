use raid_core::PlanView;
use serde::{Deserialize, Serialize};

/// How an encounter ended.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SessionOutcome {
    /// The encounter reported no active attacker slots, or nothing is left to plan.
    Completed { plan: PlanView },
    /// No update arrived within the listening timeout.
    TimedOut { plan: PlanView },
    /// The update source closed before a terminal phase was reached.
    Abandoned,
}

impl SessionOutcome {
    /// Plan in force when the session ended.
    pub fn plan(&self) -> Option<&PlanView> {
        match self {
            Self::Completed { plan } | Self::TimedOut { plan } => Some(plan),
            Self::Abandoned => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    pub fn is_timed_out(&self) -> bool {
        matches!(self, Self::TimedOut { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed { .. } => "completed",
            Self::TimedOut { .. } => "timed_out",
            Self::Abandoned => "abandoned",
        }
    }
}
