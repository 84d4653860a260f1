//! Inputs and outputs exchanged with the encounter adapter and presenter.

use crate::power::WorkerKind;
use crate::solver::KillCount;
use crate::units::{AttackerUnit, DefenderUnit, RatedAttacker, RatedDefender};

/// Initial encounter read by the adapter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Encounter {
    /// Full roster of known workers (truncated to the strongest on start).
    pub roster: Vec<AttackerUnit>,
    /// Worker kinds the encounter shows as participating, when known.
    /// Every participant must appear in `roster`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub participants: Option<Vec<WorkerKind>>,
    /// Defenders in encounter order.
    pub defenders: Vec<DefenderUnit>,
    /// Slots holding no defender.
    #[cfg_attr(feature = "serde", serde(default))]
    pub empty_slots: u32,
}

/// State change observed by the adapter while the session listens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterUpdate {
    /// Attackers currently shown as dead or disabled. May repeat earlier reports.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dead: Vec<WorkerKind>,
    /// Attacker slots still active. Zero ends the encounter.
    pub active_slots: usize,
    /// Refreshed defender snapshot, in encounter order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub defenders: Option<Vec<DefenderUnit>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub empty_slots: Option<u32>,
}

impl EncounterUpdate {
    pub fn new(dead: impl IntoIterator<Item = WorkerKind>, active_slots: usize) -> Self {
        Self {
            dead: dead.into_iter().collect(),
            active_slots,
            defenders: None,
            empty_slots: None,
        }
    }

    pub fn with_defenders(mut self, defenders: Vec<DefenderUnit>) -> Self {
        self.defenders = Some(defenders);
        self
    }

    pub fn with_empty_slots(mut self, empty_slots: u32) -> Self {
        self.empty_slots = Some(empty_slots);
        self
    }
}

/// What an update did to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Nothing new was reported.
    Unchanged,
    /// The attacker at the cursor fell; the plan still holds.
    Advanced { cursor: usize },
    /// The plan was discarded and recomputed.
    Replanned,
    /// The encounter is over.
    Completed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepStatus {
    /// Already committed.
    Spent,
    /// Next attacker to commit.
    Next,
    Queued,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanStep {
    pub attacker: WorkerKind,
    pub power: f64,
    pub status: StepStatus,
}

/// Presenter-facing snapshot of the current plan.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanView {
    pub steps: Vec<PlanStep>,
    pub kill_count: KillCount,
    /// Attackers that fell during the encounter, in order of death.
    pub fallen: Vec<WorkerKind>,
    /// Surviving attackers in pool order (ascending power).
    pub attackers: Vec<RatedAttacker>,
    /// Living defenders in encounter order.
    pub defenders: Vec<RatedDefender>,
}

impl PlanView {
    /// Fallen attackers that are no longer part of the current plan.
    pub fn fallen_outside_plan(&self) -> impl Iterator<Item = WorkerKind> + '_ {
        self.fallen
            .iter()
            .copied()
            .filter(|kind| !self.steps.iter().any(|step| step.attacker == *kind))
    }
}
