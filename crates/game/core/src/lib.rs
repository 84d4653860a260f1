//! Deterministic raid planning logic.
//!
//! `raid-core` defines the power model that scores workers, the solver that
//! orders attackers to maximize kills, and the [`session::PlanningSession`]
//! state machine that keeps a plan valid while the encounter changes. All
//! APIs are pure and synchronous; the runtime crate supplies waiting,
//! timeouts and transport.
pub mod config;
pub mod error;
pub mod power;
pub mod session;
pub mod solver;
pub mod units;

pub use config::SessionConfig;
pub use error::{ErrorSeverity, RaidError};
pub use power::{BuiltinStats, PowerError, PowerModel, StatsTable, WorkerKind, WorkerStats};
pub use session::{
    Encounter, EncounterUpdate, PlanStep, PlanView, PlanningSession, SessionError, SessionPhase,
    StepStatus, UpdateOutcome,
};
pub use solver::{
    Assignment, AssignmentStep, KillCount, Solution, SolveStats, SolverError, solve,
};
pub use units::{
    AttackerUnit, DefenderId, DefenderUnit, RatedAttacker, RatedDefender, rate_defenders,
    rate_roster,
};
