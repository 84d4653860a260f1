//! Live re-planning session for one encounter.
//!
//! A [`PlanningSession`] owns the surviving attackers, the living defenders,
//! the current [`Assignment`] and a cursor marking the attacker that is next
//! up. External updates either consume the cursor (the expected attacker
//! fell), leave everything untouched (nothing new), or discard the plan and
//! solve again. Assignments are replaced whole, never patched.
//!
//! The session is synchronous and owns no tasks. Waiting for updates, and the
//! timeout on that wait, belong to the caller (see the runtime crate).

mod error;
mod phase;
mod types;

pub use error::SessionError;
pub use phase::SessionPhase;
pub use types::{Encounter, EncounterUpdate, PlanStep, PlanView, StepStatus, UpdateOutcome};

use std::collections::HashSet;

use crate::config::SessionConfig;
use crate::power::{PowerModel, StatsTable, WorkerKind};
use crate::solver::{Assignment, SolveStats, solve};
use crate::units::{DefenderId, DefenderUnit, RatedAttacker, RatedDefender, rate_defenders, rate_roster};

/// Stateful planner for a single encounter.
pub struct PlanningSession<T> {
    model: PowerModel<T>,
    config: SessionConfig,
    phase: SessionPhase,
    alive: Vec<RatedAttacker>,
    defenders: Vec<RatedDefender>,
    fallen_defenders: HashSet<DefenderId>,
    empty_slots: u32,
    assignment: Assignment,
    cursor: usize,
    fallen: Vec<WorkerKind>,
    solve_count: usize,
    last_solve: SolveStats,
}

impl<T: StatsTable> PlanningSession<T> {
    pub fn new(model: PowerModel<T>, config: SessionConfig) -> Self {
        Self {
            model,
            config,
            phase: SessionPhase::Planning,
            alive: Vec::new(),
            defenders: Vec::new(),
            fallen_defenders: HashSet::new(),
            empty_slots: 0,
            assignment: Assignment::default(),
            cursor: 0,
            fallen: Vec::new(),
            solve_count: 0,
            last_solve: SolveStats::default(),
        }
    }

    /// Rates the encounter and produces the first plan.
    ///
    /// Moves to [`SessionPhase::Presented`]. Any error leaves the session in
    /// `Planning` without a plan; such sessions should be dropped.
    pub fn start(&mut self, encounter: &Encounter) -> Result<&Assignment, SessionError> {
        self.expect_phase(SessionPhase::Planning)?;

        if let Some(participants) = &encounter.participants
            && let Some(kind) = participants
                .iter()
                .find(|kind| !encounter.roster.iter().any(|unit| unit.kind == **kind))
        {
            return Err(SessionError::RosterOutdated { kind: *kind });
        }

        let alive = rate_roster(&self.model, &encounter.roster, self.config.attacker_cap())?;
        let defenders = self.rate_snapshot(&encounter.defenders)?;

        self.alive = alive;
        self.defenders = defenders;
        self.empty_slots = encounter.empty_slots;
        self.replan()?;
        self.phase = SessionPhase::Presented;
        Ok(&self.assignment)
    }

    /// Confirms the plan reached the presenter; the session starts listening.
    pub fn mark_presented(&mut self) -> Result<(), SessionError> {
        self.expect_phase(SessionPhase::Presented)?;
        self.phase = SessionPhase::Listening;
        Ok(())
    }

    /// Applies an externally observed state change.
    pub fn on_external_update(
        &mut self,
        update: &EncounterUpdate,
    ) -> Result<UpdateOutcome, SessionError> {
        self.expect_phase(SessionPhase::Listening)?;

        let mut newly_dead: Vec<WorkerKind> = Vec::new();
        for kind in &update.dead {
            if self.is_alive(*kind) && !newly_dead.contains(kind) {
                newly_dead.push(*kind);
            }
        }

        if update.active_slots == 0 {
            self.bury(&newly_dead);
            self.phase = SessionPhase::Completed;
            return Ok(UpdateOutcome::Completed);
        }
        if newly_dead.is_empty() {
            return Ok(UpdateOutcome::Unchanged);
        }

        // Rate before mutating so a bad snapshot leaves the session intact.
        let snapshot = match &update.defenders {
            Some(units) => Some(self.rate_snapshot(units)?),
            None => None,
        };

        let plan_holds = newly_dead.len() == 1
            && self
                .assignment
                .get(self.cursor)
                .is_some_and(|step| step.attacker == newly_dead[0]);

        self.bury(&newly_dead);
        if let Some(defenders) = snapshot {
            self.defenders = defenders;
        }
        if let Some(empty_slots) = update.empty_slots {
            self.empty_slots = empty_slots;
        }

        let outcome = if plan_holds {
            self.cursor += 1;
            UpdateOutcome::Advanced {
                cursor: self.cursor,
            }
        } else {
            self.phase = SessionPhase::Recomputing;
            let replanned = self.replan();
            self.phase = SessionPhase::Listening;
            replanned?;
            UpdateOutcome::Replanned
        };

        if self.is_exhausted() {
            self.phase = SessionPhase::Completed;
            return Ok(UpdateOutcome::Completed);
        }
        Ok(outcome)
    }

    /// Records that the listening window elapsed without an update.
    pub fn on_timeout(&mut self) -> Result<(), SessionError> {
        self.expect_phase(SessionPhase::Listening)?;
        self.phase = SessionPhase::TimedOut;
        Ok(())
    }

    /// Drops the session without reaching a terminal phase.
    pub fn abandon(self) -> Assignment {
        self.assignment
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Attacker expected to act next, if the plan has one left.
    pub fn next_up(&self) -> Option<WorkerKind> {
        self.assignment.get(self.cursor).map(|step| step.attacker)
    }

    pub fn alive(&self) -> &[RatedAttacker] {
        &self.alive
    }

    pub fn defenders(&self) -> &[RatedDefender] {
        &self.defenders
    }

    pub fn fallen(&self) -> &[WorkerKind] {
        &self.fallen
    }

    /// Number of solver invocations so far.
    pub fn solve_count(&self) -> usize {
        self.solve_count
    }

    pub fn last_solve(&self) -> SolveStats {
        self.last_solve
    }

    pub fn plan_view(&self) -> PlanView {
        let steps = self
            .assignment
            .steps()
            .iter()
            .enumerate()
            .map(|(index, step)| PlanStep {
                attacker: step.attacker,
                power: step.power,
                status: match index.cmp(&self.cursor) {
                    core::cmp::Ordering::Less => StepStatus::Spent,
                    core::cmp::Ordering::Equal => StepStatus::Next,
                    core::cmp::Ordering::Greater => StepStatus::Queued,
                },
            })
            .collect();

        PlanView {
            steps,
            kill_count: self.assignment.kill_count(),
            fallen: self.fallen.clone(),
            attackers: self.alive.clone(),
            defenders: self.defenders.clone(),
        }
    }

    fn expect_phase(&self, expected: SessionPhase) -> Result<(), SessionError> {
        if self.phase.is_terminal() {
            return Err(SessionError::SessionClosed { phase: self.phase });
        }
        if self.phase != expected {
            return Err(SessionError::WrongPhase {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    fn is_alive(&self, kind: WorkerKind) -> bool {
        self.alive.iter().any(|attacker| attacker.kind == kind)
    }

    fn bury(&mut self, dead: &[WorkerKind]) {
        self.alive.retain(|attacker| !dead.contains(&attacker.kind));
        self.fallen.extend_from_slice(dead);
    }

    /// Rates a defender snapshot; defenders seen dead once stay dead.
    fn rate_snapshot(&mut self, units: &[DefenderUnit]) -> Result<Vec<RatedDefender>, SessionError> {
        let living: Vec<DefenderUnit> = units
            .iter()
            .filter(|unit| !self.fallen_defenders.contains(&unit.id))
            .copied()
            .collect();
        let rated = rate_defenders(&self.model, &living)?;

        for unit in &living {
            if !rated.iter().any(|defender| defender.id == unit.id) {
                self.fallen_defenders.insert(unit.id);
            }
        }
        Ok(rated)
    }

    fn replan(&mut self) -> Result<(), SessionError> {
        let solution = solve(&self.alive, &self.defenders, self.empty_slots)?;
        self.solve_count += 1;
        self.last_solve = solution.stats;
        self.assignment = solution.assignment;
        self.cursor = 0;
        Ok(())
    }

    fn is_exhausted(&self) -> bool {
        self.alive.is_empty() || (self.defenders.is_empty() && self.cursor >= self.assignment.len())
    }
}
