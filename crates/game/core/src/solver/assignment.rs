//! Solver output types.

use crate::power::WorkerKind;

/// One attacker committed in the plan.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignmentStep {
    pub attacker: WorkerKind,
    pub power: f64,
}

/// Number of defenders a plan kills, rendered as "all" when nothing survives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KillCount {
    All,
    Partial(usize),
}

impl core::fmt::Display for KillCount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Partial(kills) => write!(f, "{kills}"),
        }
    }
}

/// Ordered commitment plan with the number of defenders it kills.
///
/// Assignments are produced whole by the solver and never edited afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    steps: Vec<AssignmentStep>,
    kills: usize,
    defenders: usize,
}

impl Assignment {
    pub(crate) fn new(steps: Vec<AssignmentStep>, kills: usize, defenders: usize) -> Self {
        Self {
            steps,
            kills: kills.min(defenders),
            defenders,
        }
    }

    pub fn steps(&self) -> &[AssignmentStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Attacker identities in commit order.
    pub fn attackers(&self) -> impl Iterator<Item = WorkerKind> + '_ {
        self.steps.iter().map(|step| step.attacker)
    }

    pub fn get(&self, index: usize) -> Option<&AssignmentStep> {
        self.steps.get(index)
    }

    pub fn position(&self, attacker: WorkerKind) -> Option<usize> {
        self.steps.iter().position(|step| step.attacker == attacker)
    }

    pub fn contains(&self, attacker: WorkerKind) -> bool {
        self.position(attacker).is_some()
    }

    /// Raw number of kills, never above [`Self::defenders`].
    pub fn kills(&self) -> usize {
        self.kills
    }

    /// Number of active defenders the plan was computed against.
    pub fn defenders(&self) -> usize {
        self.defenders
    }

    pub fn kill_count(&self) -> KillCount {
        if self.kills >= self.defenders {
            KillCount::All
        } else {
            KillCount::Partial(self.kills)
        }
    }
}

/// Diagnostics for a single solve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveStats {
    /// Defenders one-shot during the greedy phase.
    pub greedy_kills: usize,
    /// Whether the exhaustive phase ran.
    pub exhaustive: bool,
    /// Permutations simulated by the exhaustive phase.
    pub permutations: usize,
}

/// Solver result.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    pub assignment: Assignment,
    pub stats: SolveStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kill_count_renders_all_when_nothing_survives() {
        let steps = vec![AssignmentStep {
            attacker: WorkerKind::Wise,
            power: 10.0,
        }];
        assert_eq!(Assignment::new(steps.clone(), 2, 2).kill_count(), KillCount::All);
        assert_eq!(
            Assignment::new(steps, 1, 2).kill_count(),
            KillCount::Partial(1)
        );
        assert_eq!(KillCount::All.to_string(), "all");
        assert_eq!(KillCount::Partial(3).to_string(), "3");
    }

    #[test]
    fn kills_are_capped_at_defender_count() {
        let plan = Assignment::new(Vec::new(), 5, 2);
        assert_eq!(plan.kills(), 2);
    }
}
