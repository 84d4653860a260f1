//! Attacker and defender units as reported by the encounter adapter.
//!
//! Units are immutable once read. Rating turns them into the power scalars
//! the solver works with; a changed unit is re-read and re-rated wholesale.

use std::collections::HashSet;

use crate::power::{PowerError, PowerModel, StatsTable, WorkerKind};

/// A worker in the player's roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackerUnit {
    pub kind: WorkerKind,
    pub level: u32,
}

impl AttackerUnit {
    pub const fn new(kind: WorkerKind, level: u32) -> Self {
        Self { kind, level }
    }
}

/// Attacker with its derived power. The kind doubles as identity: a roster
/// holds at most one worker per kind.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RatedAttacker {
    pub kind: WorkerKind,
    pub level: u32,
    pub power: f64,
}

/// Encounter slot index of a defender, in encounter order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DefenderId(pub u32);

impl core::fmt::Display for DefenderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "farm#{}", self.0)
    }
}

/// An enemy farm worker with its current health.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefenderUnit {
    pub id: DefenderId,
    pub kind: WorkerKind,
    pub level: u32,
    pub current_hp: u32,
    pub max_hp: u32,
}

impl DefenderUnit {
    pub const fn new(id: u32, kind: WorkerKind, level: u32, current_hp: u32, max_hp: u32) -> Self {
        Self {
            id: DefenderId(id),
            kind,
            level,
            current_hp,
            max_hp,
        }
    }
}

/// Defender with its derived (health-scaled) power.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RatedDefender {
    pub id: DefenderId,
    pub kind: WorkerKind,
    pub power: f64,
}

/// Rates the roster and keeps the `cap` strongest attackers.
///
/// The result is ordered by ascending power, ties broken by catalog order.
/// This order is the solver's greedy scan order, so the weakest sufficient
/// attacker is committed first.
pub fn rate_roster<T: StatsTable>(
    model: &PowerModel<T>,
    roster: &[AttackerUnit],
    cap: usize,
) -> Result<Vec<RatedAttacker>, PowerError> {
    let mut seen = HashSet::with_capacity(roster.len());
    let mut rated = Vec::with_capacity(roster.len());
    for unit in roster {
        if !seen.insert(unit.kind) {
            return Err(PowerError::DuplicateAttacker { kind: unit.kind });
        }
        rated.push(RatedAttacker {
            kind: unit.kind,
            level: unit.level,
            power: model.attacker_power(unit.kind, unit.level)?,
        });
    }

    rated.sort_by(|a, b| a.power.total_cmp(&b.power).then(a.kind.cmp(&b.kind)));
    let excess = rated.len().saturating_sub(cap);
    rated.drain(..excess);
    Ok(rated)
}

/// Rates defenders in encounter order, dropping the ones already dead.
pub fn rate_defenders<T: StatsTable>(
    model: &PowerModel<T>,
    defenders: &[DefenderUnit],
) -> Result<Vec<RatedDefender>, PowerError> {
    let mut rated = Vec::with_capacity(defenders.len());
    for unit in defenders {
        let power =
            model.defender_power(unit.kind, unit.level, unit.current_hp, unit.max_hp)?;
        if power > 0.0 {
            rated.push(RatedDefender {
                id: unit.id,
                kind: unit.kind,
                power,
            });
        }
    }
    Ok(rated)
}
