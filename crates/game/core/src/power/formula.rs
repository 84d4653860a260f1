//! Power formulas.
//!
//! # Formulas
//!
//! ```text
//! base            = speed + strength + intelligence
//! attacker_power  = base × tier_factor × (1 + level / 1.5) × 0.8
//! defender_power  = base × tier_factor × (1 + level / 2.5) × (max_hp / 100) / max_hp × current_hp
//! tier_factor     = 1 + (tier_index + 1) / 4
//! ```
//!
//! Values stay in `f64`; the solver compares thresholds, so rounding here
//! would change which attacker one-shots which defender.

use super::{PowerError, StatsTable, WorkerKind};

const ATTACKER_LEVEL_DIVISOR: f64 = 1.5;
const ATTACKER_SCALE: f64 = 0.8;
const DEFENDER_LEVEL_DIVISOR: f64 = 2.5;

/// Converts worker attributes into comparable power scalars.
#[derive(Clone, Copy, Debug)]
pub struct PowerModel<T> {
    table: T,
}

impl<T: StatsTable> PowerModel<T> {
    pub fn new(table: T) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    /// Power of a player-owned worker at `level`.
    pub fn attacker_power(&self, kind: WorkerKind, level: u32) -> Result<f64, PowerError> {
        let base = self.base(kind)?;
        Ok(base
            * kind.tier_factor()
            * (1.0 + f64::from(level) / ATTACKER_LEVEL_DIVISOR)
            * ATTACKER_SCALE)
    }

    /// Power of an enemy farm worker, scaled by its remaining health fraction.
    ///
    /// A defender reported with `max_hp == 0` has no power.
    pub fn defender_power(
        &self,
        kind: WorkerKind,
        level: u32,
        current_hp: u32,
        max_hp: u32,
    ) -> Result<f64, PowerError> {
        let base = self.base(kind)?;
        if max_hp == 0 {
            return Ok(0.0);
        }
        let max_hp = f64::from(max_hp);
        Ok(base
            * kind.tier_factor()
            * (1.0 + f64::from(level) / DEFENDER_LEVEL_DIVISOR)
            * (max_hp / 100.0)
            / max_hp
            * f64::from(current_hp))
    }

    fn base(&self, kind: WorkerKind) -> Result<f64, PowerError> {
        self.table
            .stats(kind)
            .map(|stats| stats.total())
            .ok_or(PowerError::MissingStats { kind })
    }
}
