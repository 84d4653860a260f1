//! Per-kind base attribute tables.

use super::WorkerKind;

/// Base attributes of a worker kind.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkerStats {
    pub speed: f64,
    pub strength: f64,
    pub intelligence: f64,
}

impl WorkerStats {
    pub const fn new(speed: f64, strength: f64, intelligence: f64) -> Self {
        Self {
            speed,
            strength,
            intelligence,
        }
    }

    /// Sum of the three attributes, the base of every power formula.
    #[inline]
    pub fn total(&self) -> f64 {
        self.speed + self.strength + self.intelligence
    }
}

/// Oracle providing base attributes per worker kind.
///
/// Tables are read-only after construction and may be shared freely between
/// sessions. Returning `None` means the catalog is incomplete.
pub trait StatsTable: Send + Sync {
    fn stats(&self, kind: WorkerKind) -> Option<WorkerStats>;
}

/// Built-in stats table covering the whole catalog.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinStats;

impl BuiltinStats {
    const TABLE: [WorkerStats; 7] = [
        WorkerStats::new(1.0, 1.0, 1.0),
        WorkerStats::new(2.0, 3.0, 2.0),
        WorkerStats::new(4.0, 4.0, 3.0),
        WorkerStats::new(5.0, 6.0, 5.0),
        WorkerStats::new(6.0, 7.0, 9.0),
        WorkerStats::new(9.0, 8.0, 9.0),
        WorkerStats::new(11.0, 10.0, 11.0),
    ];
}

impl StatsTable for BuiltinStats {
    fn stats(&self, kind: WorkerKind) -> Option<WorkerStats> {
        Self::TABLE.get(kind.tier_index()).copied()
    }
}

impl<T: StatsTable + ?Sized> StatsTable for &T {
    fn stats(&self, kind: WorkerKind) -> Option<WorkerStats> {
        (**self).stats(kind)
    }
}

impl<T: StatsTable + ?Sized> StatsTable for std::sync::Arc<T> {
    fn stats(&self, kind: WorkerKind) -> Option<WorkerStats> {
        (**self).stats(kind)
    }
}
