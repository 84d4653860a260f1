//! Stats table backed by loaded data.

use std::collections::HashMap;

use raid_core::{StatsTable, WorkerKind, WorkerStats};

/// Worker stats keyed by kind, usually read from `tables.toml`.
///
/// Kinds absent from the map have no stats; planning an encounter that
/// reports them fails with a configuration error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatsTableMap {
    workers: HashMap<WorkerKind, WorkerStats>,
}

impl StatsTableMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, kind: WorkerKind, stats: WorkerStats) -> Self {
        self.workers.insert(kind, stats);
        self
    }

    pub fn insert(&mut self, kind: WorkerKind, stats: WorkerStats) -> Option<WorkerStats> {
        self.workers.insert(kind, stats)
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    /// Kinds whose attributes are not all positive and finite.
    pub fn invalid_kinds(&self) -> Vec<WorkerKind> {
        let mut invalid: Vec<WorkerKind> = self
            .workers
            .iter()
            .filter(|(_, stats)| {
                [stats.speed, stats.strength, stats.intelligence]
                    .iter()
                    .any(|value| !value.is_finite() || *value <= 0.0)
            })
            .map(|(kind, _)| *kind)
            .collect();
        invalid.sort();
        invalid
    }
}

impl StatsTable for StatsTableMap {
    fn stats(&self, kind: WorkerKind) -> Option<WorkerStats> {
        self.workers.get(&kind).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_and_validation() {
        let table = StatsTableMap::new()
            .with(WorkerKind::Common, WorkerStats::new(3.0, 3.0, 3.0))
            .with(WorkerKind::Wise, WorkerStats::new(0.0, 5.0, 5.0));

        assert_eq!(table.stats(WorkerKind::Common).map(|s| s.total()), Some(9.0));
        assert_eq!(table.stats(WorkerKind::Expert), None);
        assert_eq!(table.invalid_kinds(), vec![WorkerKind::Wise]);
    }
}
