//! Combat assignment solver.
//!
//! Given attackers (in pool order) and defenders (in encounter order), finds
//! the order in which to commit attackers so that the most defenders die.
//!
//! # Algorithm
//!
//! 1. **Greedy**: walk defenders in order; commit the first remaining
//!    attacker whose power is at least the defender's. The first defender
//!    nobody can one-shot ends this phase.
//! 2. **Exhaustive**: enumerate every ordering of the remaining attackers.
//!    Each attacker hits the first still-standing unresolved defender and
//!    subtracts its full power (floored at 0). The first ordering with the
//!    highest kill total wins; an ordering that kills everything ends the
//!    search.
//! 3. **Empty-slot fill**: with empty slots present and attackers left
//!    over, one unused attacker is appended (kills unchanged).
//!
//! The exhaustive phase is bounded by [`SessionConfig::MAX_ATTACKERS`]; a
//! larger pool is rejected instead of searched.

mod assignment;
mod permutation;

pub use assignment::{Assignment, AssignmentStep, KillCount, Solution, SolveStats};

use crate::config::SessionConfig;
use crate::error::{ErrorSeverity, RaidError};
use crate::units::{RatedAttacker, RatedDefender};

use permutation::next_permutation;

/// Errors raised by [`solve`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SolverError {
    #[error("attacker pool of {size} exceeds the search cap of {max}")]
    PoolTooLarge { size: usize, max: usize },
}

impl RaidError for SolverError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::PoolTooLarge { .. } => "SOLVER_POOL_TOO_LARGE",
        }
    }
}

/// Computes the assignment maximizing kills.
///
/// `attackers` must already be truncated to at most
/// [`SessionConfig::MAX_ATTACKERS`] entries; their order is the greedy scan
/// order and the fill order. `defenders` must contain only living defenders.
pub fn solve(
    attackers: &[RatedAttacker],
    defenders: &[RatedDefender],
    empty_slots: u32,
) -> Result<Solution, SolverError> {
    if attackers.len() > SessionConfig::MAX_ATTACKERS {
        return Err(SolverError::PoolTooLarge {
            size: attackers.len(),
            max: SessionConfig::MAX_ATTACKERS,
        });
    }

    let total = defenders.len();
    let mut stats = SolveStats::default();

    // Phase 1: greedy one-shots in encounter order.
    let mut remaining: Vec<usize> = (0..attackers.len()).collect();
    let mut order: Vec<usize> = Vec::with_capacity(attackers.len());
    for defender in defenders {
        let Some(pos) = remaining
            .iter()
            .position(|&index| attackers[index].power >= defender.power)
        else {
            break;
        };
        order.push(remaining.remove(pos));
        stats.greedy_kills += 1;
    }
    let mut kills = stats.greedy_kills;

    // Phase 2: every ordering of the leftover attackers against the rest.
    if stats.greedy_kills < total {
        stats.exhaustive = true;
        let unresolved = &defenders[stats.greedy_kills..];
        let mut positions: Vec<usize> = (0..remaining.len()).collect();
        let mut best: Option<(usize, Vec<usize>)> = None;

        loop {
            stats.permutations += 1;
            let (new_kills, applied) = simulate(attackers, &remaining, &positions, unresolved);
            let candidate = stats.greedy_kills + new_kills;
            if best.as_ref().is_none_or(|(best_kills, _)| candidate > *best_kills) {
                best = Some((candidate, applied));
            }
            if candidate >= total || !next_permutation(&mut positions) {
                break;
            }
        }

        if let Some((best_kills, applied)) = best {
            kills = best_kills;
            order.extend(applied);
        }
    }

    // Phase 3: an empty slot still takes one spare attacker.
    if empty_slots > 0
        && order.len() < attackers.len()
        && let Some(spare) = (0..attackers.len()).find(|index| !order.contains(index))
    {
        order.push(spare);
    }

    let steps = order
        .into_iter()
        .map(|index| AssignmentStep {
            attacker: attackers[index].kind,
            power: attackers[index].power,
        })
        .collect();

    Ok(Solution {
        assignment: Assignment::new(steps, kills, total),
        stats,
    })
}

/// Applies attackers in the given order; returns kills and the attackers used.
fn simulate(
    attackers: &[RatedAttacker],
    pool: &[usize],
    positions: &[usize],
    defenders: &[RatedDefender],
) -> (usize, Vec<usize>) {
    let mut health: Vec<f64> = defenders.iter().map(|defender| defender.power).collect();
    let mut kills = 0;
    let mut applied = Vec::with_capacity(positions.len());

    for &position in positions {
        let Some(target) = health.iter().position(|&remaining| remaining > 0.0) else {
            break;
        };
        let attacker = pool[position];
        health[target] = (health[target] - attackers[attacker].power).max(0.0);
        applied.push(attacker);
        if health[target] == 0.0 {
            kills += 1;
        }
    }

    (kills, applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::power::WorkerKind;
    use crate::units::DefenderId;
    use proptest::prelude::*;

    const KINDS: [WorkerKind; 7] = [
        WorkerKind::Useless,
        WorkerKind::Deficient,
        WorkerKind::Common,
        WorkerKind::Talented,
        WorkerKind::Wise,
        WorkerKind::Expert,
        WorkerKind::Masterful,
    ];

    fn attackers(powers: &[f64]) -> Vec<RatedAttacker> {
        powers
            .iter()
            .zip(KINDS)
            .map(|(&power, kind)| RatedAttacker {
                kind,
                level: 1,
                power,
            })
            .collect()
    }

    fn defenders(powers: &[f64]) -> Vec<RatedDefender> {
        powers
            .iter()
            .enumerate()
            .map(|(index, &power)| RatedDefender {
                id: DefenderId(index as u32),
                kind: WorkerKind::Common,
                power,
            })
            .collect()
    }

    fn order(solution: &Solution) -> Vec<WorkerKind> {
        solution.assignment.attackers().collect()
    }

    #[test]
    fn greedy_phase_kills_everything() {
        // A = 50 (useless slot), B = 30 (deficient slot)
        let pool = attackers(&[50.0, 30.0]);
        let solution = solve(&pool, &defenders(&[40.0, 20.0]), 0).unwrap();

        assert_eq!(solution.assignment.kill_count(), KillCount::All);
        assert_eq!(order(&solution), vec![WorkerKind::Useless, WorkerKind::Deficient]);
        assert!(!solution.stats.exhaustive);
    }

    #[test]
    fn single_weak_attacker_chips_without_killing() {
        let solution = solve(&attackers(&[20.0]), &defenders(&[40.0]), 0).unwrap();

        assert_eq!(solution.assignment.kills(), 0);
        assert_eq!(solution.assignment.kill_count(), KillCount::Partial(0));
        assert_eq!(order(&solution), vec![WorkerKind::Useless]);
        assert!(solution.stats.exhaustive);
        assert_eq!(solution.stats.permutations, 1);
    }

    #[test]
    fn exhaustive_phase_combines_attackers() {
        // Nobody one-shots 50, but 30 + 25 does; 10 then handles nothing more.
        let solution = solve(&attackers(&[10.0, 25.0, 30.0]), &defenders(&[50.0]), 0).unwrap();

        assert_eq!(solution.assignment.kill_count(), KillCount::All);
        assert_eq!(solution.stats.greedy_kills, 0);
        assert!(solution.assignment.len() >= 2);
    }

    #[test]
    fn exhaustive_search_stops_at_first_total_kill() {
        // Ordering [0, 1, 2] already kills the lone defender.
        let solution = solve(&attackers(&[30.0, 30.0, 30.0]), &defenders(&[55.0]), 0).unwrap();

        assert_eq!(solution.stats.permutations, 1);
        assert_eq!(
            order(&solution),
            vec![WorkerKind::Useless, WorkerKind::Deficient]
        );
    }

    #[test]
    fn tie_break_keeps_first_ordering_found() {
        // Both defenders cannot die; the first ordering already kills one,
        // later orderings that kill one as well must not replace it.
        let pool = attackers(&[5.0, 30.0]);
        let solution = solve(&pool, &defenders(&[40.0, 40.0]), 0).unwrap();

        assert_eq!(solution.assignment.kills(), 0);
        assert_eq!(order(&solution), vec![WorkerKind::Useless, WorkerKind::Deficient]);

        let pool = attackers(&[35.0, 5.0, 5.0]);
        let solution = solve(&pool, &defenders(&[40.0, 40.0]), 0).unwrap();
        assert_eq!(solution.assignment.kills(), 1);
        assert_eq!(
            order(&solution),
            vec![WorkerKind::Useless, WorkerKind::Deficient, WorkerKind::Common]
        );
    }

    #[test]
    fn greedy_prefix_is_kept_before_exhaustive_orderings() {
        let pool = attackers(&[15.0, 20.0, 100.0]);
        let solution = solve(&pool, &defenders(&[90.0, 30.0]), 0).unwrap();

        assert_eq!(solution.stats.greedy_kills, 1);
        assert_eq!(solution.assignment.get(0).map(|s| s.attacker), Some(WorkerKind::Common));
        assert_eq!(solution.assignment.kill_count(), KillCount::All);
    }

    #[test]
    fn empty_slot_takes_one_spare_attacker() {
        let pool = attackers(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        let solution = solve(&pool, &defenders(&[25.0, 35.0, 45.0]), 2).unwrap();

        assert_eq!(solution.assignment.kill_count(), KillCount::All);
        assert_eq!(solution.assignment.len(), 4);
        let spare = solution.assignment.get(3).map(|s| s.attacker);
        assert!(matches!(
            spare,
            Some(WorkerKind::Useless) | Some(WorkerKind::Deficient)
        ));
    }

    #[test]
    fn empty_slot_without_spares_changes_nothing() {
        let pool = attackers(&[30.0]);
        let solution = solve(&pool, &defenders(&[25.0]), 1).unwrap();
        assert_eq!(solution.assignment.len(), 1);
    }

    #[test]
    fn empty_attacker_pool_yields_empty_plan() {
        let solution = solve(&[], &defenders(&[10.0, 20.0]), 0).unwrap();
        assert_eq!(solution.assignment.kills(), 0);
        assert!(solution.assignment.is_empty());
    }

    #[test]
    fn no_defenders_still_fills_empty_slots() {
        let pool = attackers(&[10.0, 20.0]);
        let solution = solve(&pool, &[], 3).unwrap();

        assert_eq!(solution.assignment.kills(), 0);
        assert_eq!(solution.assignment.kill_count(), KillCount::All);
        assert_eq!(order(&solution), vec![WorkerKind::Useless]);

        let solution = solve(&pool, &[], 0).unwrap();
        assert!(solution.assignment.is_empty());
    }

    #[test]
    fn oversized_pool_is_rejected() {
        let pool = attackers(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        assert_eq!(
            solve(&pool, &defenders(&[1.0]), 0),
            Err(SolverError::PoolTooLarge { size: 7, max: 6 })
        );
    }

    #[test]
    fn full_search_visits_720_orderings() {
        let pool = attackers(&[1.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
        let solution = solve(&pool, &defenders(&[100.0]), 0).unwrap();
        assert_eq!(solution.stats.permutations, 720);
        assert_eq!(solution.assignment.kills(), 0);
    }

    fn greedy_only_kills(pool: &[RatedAttacker], targets: &[RatedDefender]) -> usize {
        let mut remaining: Vec<f64> = pool.iter().map(|a| a.power).collect();
        let mut kills = 0;
        for target in targets {
            match remaining.iter().position(|&power| power >= target.power) {
                Some(pos) => {
                    remaining.remove(pos);
                    kills += 1;
                }
                None => break,
            }
        }
        kills
    }

    proptest! {
        #[test]
        fn kill_count_stays_within_defender_count(
            attacker_powers in prop::collection::vec(1.0f64..200.0, 0..=6),
            defender_powers in prop::collection::vec(1.0f64..300.0, 0..8),
            empty_slots in 0u32..3,
        ) {
            let pool = attackers(&attacker_powers);
            let targets = defenders(&defender_powers);
            let solution = solve(&pool, &targets, empty_slots).unwrap();

            prop_assert!(solution.assignment.kills() <= targets.len());
            prop_assert!(solution.assignment.len() <= pool.len());
        }

        #[test]
        fn solve_is_deterministic(
            attacker_powers in prop::collection::vec(1.0f64..200.0, 0..=6),
            defender_powers in prop::collection::vec(1.0f64..300.0, 0..6),
        ) {
            let pool = attackers(&attacker_powers);
            let targets = defenders(&defender_powers);
            prop_assert_eq!(solve(&pool, &targets, 1), solve(&pool, &targets, 1));
        }

        #[test]
        fn exhaustive_never_loses_to_greedy(
            attacker_powers in prop::collection::vec(1.0f64..200.0, 0..=6),
            defender_powers in prop::collection::vec(1.0f64..300.0, 0..6),
        ) {
            let pool = attackers(&attacker_powers);
            let targets = defenders(&defender_powers);
            let solution = solve(&pool, &targets, 0).unwrap();

            prop_assert!(solution.assignment.kills() >= greedy_only_kills(&pool, &targets));
        }

        #[test]
        fn sufficient_attackers_are_used_one_per_defender(
            defender_powers in prop::collection::vec(1.0f64..100.0, 0..=6),
        ) {
            // Every defender has a dedicated attacker at least as strong.
            let attacker_powers: Vec<f64> = defender_powers.iter().map(|p| p + 100.0).collect();
            let pool = attackers(&attacker_powers);
            let targets = defenders(&defender_powers);
            let solution = solve(&pool, &targets, 0).unwrap();

            prop_assert_eq!(solution.assignment.kill_count(), KillCount::All);
            prop_assert_eq!(solution.assignment.len(), targets.len());
            prop_assert!(!solution.stats.exhaustive);
        }
    }
}
