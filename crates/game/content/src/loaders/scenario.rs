//! Encounter scenario loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::scenario::Scenario;

/// Loader for encounter scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file.
    ///
    /// Defender slot ids must be unique; they identify defenders across
    /// snapshots.
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        let scenario: Scenario = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        let defenders = &scenario.encounter.defenders;
        for (index, unit) in defenders.iter().enumerate() {
            if defenders[..index].iter().any(|other| other.id == unit.id) {
                anyhow::bail!(
                    "Scenario {} lists defender slot {} twice",
                    path.display(),
                    unit.id.0
                );
            }
        }

        Ok(scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raid_core::WorkerKind;
    use std::io::Write;

    const SCENARIO: &str = r#"(
        encounter: (
            roster: [
                (kind: masterful, level: 3),
                (kind: common, level: 12),
            ],
            participants: Some([masterful, common]),
            defenders: [
                (id: 0, kind: wise, level: 2, current_hp: 80, max_hp: 100),
                (id: 1, kind: useless, level: 9, current_hp: 100, max_hp: 100),
            ],
            empty_slots: 1,
        ),
        updates: [
            (after_ms: 250, update: (dead: [common], active_slots: 1)),
            (update: (
                dead: [common, masterful],
                active_slots: 0,
                defenders: Some([
                    (id: 0, kind: wise, level: 2, current_hp: 0, max_hp: 100),
                ]),
            )),
        ],
    )"#;

    fn write(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_encounter_and_updates() {
        let file = write(SCENARIO);

        let scenario = ScenarioLoader::load(file.path()).unwrap();

        assert_eq!(scenario.encounter.roster.len(), 2);
        assert_eq!(scenario.encounter.roster[0].kind, WorkerKind::Masterful);
        assert_eq!(scenario.encounter.empty_slots, 1);
        assert_eq!(scenario.updates.len(), 2);
        assert_eq!(scenario.updates[0].after_ms, 250);
        assert_eq!(scenario.updates[1].after_ms, 0);
        assert_eq!(scenario.updates[1].update.active_slots, 0);
        assert!(scenario.updates[1].update.defenders.is_some());
    }

    #[test]
    fn rejects_duplicate_defender_slots() {
        let file = write(
            r#"(encounter: (
                roster: [],
                defenders: [
                    (id: 3, kind: wise, level: 2, current_hp: 80, max_hp: 100),
                    (id: 3, kind: wise, level: 2, current_hp: 80, max_hp: 100),
                ],
            ))"#,
        );
        assert!(ScenarioLoader::load(file.path()).is_err());
    }
}
