//! Encounter scenarios: an initial encounter plus the updates observed after it.
//!
//! Scenarios drive the helper without a live game client, either replaying a
//! recorded raid or exercising a scripted one.

use std::time::Duration;

use raid_core::{Encounter, EncounterUpdate};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub encounter: Encounter,
    #[serde(default)]
    pub updates: Vec<ScriptedUpdate>,
}

/// An update delivered `after_ms` milliseconds after the previous one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedUpdate {
    #[serde(default)]
    pub after_ms: u64,
    pub update: EncounterUpdate,
}

impl ScriptedUpdate {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.after_ms)
    }
}
