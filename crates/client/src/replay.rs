//! Replays a scenario's scripted updates as if a game client observed them.

use std::collections::VecDeque;

use async_trait::async_trait;
use raid_content::ScriptedUpdate;
use raid_core::EncounterUpdate;
use raid_runtime::UpdateSource;

pub struct ScriptedUpdateSource {
    script: VecDeque<ScriptedUpdate>,
    hold_open: bool,
}

impl ScriptedUpdateSource {
    /// With `hold_open`, the source never closes once the script runs out,
    /// leaving the session to time out.
    pub fn new(script: impl IntoIterator<Item = ScriptedUpdate>, hold_open: bool) -> Self {
        Self {
            script: script.into_iter().collect(),
            hold_open,
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

#[async_trait]
impl UpdateSource for ScriptedUpdateSource {
    async fn next_update(&mut self) -> Option<EncounterUpdate> {
        let Some(next) = self.script.pop_front() else {
            if self.hold_open {
                std::future::pending::<()>().await;
            }
            return None;
        };

        tokio::time::sleep(next.delay()).await;
        tracing::debug!(
            dead = ?next.update.dead,
            active_slots = next.update.active_slots,
            "replaying scripted update"
        );
        Some(next.update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raid_core::WorkerKind;
    use std::time::Duration;

    fn scripted(after_ms: u64, dead: WorkerKind) -> ScriptedUpdate {
        ScriptedUpdate {
            after_ms,
            update: EncounterUpdate::new([dead], 1),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn replays_in_order_with_delays() {
        let mut source = ScriptedUpdateSource::new(
            [scripted(500, WorkerKind::Wise), scripted(250, WorkerKind::Common)],
            false,
        );
        let started = tokio::time::Instant::now();

        let first = source.next_update().await.unwrap();
        assert_eq!(first.dead, vec![WorkerKind::Wise]);
        assert!(started.elapsed() >= Duration::from_millis(500));

        let second = source.next_update().await.unwrap();
        assert_eq!(second.dead, vec![WorkerKind::Common]);
        assert!(started.elapsed() >= Duration::from_millis(750));

        assert_eq!(source.remaining(), 0);
        assert!(source.next_update().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn held_open_source_never_closes() {
        let mut source = ScriptedUpdateSource::new(Vec::<ScriptedUpdate>::new(), true);
        let waited =
            tokio::time::timeout(Duration::from_secs(3600), source.next_update()).await;
        assert!(waited.is_err());
    }
}
