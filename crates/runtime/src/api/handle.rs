//! Handle to an encounter running on its own task.
//!
//! [`EncounterHandle`] hides channel plumbing: updates go in through
//! [`EncounterHandle::report`], the outcome comes back from
//! [`EncounterHandle::join`].
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use raid_core::EncounterUpdate;

use super::errors::{Result, RuntimeError};
use super::outcome::SessionOutcome;
use crate::events::{EncounterId, Event, EventBus, Topic};

/// Client-facing handle to a spawned encounter.
pub struct EncounterHandle {
    id: EncounterId,
    update_tx: Option<mpsc::Sender<EncounterUpdate>>,
    event_bus: EventBus,
    task: JoinHandle<Result<SessionOutcome>>,
}

impl EncounterHandle {
    pub(crate) fn new(
        id: EncounterId,
        update_tx: mpsc::Sender<EncounterUpdate>,
        event_bus: EventBus,
        task: JoinHandle<Result<SessionOutcome>>,
    ) -> Self {
        Self {
            id,
            update_tx: Some(update_tx),
            event_bus,
            task,
        }
    }

    pub fn id(&self) -> EncounterId {
        self.id
    }

    /// Forward an observed change to the session.
    ///
    /// Fails once the session reached a terminal phase or [`close`](Self::close)
    /// was called.
    pub async fn report(&self, update: EncounterUpdate) -> Result<()> {
        let tx = self
            .update_tx
            .as_ref()
            .ok_or(RuntimeError::UpdateChannelClosed)?;

        tx.send(update)
            .await
            .map_err(|_| RuntimeError::UpdateChannelClosed)
    }

    /// Stop delivering updates. A session still listening is abandoned.
    pub fn close(&mut self) {
        self.update_tx = None;
    }

    /// Subscribe to events from a specific topic.
    ///
    /// The bus is shared by every encounter of the runtime; filter on
    /// [`Event::encounter`] to follow this one. Events published before the
    /// call are not replayed.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Wait for the encounter to end.
    ///
    /// Updates can no longer be reported, but the channel stays open while
    /// waiting, so a listening session ends by completion or timeout rather
    /// than being abandoned.
    pub async fn join(self) -> Result<SessionOutcome> {
        let _update_tx = self.update_tx;
        self.task.await.map_err(RuntimeError::WorkerJoin)?
    }
}
