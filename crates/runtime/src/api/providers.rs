//! Asynchronous abstraction for sourcing encounter updates.
//!
//! Runtime users plug in [`UpdateSource`] implementations so a session can
//! follow a live game client, a recorded raid, or a test fixture.
use async_trait::async_trait;
use raid_core::EncounterUpdate;
use tokio::sync::mpsc;

/// Trait for delivering state changes observed during an encounter.
#[async_trait]
pub trait UpdateSource: Send {
    /// Waits for the next observed change.
    ///
    /// Returns `None` once the transport is closed; the session is then
    /// abandoned. The runtime bounds this wait with the listening timeout, so
    /// implementations may pend indefinitely.
    async fn next_update(&mut self) -> Option<EncounterUpdate>;
}

/// Update source fed through an mpsc channel.
pub struct ChannelUpdateSource {
    rx: mpsc::Receiver<EncounterUpdate>,
}

impl ChannelUpdateSource {
    pub fn new(rx: mpsc::Receiver<EncounterUpdate>) -> Self {
        Self { rx }
    }

    /// Creates a connected sender/source pair.
    pub fn channel(buffer: usize) -> (mpsc::Sender<EncounterUpdate>, Self) {
        let (tx, rx) = mpsc::channel(buffer.max(1));
        (tx, Self::new(rx))
    }
}

#[async_trait]
impl UpdateSource for ChannelUpdateSource {
    async fn next_update(&mut self) -> Option<EncounterUpdate> {
        self.rx.recv().await
    }
}
