//! High-level runtime orchestrator.
//!
//! The runtime owns the shared stats table, presenter, and event bus, and
//! starts one session worker per encounter.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::broadcast;

use raid_core::{BuiltinStats, Encounter, SessionConfig, StatsTable};

use crate::api::{
    ChannelUpdateSource, EncounterHandle, Presenter, Result, RuntimeError, SessionOutcome,
    UpdateSource,
};
use crate::events::{EncounterId, Event, EventBus, Topic};
use crate::workers::SessionWorker;

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub session: SessionConfig,
    pub event_buffer_size: usize,
    /// Capacity of the update channel of each spawned encounter.
    pub update_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            event_buffer_size: 100,
            update_buffer_size: 16,
        }
    }
}

/// Main runtime that orchestrates encounter sessions
///
/// Encounters are independent: each gets its own [`raid_core::PlanningSession`]
/// and worker. Only the stats table, the presenter, and the event bus are
/// shared, and the first two are read-only.
pub struct Runtime {
    config: RuntimeConfig,
    tables: Arc<dyn StatsTable>,
    presenter: Arc<dyn Presenter>,
    event_bus: EventBus,
    next_id: AtomicU64,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Subscribe to events of every encounter on a topic.
    ///
    /// Subscribe before starting an encounter to observe its first events.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Drive one encounter on the current task until it ends.
    pub async fn run_encounter(
        &self,
        encounter: Encounter,
        source: impl UpdateSource,
    ) -> Result<SessionOutcome> {
        self.worker(encounter, source).run().await
    }

    /// Spawn one encounter on its own task.
    ///
    /// Updates are delivered through the returned handle.
    pub fn spawn_encounter(&self, encounter: Encounter) -> EncounterHandle {
        let (update_tx, source) = ChannelUpdateSource::channel(self.config.update_buffer_size);
        let worker = self.worker(encounter, source);
        let id = worker.id();

        let task = tokio::spawn(async move { worker.run().await });

        EncounterHandle::new(id, update_tx, self.event_bus.clone(), task)
    }

    fn worker<S: UpdateSource>(&self, encounter: Encounter, source: S) -> SessionWorker<S> {
        let id = EncounterId(self.next_id.fetch_add(1, Ordering::Relaxed));
        SessionWorker::new(
            id,
            Arc::clone(&self.tables),
            self.config.session.clone(),
            encounter,
            source,
            Arc::clone(&self.presenter),
            self.event_bus.clone(),
        )
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    tables: Option<Arc<dyn StatsTable>>,
    presenter: Option<Arc<dyn Presenter>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            tables: None,
            presenter: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Override session configuration only
    pub fn session_config(mut self, session: SessionConfig) -> Self {
        self.config.session = session;
        self
    }

    /// Set the worker stats table (defaults to [`BuiltinStats`])
    pub fn tables(mut self, tables: impl StatsTable + 'static) -> Self {
        self.tables = Some(Arc::new(tables));
        self
    }

    /// Set required presenter
    pub fn presenter(mut self, presenter: impl Presenter + 'static) -> Self {
        self.presenter = Some(Arc::new(presenter));
        self
    }

    /// Build the runtime
    pub fn build(self) -> Result<Runtime> {
        let presenter = self.presenter.ok_or(RuntimeError::MissingPresenter)?;
        let tables = self
            .tables
            .unwrap_or_else(|| Arc::new(BuiltinStats) as Arc<dyn StatsTable>);

        Ok(Runtime {
            event_bus: EventBus::with_capacity(self.config.event_buffer_size),
            config: self.config,
            tables,
            presenter,
            next_id: AtomicU64::new(1),
        })
    }
}
