//! Session worker that owns one encounter's [`PlanningSession`].
//!
//! Starts the session, hands every plan to the [`Presenter`], then waits for
//! updates with a bounded listening window until the session reaches a
//! terminal phase or the update source closes.

use std::fmt::Write as _;
use std::sync::Arc;
use std::time::Duration;

use raid_core::{
    Encounter, PlanningSession, PowerModel, RaidError, SessionConfig, StatsTable, UpdateOutcome,
};
use tracing::{debug, info, warn};

use crate::api::{Presenter, Result, SessionOutcome, UpdateSource};
use crate::events::{EncounterId, Event, EventBus, LifecycleEvent, PlanEvent};

pub type SharedTable = Arc<dyn StatsTable>;

/// Background task driving a single encounter.
pub struct SessionWorker<S> {
    id: EncounterId,
    session: PlanningSession<SharedTable>,
    encounter: Encounter,
    source: S,
    presenter: Arc<dyn Presenter>,
    event_bus: EventBus,
    listen_timeout: Duration,
}

impl<S: UpdateSource> SessionWorker<S> {
    pub fn new(
        id: EncounterId,
        tables: SharedTable,
        config: SessionConfig,
        encounter: Encounter,
        source: S,
        presenter: Arc<dyn Presenter>,
        event_bus: EventBus,
    ) -> Self {
        let listen_timeout = config.listen_timeout();
        Self {
            id,
            session: PlanningSession::new(PowerModel::new(tables), config),
            encounter,
            source,
            presenter,
            event_bus,
            listen_timeout,
        }
    }

    pub fn id(&self) -> EncounterId {
        self.id
    }

    /// Main worker loop.
    ///
    /// Errors are published on the lifecycle topic before being returned.
    pub async fn run(mut self) -> Result<SessionOutcome> {
        let result = self.drive().await;

        let event = match &result {
            Ok(outcome) => LifecycleEvent::Finished {
                encounter: self.id,
                outcome: outcome.clone(),
            },
            Err(error) => {
                warn!(encounter = %self.id, code = error.error_code(), "session failed: {}", error);
                LifecycleEvent::Failed {
                    encounter: self.id,
                    code: error.error_code().to_string(),
                    error: error.to_string(),
                }
            }
        };
        self.event_bus.publish(Event::Lifecycle(event));

        result
    }

    async fn drive(&mut self) -> Result<SessionOutcome> {
        self.event_bus
            .publish(Event::Lifecycle(LifecycleEvent::Started { encounter: self.id }));

        self.session.start(&self.encounter)?;
        self.publish_plan().await;
        self.session.mark_presented()?;

        self.event_bus
            .publish(Event::Lifecycle(LifecycleEvent::Listening { encounter: self.id }));

        let outcome = loop {
            let update = match tokio::time::timeout(self.listen_timeout, self.source.next_update())
                .await
            {
                Ok(Some(update)) => update,
                Ok(None) => {
                    warn!(encounter = %self.id, "update source closed, abandoning session");
                    break SessionOutcome::Abandoned;
                }
                Err(_) => {
                    self.session.on_timeout()?;
                    warn!(
                        encounter = %self.id,
                        timeout_secs = self.listen_timeout.as_secs(),
                        "no update within listening window"
                    );
                    break SessionOutcome::TimedOut {
                        plan: self.session.plan_view(),
                    };
                }
            };

            match self.session.on_external_update(&update)? {
                UpdateOutcome::Unchanged => {
                    debug!(encounter = %self.id, dead = ?update.dead, "update reported nothing new");
                }
                UpdateOutcome::Advanced { cursor } => {
                    debug!(encounter = %self.id, cursor, next = ?self.session.next_up(), "cursor advanced");
                    let plan = self.session.plan_view();
                    self.presenter.present_plan(&plan).await;
                    self.event_bus.publish(Event::Plan(PlanEvent::Advanced {
                        encounter: self.id,
                        cursor,
                        plan,
                    }));
                }
                UpdateOutcome::Replanned => {
                    self.publish_plan().await;
                }
                UpdateOutcome::Completed => {
                    info!(encounter = %self.id, solves = self.session.solve_count(), "raid completed");
                    break SessionOutcome::Completed {
                        plan: self.session.plan_view(),
                    };
                }
            }
        };

        self.presenter.present_outcome(&outcome).await;
        Ok(outcome)
    }

    /// Logs, presents, and publishes the plan the solver just produced.
    async fn publish_plan(&mut self) {
        let plan = self.session.plan_view();
        let stats = self.session.last_solve();

        info!(
            encounter = %self.id,
            defenders = %self.describe_defenders(),
            attackers = %self.describe_attackers(),
            solution = ?self.session.assignment().attackers().collect::<Vec<_>>(),
            kills = %plan.kill_count,
            exhaustive = stats.exhaustive,
            permutations = stats.permutations,
            "raid guide log"
        );

        self.presenter.present_plan(&plan).await;
        self.event_bus.publish(Event::Plan(PlanEvent::Produced {
            encounter: self.id,
            plan,
            solve_count: self.session.solve_count(),
            stats,
        }));
    }

    fn describe_defenders(&self) -> String {
        let mut out = String::new();
        for defender in self.session.defenders() {
            if !out.is_empty() {
                out.push_str(", ");
            }
            let _ = write!(out, "{} {} {:.2}", defender.id, defender.kind, defender.power);
        }
        out
    }

    fn describe_attackers(&self) -> String {
        let mut out = String::new();
        for attacker in self.session.alive() {
            if !out.is_empty() {
                out.push_str(", ");
            }
            let _ = write!(out, "{} {:.2}", attacker.kind, attacker.power);
        }
        out
    }
}
