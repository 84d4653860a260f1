//! Runtime orchestration for live raid planning.
//!
//! This crate wraps the synchronous [`raid_core::PlanningSession`] in an async
//! shell: updates arrive through an [`UpdateSource`], plans leave through a
//! [`Presenter`], and every wait for the next update is bounded by the
//! configured listening timeout. Consumers embed [`Runtime`] and either drive
//! an encounter on the current task or spawn it and feed it through an
//! [`EncounterHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - [`workers`] keeps the per-encounter task internal to the crate
pub mod api;
pub mod events;
pub mod runtime;

mod workers;

pub use api::{
    ChannelUpdateSource, EncounterHandle, Presenter, Result, RuntimeError, SessionOutcome,
    UpdateSource,
};
pub use events::{EncounterId, Event, EventBus, LifecycleEvent, PlanEvent, Topic};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
