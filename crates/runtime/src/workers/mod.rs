//! Worker tasks that back the runtime orchestration.
//!
//! One session worker runs per encounter; workers share nothing but the
//! read-only stats table, the presenter, and the event bus.

mod session;

pub use session::SessionWorker;
