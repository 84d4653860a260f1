//! Power model: worker catalog, stats tables and the power formulas.
//!
//! Everything here is pure and deterministic. Tables are the only
//! process-wide data and are never mutated after construction.

mod error;
mod formula;
mod kind;
mod table;

pub use error::PowerError;
pub use formula::PowerModel;
pub use kind::WorkerKind;
pub use table::{BuiltinStats, StatsTable, WorkerStats};
