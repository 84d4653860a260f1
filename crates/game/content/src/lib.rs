//! Data-driven content definitions and loaders.
//!
//! This crate provides loaders for RON/TOML data files:
//! - Worker stats tables (TOML)
//! - Session configuration (TOML)
//! - Recorded or scripted encounters (RON)
//!
//! All loaders use raid-core types directly with serde for deserialization.

pub mod loaders;
pub mod scenario;
pub mod tables;

pub use loaders::{ConfigLoader, ContentFactory, LoadResult, ScenarioLoader, TablesLoader};
pub use scenario::{Scenario, ScriptedUpdate};
pub use tables::StatsTableMap;
