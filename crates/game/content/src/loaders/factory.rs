//! Content factory for loading raid data from a data directory.

use std::path::{Path, PathBuf};

use raid_core::SessionConfig;

use crate::loaders::{ConfigLoader, LoadResult, ScenarioLoader, TablesLoader};
use crate::scenario::Scenario;
use crate::tables::StatsTableMap;

/// Content factory that loads all raid content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── tables.toml
/// └── scenarios/
///     ├── sample.ron
///     └── outmatched.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Content shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load session configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<SessionConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load worker stats from `tables.toml`.
    pub fn load_tables(&self) -> LoadResult<StatsTableMap> {
        TablesLoader::load(&self.data_dir.join("tables.toml"))
    }

    /// Load a scenario from `scenarios/{name}.ron`.
    pub fn load_scenario(&self, name: &str) -> LoadResult<Scenario> {
        let path = self
            .data_dir
            .join("scenarios")
            .join(format!("{}.ron", name));
        ScenarioLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
