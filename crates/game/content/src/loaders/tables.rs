//! Worker stats table loader.

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use raid_core::{WorkerKind, WorkerStats};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};
use crate::tables::StatsTableMap;

/// Loader for worker stats tables from TOML files.
///
/// ```toml
/// [workers.common]
/// speed = 4
/// strength = 4
/// intelligence = 3
/// ```
pub struct TablesLoader;

#[derive(Deserialize)]
struct TablesFile {
    #[serde(default)]
    workers: BTreeMap<String, WorkerStats>,
}

impl TablesLoader {
    /// Load a stats table, rejecting non-positive attributes.
    ///
    /// Kinds may be omitted; they fail later, when an encounter reports them.
    pub fn load(path: &Path) -> LoadResult<StatsTableMap> {
        let content = read_file(path)?;
        let file: TablesFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse stats table TOML: {}", e))?;

        let mut table = StatsTableMap::new();
        for (name, stats) in file.workers {
            let kind = WorkerKind::from_str(&name)
                .map_err(|_| anyhow::anyhow!("Unknown worker kind in stats table: {}", name))?;
            table.insert(kind, stats);
        }

        let invalid = table.invalid_kinds();
        if !invalid.is_empty() {
            anyhow::bail!(
                "Stats table {} has non-positive attributes for: {:?}",
                path.display(),
                invalid
            );
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raid_core::{StatsTable, WorkerKind};
    use std::io::Write;

    fn write(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_integer_and_float_attributes() {
        let file = write(
            "[workers.common]\nspeed = 4\nstrength = 4\nintelligence = 3\n\n\
             [workers.wise]\nspeed = 6.5\nstrength = 7\nintelligence = 9\n",
        );

        let table = TablesLoader::load(file.path()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.stats(WorkerKind::Common).map(|s| s.total()), Some(11.0));
        assert_eq!(table.stats(WorkerKind::Wise).map(|s| s.total()), Some(22.5));
        assert!(table.stats(WorkerKind::Masterful).is_none());
    }

    #[test]
    fn rejects_non_positive_attributes() {
        let file = write("[workers.useless]\nspeed = 0\nstrength = 1\nintelligence = 1\n");
        assert!(TablesLoader::load(file.path()).is_err());
    }

    #[test]
    fn rejects_unknown_kinds() {
        let file = write("[workers.legendary]\nspeed = 1\nstrength = 1\nintelligence = 1\n");
        assert!(TablesLoader::load(file.path()).is_err());
    }
}
