//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;

use anyhow::Result;
use raid_content::{
    ConfigLoader, ContentFactory, Scenario, ScenarioLoader, StatsTableMap, TablesLoader,
};
use raid_core::SessionConfig;

/// Where the helper reads its content and how it prints.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Content directory; the bundled data when unset.
    pub data_dir: Option<PathBuf>,
    /// Bundled scenario name, or a path to a `.ron` file.
    pub scenario: String,
    /// Stats table overriding the data directory's `tables.toml`.
    pub tables: Option<PathBuf>,
    /// Session config overriding the data directory's `config.toml`.
    pub session_config: Option<PathBuf>,
    /// Print only the guide line.
    pub compact_mode: bool,
    /// Keep listening after the scripted updates run out.
    pub hold_open: bool,
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            scenario: "sample".to_string(),
            tables: None,
            session_config: None,
            compact_mode: false,
            hold_open: false,
            log_dir: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `RAID_DATA_DIR` - Content directory (default: bundled data)
    /// - `RAID_SCENARIO` - Scenario name or `.ron` path (default: `sample`)
    /// - `RAID_TABLES` - Stats table TOML path
    /// - `RAID_SESSION_CONFIG` - Session config TOML path
    /// - `RAID_COMPACT_MODE` - `true` to print only the guide line
    /// - `RAID_HOLD_OPEN` - `true` to wait for the timeout after the script ends
    /// - `RAID_LOG_DIR` - Also write logs to `raid-helper.log` in this directory
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let path = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from)
        };

        config.data_dir = path("RAID_DATA_DIR");
        config.tables = path("RAID_TABLES");
        config.session_config = path("RAID_SESSION_CONFIG");
        config.log_dir = path("RAID_LOG_DIR");

        if let Some(scenario) = lookup("RAID_SCENARIO").filter(|value| !value.trim().is_empty()) {
            config.scenario = scenario;
        }
        if let Some(compact) = lookup("RAID_COMPACT_MODE").and_then(|value| parse_flag(&value)) {
            config.compact_mode = compact;
        }
        if let Some(hold_open) = lookup("RAID_HOLD_OPEN").and_then(|value| parse_flag(&value)) {
            config.hold_open = hold_open;
        }

        config
    }

    pub fn content_factory(&self) -> ContentFactory {
        match &self.data_dir {
            Some(dir) => ContentFactory::new(dir.clone()),
            None => ContentFactory::bundled(),
        }
    }

    pub fn load_tables(&self, factory: &ContentFactory) -> Result<StatsTableMap> {
        match &self.tables {
            Some(path) => TablesLoader::load(path),
            None => factory.load_tables(),
        }
    }

    pub fn load_session_config(&self, factory: &ContentFactory) -> Result<SessionConfig> {
        match &self.session_config {
            Some(path) => ConfigLoader::load(path),
            None => factory.load_config(),
        }
    }

    pub fn load_scenario(&self, factory: &ContentFactory) -> Result<Scenario> {
        if self.scenario.ends_with(".ron") {
            ScenarioLoader::load(&PathBuf::from(&self.scenario))
        } else {
            factory.load_scenario(&self.scenario)
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> ClientConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        ClientConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config_from(&[]);
        assert_eq!(config.scenario, "sample");
        assert!(!config.compact_mode);
        assert!(!config.hold_open);
        assert!(config.tables.is_none());
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("RAID_SCENARIO", "/tmp/raid.ron"),
            ("RAID_TABLES", "/tmp/tables.toml"),
            ("RAID_COMPACT_MODE", "Yes"),
            ("RAID_HOLD_OPEN", "1"),
            ("RAID_LOG_DIR", "  "),
        ]);

        assert_eq!(config.scenario, "/tmp/raid.ron");
        assert_eq!(config.tables, Some(PathBuf::from("/tmp/tables.toml")));
        assert!(config.compact_mode);
        assert!(config.hold_open);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn unparsable_flags_keep_defaults() {
        let config = config_from(&[("RAID_COMPACT_MODE", "maybe")]);
        assert!(!config.compact_mode);
    }

    #[test]
    fn bundled_content_loads() {
        let config = ClientConfig::default();
        let factory = config.content_factory();

        assert_eq!(config.load_tables(&factory).unwrap().len(), 7);
        assert_eq!(
            config.load_session_config(&factory).unwrap(),
            SessionConfig::default()
        );
        assert!(!config.load_scenario(&factory).unwrap().updates.is_empty());
    }
}
