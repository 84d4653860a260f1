//! Session configuration loader.

use std::path::Path;

use raid_core::SessionConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for session configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`SessionConfig::default`].
    pub fn load(path: &Path) -> LoadResult<SessionConfig> {
        let content = read_file(path)?;
        let config: SessionConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_config_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "listen_timeout_secs = 45").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();

        assert_eq!(config.listen_timeout_secs, 45);
        assert_eq!(config.max_attackers, SessionConfig::MAX_ATTACKERS);
    }
}
