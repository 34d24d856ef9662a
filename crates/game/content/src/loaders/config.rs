//! Battle configuration loader.

use std::path::Path;

use arena_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle tuning from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a [`BattleConfig`] from a TOML file.
    ///
    /// Every key is optional; missing keys keep their built-in defaults. The
    /// parsed config is validated before it is returned.
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), round_cap = config.round_cap, "loaded battle config");
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn parse(content: &str) -> LoadResult<BattleConfig> {
        let config: BattleConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config
            .validate()
            .map_err(|fault| anyhow::anyhow!("Invalid battle config: {}", fault))?;
        Ok(config)
    }
}
