//! Content factory for loading arena data from a directory.

use std::path::{Path, PathBuf};

use arena_core::{BattleConfig, Hero};

use crate::loaders::{ConfigLoader, LoadResult, RosterLoader};

/// Content factory that loads all arena content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── arena.toml
/// └── heroes.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "arena.toml";
    pub const ROSTER_FILE: &'static str = "heroes.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load battle tuning from `arena.toml`.
    ///
    /// A missing file is not an error: the built-in defaults apply.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            tracing::info!(path = %path.display(), "no battle config found, using defaults");
            return Ok(BattleConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the hero roster from `heroes.ron`.
    pub fn load_roster(&self) -> LoadResult<Vec<Hero>> {
        let path = self.data_dir.join(Self::ROSTER_FILE);
        RosterLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
