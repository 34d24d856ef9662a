//! Hero roster loader.

use std::collections::HashSet;
use std::path::Path;

use arena_core::Hero;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Roster structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterFile {
    pub heroes: Vec<Hero>,
}

/// Loader for hero rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a hero roster from a RON file.
    ///
    /// Heroes come back exactly as written; filling missing combat stats is
    /// left to the roster provider.
    pub fn load(path: &Path) -> LoadResult<Vec<Hero>> {
        let content = read_file(path)?;
        let heroes = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), heroes = heroes.len(), "loaded hero roster");
        Ok(heroes)
    }

    /// Parse RON text of the form `(heroes: [...])`.
    pub fn parse(content: &str) -> LoadResult<Vec<Hero>> {
        let roster: RosterFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse hero roster RON: {}", e))?;

        let mut seen = HashSet::new();
        for hero in &roster.heroes {
            if hero.id.trim().is_empty() {
                anyhow::bail!("Hero '{}' has an empty id", hero.name);
            }
            if !seen.insert(hero.id.as_str()) {
                anyhow::bail!("Duplicate hero id '{}' in roster", hero.id);
            }
        }

        Ok(roster.heroes)
    }
}
