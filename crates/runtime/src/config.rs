//! Runtime configuration and its environment loader.

use std::env;
use std::path::PathBuf;

use arena_core::BattleConfig;

/// Where player records and the battle history are kept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Persistence {
    /// JSON records and a bincode history log under `save_dir`.
    #[default]
    File,
    /// Nothing survives the process.
    Memory,
}

/// Settings for one arena session.
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    /// Player whose record battles are credited to.
    pub player: String,
    pub save_dir: PathBuf,
    pub persistence: Persistence,
    /// Overrides the round cap from the content files.
    pub round_cap: Option<u32>,
    /// Overrides the crit chance from the content files.
    pub crit_chance: Option<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            player: Self::DEFAULT_PLAYER.to_string(),
            save_dir: default_save_dir(),
            persistence: Persistence::default(),
            round_cap: None,
            crit_chance: None,
        }
    }
}

impl RuntimeConfig {
    pub const DEFAULT_PLAYER: &'static str = "local";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_PLAYER` - Player name for records (default: `local`)
    /// - `ARENA_SAVE_DIR` - Directory for records and history (default: platform-specific)
    /// - `ARENA_PERSISTENCE` - `file` or `memory` (default: `file`)
    /// - `ARENA_ROUND_CAP` - Round cap override
    /// - `ARENA_CRIT_CHANCE` - Crit chance override
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(player) = env::var("ARENA_PLAYER")
            && !player.trim().is_empty()
        {
            config.player = player.trim().to_string();
        }

        if let Ok(dir) = env::var("ARENA_SAVE_DIR") {
            config.save_dir = PathBuf::from(dir);
        }

        if let Some(persistence) = read_env::<Persistence>("ARENA_PERSISTENCE") {
            config.persistence = persistence;
        }

        config.round_cap = read_env::<u32>("ARENA_ROUND_CAP");
        config.crit_chance = read_env::<f64>("ARENA_CRIT_CHANCE");

        config
    }

    /// Applies the environment overrides on top of file-based tuning.
    pub fn battle_config(&self, base: BattleConfig) -> BattleConfig {
        let mut config = base;
        if let Some(round_cap) = self.round_cap {
            config = config.with_round_cap(round_cap);
        }
        if let Some(crit_chance) = self.crit_chance {
            config = config.with_crit_chance(crit_chance);
        }
        config
    }
}

/// Platform-specific data directory for arena saves.
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/hero-arena`
/// - Linux: `~/.local/share/hero-arena` (or `$XDG_DATA_HOME/hero-arena`)
/// - Windows: `%APPDATA%\hero-arena`
/// - Fallback: `./save_data`
pub fn default_save_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "hero-arena")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let raw = env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable environment value");
            None
        }
    }
}
