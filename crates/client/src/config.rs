//! Client configuration loaded from the environment.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Settings for the terminal client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    /// Directory holding `arena.toml` and `heroes.ron`.
    pub data_dir: PathBuf,
    /// Delay between replayed battle actions.
    pub pace: Duration,
    pub log_dir: PathBuf,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            pace: Duration::from_millis(Self::DEFAULT_PACE_MS),
            log_dir: default_log_dir(),
        }
    }
}

impl CliConfig {
    pub const DEFAULT_PACE_MS: u64 = 400;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_DATA_DIR` - Content directory (default: `./data`)
    /// - `ARENA_PACE_MS` - Milliseconds between replayed actions (default: 400)
    /// - `ARENA_LOG_DIR` - Log directory (default: platform-specific)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("ARENA_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(pace_ms) = read_env::<u64>("ARENA_PACE_MS") {
            config.pace = Duration::from_millis(pace_ms);
        }

        if let Ok(dir) = env::var("ARENA_LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }

        config
    }
}

/// Get the platform-specific log directory
///
/// Follows platform conventions:
/// - macOS: `~/Library/Caches/hero-arena/logs`
/// - Linux: `~/.cache/hero-arena/logs` (or `$XDG_CACHE_HOME/hero-arena/logs`)
/// - Windows: `%LOCALAPPDATA%\hero-arena\logs`
/// - Fallback: `/tmp/hero-arena/logs`
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "hero-arena")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/hero-arena"))
        .join("logs")
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
