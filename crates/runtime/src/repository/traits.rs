//! Repository contracts for the data a battle leaves behind.

use arena_core::{BattleSummary, PlayerRecord};

use crate::repository::Result;

/// Repository for per-player win/loss records.
///
/// Records are keyed by player name and overwritten on every save.
pub trait RecordRepository: Send + Sync {
    /// Load the record of `player`, or `None` if the player never fought.
    fn load(&self, player: &str) -> Result<Option<PlayerRecord>>;

    /// Save the record of `player`, replacing any previous one.
    fn save(&self, player: &str, record: &PlayerRecord) -> Result<()>;

    /// List every stored record with its player name.
    fn list(&self) -> Result<Vec<(String, PlayerRecord)>>;
}

/// Repository for the battle history.
///
/// Append-only: summaries are never rewritten or removed.
///
/// # File Format
///
/// File-backed logs store each entry as:
/// ```text
/// [u32 length][bincode serialized BattleSummary]
/// ```
pub trait HistoryRepository: Send + Sync {
    /// Append a summary to the log.
    ///
    /// Returns the position of the entry: a byte offset for files, an index
    /// for in-memory logs.
    fn append(&mut self, summary: &BattleSummary) -> Result<u64>;

    /// Read every summary in append order.
    fn read_all(&self) -> Result<Vec<BattleSummary>>;

    /// Flush buffered writes to durable storage.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
