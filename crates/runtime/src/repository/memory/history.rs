//! In-memory battle history.

use arena_core::BattleSummary;

use crate::repository::{HistoryRepository, Result};

/// In-memory history for tests and sessions that should leave no trace.
///
/// Positions returned by `append` are entry indices.
#[derive(Default)]
pub struct InMemoryHistory {
    entries: Vec<BattleSummary>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryRepository for InMemoryHistory {
    fn append(&mut self, summary: &BattleSummary) -> Result<u64> {
        self.entries.push(summary.clone());
        Ok(self.entries.len() as u64 - 1)
    }

    fn read_all(&self) -> Result<Vec<BattleSummary>> {
        Ok(self.entries.clone())
    }
}
