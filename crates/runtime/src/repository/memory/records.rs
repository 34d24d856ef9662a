//! In-memory RecordRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use arena_core::PlayerRecord;

use crate::repository::{RecordRepository, RepositoryError, Result};

/// In-memory implementation of RecordRepository.
pub struct InMemoryRecordRepo {
    records: RwLock<HashMap<String, PlayerRecord>>,
}

impl InMemoryRecordRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryRecordRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordRepository for InMemoryRecordRepo {
    fn load(&self, player: &str) -> Result<Option<PlayerRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(records.get(player).cloned())
    }

    fn save(&self, player: &str, record: &PlayerRecord) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        records.insert(player.to_string(), record.clone());
        Ok(())
    }

    fn list(&self) -> Result<Vec<(String, PlayerRecord)>> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut listed: Vec<_> = records
            .iter()
            .map(|(player, record)| (player.clone(), record.clone()))
            .collect();
        listed.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(listed)
    }
}
