//! File-based RecordRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use arena_core::PlayerRecord;
use serde::{Deserialize, Serialize};

use crate::repository::{RecordRepository, RepositoryError, Result};

/// On-disk shape of a record file.
#[derive(Debug, Serialize, Deserialize)]
struct StoredRecord {
    player: String,
    record: PlayerRecord,
}

/// File-based implementation of RecordRepository.
///
/// Stores one pretty-printed JSON file per player.
///
/// # File Format
///
/// Records are stored as `record_{hex(player)}.json`. The player name is
/// hex-encoded so any name maps to a valid file name; the file itself keeps
/// the readable name next to the record.
pub struct FileRecordRepository {
    base_dir: PathBuf,
}

impl FileRecordRepository {
    /// Create a new file-based record repository.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    /// Get the path to a record file.
    fn record_path(&self, player: &str) -> PathBuf {
        self.base_dir
            .join(format!("record_{}.json", hex::encode(player.as_bytes())))
    }

    fn read_record(path: &Path) -> Result<StoredRecord> {
        let bytes = fs::read(path).map_err(RepositoryError::Io)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl RecordRepository for FileRecordRepository {
    fn load(&self, player: &str) -> Result<Option<PlayerRecord>> {
        let path = self.record_path(player);

        if !path.exists() {
            return Ok(None);
        }

        let stored = Self::read_record(&path)?;
        if stored.player != player {
            return Err(RepositoryError::CorruptedData(format!(
                "{} belongs to {:?}, expected {:?}",
                path.display(),
                stored.player,
                player
            )));
        }

        tracing::debug!("Loaded record for {} from {}", player, path.display());

        Ok(Some(stored.record))
    }

    fn save(&self, player: &str, record: &PlayerRecord) -> Result<()> {
        let path = self.record_path(player);
        let temp_path = path.with_extension("json.tmp");

        let stored = StoredRecord {
            player: player.to_string(),
            record: record.clone(),
        };
        let bytes = serde_json::to_vec_pretty(&stored)?;

        // Write to temp file
        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved record for {} to {}", player, path.display());

        Ok(())
    }

    fn list(&self) -> Result<Vec<(String, PlayerRecord)>> {
        let mut records = Vec::new();

        let entries = fs::read_dir(&self.base_dir).map_err(RepositoryError::Io)?;

        for entry in entries {
            let entry = entry.map_err(RepositoryError::Io)?;
            let path = entry.path();

            let is_record = path
                .file_name()
                .and_then(|s| s.to_str())
                .is_some_and(|name| name.starts_with("record_") && name.ends_with(".json"));
            if !is_record {
                continue;
            }

            let stored = Self::read_record(&path)?;
            records.push((stored.player, stored.record));
        }

        records.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(records)
    }
}
