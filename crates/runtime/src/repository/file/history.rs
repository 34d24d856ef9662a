//! Append-only battle history log.
//!
//! Each battle is written as one length-prefixed bincode record:
//! ```text
//! [u32 length][bincode serialized BattleSummary]
//! [u32 length][bincode serialized BattleSummary]
//! ...
//! ```

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use arena_core::BattleSummary;

use crate::repository::{HistoryRepository, RepositoryError, Result};

/// File-based battle history.
///
/// Every append is flushed before it returns, so a summary is on disk by the
/// time the battle report reaches the caller. A torn trailing record left by
/// a crash is cut off when the log is opened.
pub struct FileHistoryLog {
    /// Full path to the log file
    path: PathBuf,
    /// Buffered writer
    writer: BufWriter<File>,
    /// Current byte offset for next write
    current_offset: u64,
}

impl FileHistoryLog {
    pub const DEFAULT_FILE: &'static str = "history.log";

    /// Open or create a history log.
    ///
    /// Creates the directory and file if they don't exist, or opens the
    /// existing file for appending.
    pub fn open_or_create(base_dir: impl AsRef<Path>, filename: impl AsRef<str>) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        std::fs::create_dir_all(base_dir).map_err(RepositoryError::Io)?;

        let path = base_dir.join(filename.as_ref());
        if path.exists() {
            Self::truncate_torn_tail(&path)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(RepositoryError::Io)?;

        let current_offset = file.metadata().map_err(RepositoryError::Io)?.len();
        let writer = BufWriter::new(file);

        tracing::debug!(
            "Opened/created history log: {} at offset {}",
            path.display(),
            current_offset
        );

        Ok(Self {
            path,
            writer,
            current_offset,
        })
    }

    /// Get the current size of the log in bytes.
    pub fn size(&self) -> u64 {
        self.current_offset
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Cuts the file back to its last complete entry.
    fn truncate_torn_tail(path: &Path) -> Result<()> {
        let file = File::open(path).map_err(RepositoryError::Io)?;
        let mut reader = BufReader::new(file);

        let mut offset = 0;
        loop {
            match Self::read_entry(&mut reader, offset) {
                Ok(Some((_, next_offset))) => offset = next_offset,
                Ok(None) => return Ok(()),
                Err(RepositoryError::PartialWrite {
                    expected, actual, ..
                }) => {
                    tracing::warn!(
                        "Truncating torn history entry in {} at offset {} ({} of {} bytes)",
                        path.display(),
                        offset,
                        actual,
                        expected
                    );
                    let file = OpenOptions::new()
                        .write(true)
                        .open(path)
                        .map_err(RepositoryError::Io)?;
                    file.set_len(offset).map_err(RepositoryError::Io)?;
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Read one entry, or `None` at a clean end of file.
    fn read_entry(reader: &mut impl Read, offset: u64) -> Result<Option<(BattleSummary, u64)>> {
        let mut len_bytes = [0u8; 4];
        let filled = read_up_to(reader, &mut len_bytes)?;
        if filled == 0 {
            return Ok(None);
        }
        if filled < len_bytes.len() {
            return Err(RepositoryError::PartialWrite {
                offset,
                expected: len_bytes.len(),
                actual: filled,
            });
        }

        let len = u32::from_le_bytes(len_bytes) as usize;
        let mut data = vec![0u8; len];
        let filled = read_up_to(reader, &mut data)?;
        if filled < len {
            return Err(RepositoryError::PartialWrite {
                offset,
                expected: len,
                actual: filled,
            });
        }

        let summary = bincode::deserialize(&data)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        Ok(Some((summary, offset + 4 + len as u64)))
    }
}

/// Fills `buf` as far as the reader allows and returns the byte count.
fn read_up_to(reader: &mut impl Read, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(RepositoryError::Io(e)),
        }
    }
    Ok(filled)
}

impl HistoryRepository for FileHistoryLog {
    fn append(&mut self, summary: &BattleSummary) -> Result<u64> {
        let offset = self.current_offset;

        let bytes = bincode::serialize(summary)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        let len = u32::try_from(bytes.len()).map_err(|_| {
            RepositoryError::Serialization(format!("entry of {} bytes is too large", bytes.len()))
        })?;

        // Write [length][data]
        self.writer
            .write_all(&len.to_le_bytes())
            .map_err(RepositoryError::Io)?;
        self.writer.write_all(&bytes).map_err(RepositoryError::Io)?;
        self.writer.flush().map_err(RepositoryError::Io)?;

        self.current_offset += 4 + bytes.len() as u64;

        Ok(offset)
    }

    fn read_all(&self) -> Result<Vec<BattleSummary>> {
        let file = File::open(&self.path).map_err(RepositoryError::Io)?;
        let mut reader = BufReader::new(file);

        let mut summaries = Vec::new();
        let mut offset = 0;
        loop {
            match Self::read_entry(&mut reader, offset) {
                Ok(Some((summary, next_offset))) => {
                    summaries.push(summary);
                    offset = next_offset;
                }
                Ok(None) => break,
                Err(RepositoryError::PartialWrite {
                    offset,
                    expected,
                    actual,
                }) => {
                    tracing::warn!(
                        "Ignoring torn history entry in {} at offset {} ({} of {} bytes)",
                        self.path.display(),
                        offset,
                        actual,
                        expected
                    );
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(summaries)
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(RepositoryError::Io)?;
        Ok(())
    }
}

impl Drop for FileHistoryLog {
    fn drop(&mut self) {
        if let Err(e) = self.writer.flush() {
            tracing::warn!(
                "Failed to flush history log '{}' on drop: {}",
                self.path.display(),
                e
            );
        }
    }
}
