//! Repository layer for data that outlives a single battle.
//!
//! Repositories hold what CHANGES as the arena is used:
//! - Player records (wins, losses, rating)
//! - The append-only battle history
//!
//! Static content (heroes, tuning) comes from `arena-content`, not from here.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::{FileHistoryLog, FileRecordRepository};
pub use memory::{InMemoryHistory, InMemoryRecordRepo};
pub use traits::{HistoryRepository, RecordRepository};
