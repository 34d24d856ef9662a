//! File-based repository implementations.

mod history;
mod records;

pub use history::FileHistoryLog;
pub use records::FileRecordRepository;
