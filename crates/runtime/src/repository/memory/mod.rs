//! In-memory repository implementations for tests and throwaway sessions.

mod history;
mod records;

pub use history::InMemoryHistory;
pub use records::InMemoryRecordRepo;
