//! Runtime orchestration for the hero arena.
//!
//! This crate wires the pure battle engine from `arena-core` to hero lookup,
//! seeding, timestamps and persistence. Consumers build an [`Arena`] and call
//! [`Arena::fight`]; everything the battle leaves behind is stored through the
//! repository traits.
//!
//! Modules are organized by responsibility:
//! - [`arena`] hosts the orchestrator and builder
//! - [`roster`] resolves hero ids to heroes
//! - [`repository`] persists player records and the battle history
//! - [`config`] reads session settings from the environment
pub mod arena;
pub mod config;
pub mod error;
pub mod repository;
pub mod roster;

pub use arena::{Arena, ArenaBuilder, BattleReport};
pub use config::{Persistence, RuntimeConfig, default_save_dir};
pub use error::{Result, RuntimeError};
pub use repository::{
    FileHistoryLog, FileRecordRepository, HistoryRepository, InMemoryHistory, InMemoryRecordRepo,
    RecordRepository, RepositoryError,
};
pub use roster::{RosterProvider, StaticRoster};
