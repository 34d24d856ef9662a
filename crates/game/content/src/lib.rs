//! Data-driven arena content and its loaders.
//!
//! This crate reads the static inputs of the arena from files:
//! - Battle tuning (TOML, see [`ConfigLoader`])
//! - Hero rosters (RON, see [`RosterLoader`])
//!
//! Everything is parsed straight into `arena-core` types via their serde
//! derives, so the loaders carry no parallel schema.

pub mod loaders;

pub use loaders::{ConfigLoader, ContentFactory, LoadResult, RosterLoader};
