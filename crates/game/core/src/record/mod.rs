//! Aggregate player bookkeeping built on top of battle results.
//!
//! None of this feeds back into the engine; it is derived from
//! [`crate::BattleResult`] after the fact.

pub mod history;
pub mod leaderboard;
pub mod player;

pub use history::BattleSummary;
pub use leaderboard::{Leaderboard, RankedEntry};
pub use player::{Achievements, Outcome, PlayerRecord};
