//! Battle rules and data types shared across the arena crates.
//!
//! `arena-core` defines the canonical 1v1 battle resolution and exposes pure
//! APIs that are reused by the runtime, the content loaders and offline tools.
//! Every battle flows through [`combat::BattleEngine`], which consumes two
//! [`CombatantStats`] and an injected [`RandomSource`] and returns a complete
//! [`BattleResult`].
pub mod combat;
pub mod config;
pub mod error;
pub mod record;
pub mod rng;
pub mod stats;

pub use combat::{
    BattleEngine, BattleResult, DRAW_SENTINEL, RoundEvent, Strike, Winner, apply_damage,
    calculate_damage, defense_factor, resolve_strike, run_battle,
};
pub use config::{BattleConfig, VarianceBand};
pub use error::{
    BattleError, CombatantFault, CombatantSlot, ConfigFault, ErrorSeverity, GameError,
};
pub use record::{Achievements, BattleSummary, Leaderboard, Outcome, PlayerRecord, RankedEntry};
pub use rng::{PcgRng, RandomSource, SequenceRng};
pub use stats::{CombatantStats, DerivedStats, Hero, HeroClass};
