//! Combat resolution system.
//!
//! This module provides the battle engine and the pure functions it is built
//! from. Given two combatants, a configuration and a random source, a battle
//! is resolved eagerly into a [`BattleResult`].
//!
//! # Architecture
//!
//! - **Pure Functions**: Damage math never mutates its inputs
//! - **Injected Randomness**: All rolls come from a caller-provided [`crate::RandomSource`]
//! - **Strict Alternation**: hero1 acts before hero2 in every round
//!
//! # Core Functions
//!
//! - `BattleEngine::run`: Full battle to a winner or draw
//! - `resolve_strike`: One attack action (variance + crit + mitigation)
//! - `defense_factor`: Fraction of damage that passes through defense
//! - `apply_damage`: HP reduction (clamped to 0)

pub mod damage;
pub mod engine;
pub mod result;

pub use damage::{Strike, apply_damage, calculate_damage, defense_factor, resolve_strike};
pub use engine::{BattleEngine, run_battle};
pub use result::{BattleResult, DRAW_SENTINEL, RoundEvent, Winner};
