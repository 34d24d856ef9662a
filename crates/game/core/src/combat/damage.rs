//! Damage calculation and application.

use crate::config::BattleConfig;
use crate::rng::RandomSource;
use crate::stats::CombatantStats;

/// Outcome of a single attack action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Strike {
    pub damage: u32,
    pub is_critical: bool,
}

/// Fraction of incoming damage that passes through `defense`.
///
/// # Formula
///
/// ```text
/// factor = max(mitigation_floor, 1 - defense / 100)
/// ```
pub fn defense_factor(defense: u32, mitigation_floor: f64) -> f64 {
    (1.0 - defense as f64 / 100.0).max(mitigation_floor)
}

/// Calculate the damage of one attack.
///
/// # Formula
///
/// ```text
/// final_damage = floor(base_damage × defense_factor × variance × crit_multiplier)
/// ```
///
/// `crit_multiplier` is `1.0` for a regular hit. The result is clamped to
/// `[0, u32::MAX]`.
pub fn calculate_damage(
    base_damage: u64,
    defense_factor: f64,
    variance: f64,
    crit_multiplier: f64,
) -> u32 {
    let raw = (base_damage as f64 * defense_factor * variance * crit_multiplier).floor();
    if raw.is_nan() || raw <= 0.0 {
        0
    } else if raw >= u32::MAX as f64 {
        u32::MAX
    } else {
        raw as u32
    }
}

/// Roll and compute one attack from `attacker` against `defender`.
///
/// Draws exactly two values from `rng`, variance first and crit second, so
/// a seeded source replays identically.
pub fn resolve_strike<R>(
    attacker: &CombatantStats,
    defender: &CombatantStats,
    config: &BattleConfig,
    rng: &mut R,
) -> Strike
where
    R: RandomSource + ?Sized,
{
    let variance = rng.range(config.variance.min, config.variance.max);
    let is_critical = rng.chance(config.crit_chance);
    let multiplier = if is_critical {
        config.crit_multiplier
    } else {
        1.0
    };

    let damage = calculate_damage(
        attacker.base_damage(),
        defense_factor(defender.defense, config.mitigation_floor),
        variance,
        multiplier,
    );

    Strike {
        damage,
        is_critical,
    }
}

/// Apply damage to current HP.
///
/// Returns the new HP value, clamped to 0.
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}
