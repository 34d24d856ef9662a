//! Combat statistics and hero records.
//!
//! - [`CombatantStats`]: the resolved numbers a battle consumes
//! - [`Hero`]: the on-chain record a roster provider delivers
//! - [`DerivedStats`]: stable per-hero stats keyed on the hero id

pub mod derive;
pub mod hero;

pub use derive::DerivedStats;
pub use hero::{Hero, HeroClass};

use crate::combat::DRAW_SENTINEL;
use crate::error::{BattleError, CombatantFault, CombatantSlot};

/// One side of a battle.
///
/// Immutable for the duration of a battle; the engine only borrows it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantStats {
    pub id: String,
    pub name: String,
    /// Starting hit points. Must be positive.
    pub health: u32,
    pub attack: u32,
    /// Percentage-like damage reduction, not clamped to 100.
    pub defense: u32,
    /// Secondary offensive stat added to `attack`.
    pub damage: u32,
}

impl CombatantStats {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        health: u32,
        attack: u32,
        defense: u32,
        damage: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            health,
            attack,
            defense,
            damage,
        }
    }

    /// Damage before mitigation, variance and crits.
    pub fn base_damage(&self) -> u64 {
        self.attack as u64 + self.damage as u64
    }

    /// Rejects combatants that cannot enter a battle.
    pub fn validate(&self, slot: CombatantSlot) -> Result<(), BattleError> {
        let fault = if self.id.trim().is_empty() {
            CombatantFault::MissingId
        } else if self.id == DRAW_SENTINEL {
            CombatantFault::ReservedId
        } else if self.name.trim().is_empty() {
            CombatantFault::MissingName
        } else if self.health == 0 {
            CombatantFault::NonPositiveHealth
        } else {
            return Ok(());
        };
        Err(BattleError::combatant(slot, &self.id, fault))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knight() -> CombatantStats {
        CombatantStats::new("0xa1", "Knight", 120, 40, 25, 15)
    }

    #[test]
    fn base_damage_sums_attack_and_damage() {
        assert_eq!(knight().base_damage(), 55);

        let maxed = CombatantStats::new("0xff", "Max", 1, u32::MAX, 0, u32::MAX);
        assert_eq!(maxed.base_damage(), 2 * u32::MAX as u64);
    }

    #[test]
    fn valid_combatant_passes() {
        assert!(knight().validate(CombatantSlot::First).is_ok());
    }

    #[test]
    fn faults_are_reported_per_slot() {
        let mut dead = knight();
        dead.health = 0;
        assert_eq!(
            dead.validate(CombatantSlot::Second),
            Err(BattleError::InvalidCombatant {
                slot: CombatantSlot::Second,
                id: "0xa1".into(),
                fault: CombatantFault::NonPositiveHealth,
            })
        );

        let mut anonymous = knight();
        anonymous.id = "  ".into();
        assert!(matches!(
            anonymous.validate(CombatantSlot::First),
            Err(BattleError::InvalidCombatant {
                fault: CombatantFault::MissingId,
                ..
            })
        ));

        let mut unnamed = knight();
        unnamed.name.clear();
        assert!(matches!(
            unnamed.validate(CombatantSlot::First),
            Err(BattleError::InvalidCombatant {
                fault: CombatantFault::MissingName,
                ..
            })
        ));

        let mut sentinel = knight();
        sentinel.id = DRAW_SENTINEL.into();
        assert!(matches!(
            sentinel.validate(CombatantSlot::First),
            Err(BattleError::InvalidCombatant {
                fault: CombatantFault::ReservedId,
                ..
            })
        ));
    }
}
