//! Hero records as delivered by the roster provider.

use super::{CombatantStats, DerivedStats};

/// Hero archetype chosen at mint time.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum HeroClass {
    Assassin,
    Wizard,
    Sniper,
    Paladin,
    Ranger,
    Sorceress,
}

/// A minted hero.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hero {
    /// On-chain object id.
    pub id: String,
    pub name: String,
    pub class: HeroClass,
    #[cfg_attr(feature = "serde", serde(default))]
    pub level: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub xp: u32,
    pub hp: u32,
    /// Missing combat stats deserialize as 0; see [`Hero::with_derived_stats`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub attack: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub defense: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub chakra: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub image_url: String,
}

impl Hero {
    /// Headline strength figure shown next to each hero in the arena.
    pub fn power(&self) -> u64 {
        self.attack as u64 + self.defense as u64 + self.damage as u64
    }

    /// True when the record carries no combat stats at all.
    ///
    /// Heroes minted before the contract stored combat stats come back with
    /// zeros for attack, defense and damage.
    pub fn lacks_combat_stats(&self) -> bool {
        self.attack == 0 && self.defense == 0 && self.damage == 0
    }

    /// Fills missing combat stats with the stable values derived from the id.
    #[must_use]
    pub fn with_derived_stats(mut self) -> Self {
        if self.lacks_combat_stats() {
            let derived = DerivedStats::for_hero(&self.id);
            self.attack = derived.attack;
            self.defense = derived.defense;
            self.damage = derived.damage;
            if self.chakra == 0 {
                self.chakra = derived.chakra;
            }
        }
        self
    }

    /// Projects the record onto the stats a battle consumes.
    pub fn to_combatant(&self) -> CombatantStats {
        CombatantStats {
            id: self.id.clone(),
            name: self.name.clone(),
            health: self.hp,
            attack: self.attack,
            defense: self.defense,
            damage: self.damage,
        }
    }
}
