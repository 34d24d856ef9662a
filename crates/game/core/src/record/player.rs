//! Win/loss record and rating of a single player.

use bitflags::bitflags;

use crate::combat::{BattleResult, Winner};

/// Result of a battle from one combatant's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

impl Outcome {
    /// Outcome for `combatant_id`, or `None` if it did not take part.
    pub fn for_combatant(result: &BattleResult, combatant_id: &str) -> Option<Self> {
        let took_part = result.slot_of(combatant_id).is_some();

        match &result.winner {
            Winner::Combatant(id) if id == combatant_id => Some(Outcome::Win),
            Winner::Combatant(_) if took_part => Some(Outcome::Loss),
            Winner::Draw if took_part => Some(Outcome::Draw),
            _ => None,
        }
    }
}

bitflags! {
    /// Badges unlocked by a player record.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Achievements: u8 {
        /// At least one battle fought.
        const FIRST_BATTLE = 1 << 0;
        /// Ten or more battles fought.
        const VETERAN = 1 << 1;
        /// Win rate of 50% or better.
        const WINNER = 1 << 2;
        /// Five or more consecutive wins.
        const ON_FIRE = 1 << 3;
        /// Rating of 1200 or more.
        const RATED = 1 << 4;
        /// Five or more heroes owned.
        const COLLECTOR = 1 << 5;
    }
}

/// Running battle statistics of one player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerRecord {
    pub total_battles: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub win_streak: u32,
    pub total_heroes: u32,
    pub rating: u32,
}

impl PlayerRecord {
    pub const STARTING_RATING: u32 = 1000;
    /// Flat rating change per decided battle. Opponent rating is not considered.
    pub const RATING_STEP: u32 = 16;

    pub const VETERAN_BATTLES: u32 = 10;
    pub const ON_FIRE_STREAK: u32 = 5;
    pub const RATED_THRESHOLD: u32 = 1200;
    pub const COLLECTOR_HEROES: u32 = 5;

    pub fn new() -> Self {
        Self {
            total_battles: 0,
            wins: 0,
            losses: 0,
            draws: 0,
            win_streak: 0,
            total_heroes: 0,
            rating: Self::STARTING_RATING,
        }
    }

    /// Folds one battle outcome into the record.
    pub fn apply(&mut self, outcome: Outcome) {
        self.total_battles += 1;
        match outcome {
            Outcome::Win => {
                self.wins += 1;
                self.win_streak += 1;
                self.rating = self.rating.saturating_add(Self::RATING_STEP);
            }
            Outcome::Loss => {
                self.losses += 1;
                self.win_streak = 0;
                self.rating = self.rating.saturating_sub(Self::RATING_STEP);
            }
            Outcome::Draw => {
                self.draws += 1;
                self.win_streak = 0;
            }
        }
    }

    /// Win percentage rounded to the nearest integer; 0 before any battle.
    pub fn win_rate(&self) -> u32 {
        if self.total_battles == 0 {
            return 0;
        }
        ((self.wins as f64 / self.total_battles as f64) * 100.0).round() as u32
    }

    pub fn achievements(&self) -> Achievements {
        let mut unlocked = Achievements::empty();
        unlocked.set(Achievements::FIRST_BATTLE, self.total_battles >= 1);
        unlocked.set(
            Achievements::VETERAN,
            self.total_battles >= Self::VETERAN_BATTLES,
        );
        unlocked.set(
            Achievements::WINNER,
            self.total_battles >= 1 && self.win_rate() >= 50,
        );
        unlocked.set(
            Achievements::ON_FIRE,
            self.win_streak >= Self::ON_FIRE_STREAK,
        );
        unlocked.set(
            Achievements::RATED,
            self.rating >= Self::RATED_THRESHOLD,
        );
        unlocked.set(
            Achievements::COLLECTOR,
            self.total_heroes >= Self::COLLECTOR_HEROES,
        );
        unlocked
    }
}

impl Default for PlayerRecord {
    fn default() -> Self {
        Self::new()
    }
}
