//! Battle log and terminal result types.

/// Identifier reported by [`BattleResult::winner_id`] when nobody won.
pub const DRAW_SENTINEL: &str = "draw";

/// One attack action in the battle log.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundEvent {
    /// 1-based round this action belongs to.
    pub round: u32,
    pub actor_id: String,
    pub damage_dealt: u32,
    pub is_critical: bool,
    /// Defender health right after this action, never below 0.
    pub defender_health_after: u32,
}

/// Terminal outcome of a battle.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Winner {
    Combatant(String),
    Draw,
}

impl Winner {
    pub fn id(&self) -> &str {
        match self {
            Winner::Combatant(id) => id,
            Winner::Draw => DRAW_SENTINEL,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, Winner::Draw)
    }
}

/// Full result of one battle, owned by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleResult {
    /// Ids of hero1 and hero2.
    pub combatants: [String; 2],
    pub winner: Winner,
    /// Every attack action in order.
    pub rounds: Vec<RoundEvent>,
    pub round_count: u32,
    /// Remaining health of hero1 and hero2.
    pub final_health: [u32; 2],
}

impl BattleResult {
    /// Winner id, or `"draw"`.
    pub fn winner_id(&self) -> &str {
        self.winner.id()
    }

    pub fn is_draw(&self) -> bool {
        self.winner.is_draw()
    }

    /// Slot index (0 for hero1, 1 for hero2) of `combatant_id`.
    pub fn slot_of(&self, combatant_id: &str) -> Option<usize> {
        self.combatants.iter().position(|id| id == combatant_id)
    }

    /// Actions performed by `actor_id`.
    pub fn actions_by<'a>(&'a self, actor_id: &'a str) -> impl Iterator<Item = &'a RoundEvent> {
        self.rounds
            .iter()
            .filter(move |event| event.actor_id == actor_id)
    }

    /// Total damage dealt by `actor_id` over the whole battle.
    pub fn total_damage_by(&self, actor_id: &str) -> u64 {
        self.actions_by(actor_id)
            .map(|event| event.damage_dealt as u64)
            .sum()
    }

    /// Number of critical hits landed by `actor_id`.
    pub fn crits_by(&self, actor_id: &str) -> usize {
        self.actions_by(actor_id)
            .filter(|event| event.is_critical)
            .count()
    }
}
