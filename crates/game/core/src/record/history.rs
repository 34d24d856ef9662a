use crate::combat::{BattleResult, Winner};
use crate::stats::CombatantStats;

/// Compact history entry for a finished battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleSummary {
    pub id: String,
    pub hero1_id: String,
    pub hero2_id: String,
    pub hero1_name: String,
    pub hero2_name: String,
    pub winner: Winner,
    /// Unix time in milliseconds.
    pub timestamp_ms: i64,
    pub battle_rounds: u32,
}

impl BattleSummary {
    pub fn new(
        id: impl Into<String>,
        hero1: &CombatantStats,
        hero2: &CombatantStats,
        result: &BattleResult,
        timestamp_ms: i64,
    ) -> Self {
        Self {
            id: id.into(),
            hero1_id: hero1.id.clone(),
            hero2_id: hero2.id.clone(),
            hero1_name: hero1.name.clone(),
            hero2_name: hero2.name.clone(),
            winner: result.winner.clone(),
            timestamp_ms,
            battle_rounds: result.round_count,
        }
    }

    /// Display name of the winner, or `None` for a draw.
    pub fn winner_name(&self) -> Option<&str> {
        match &self.winner {
            Winner::Combatant(id) if *id == self.hero1_id => Some(&self.hero1_name),
            Winner::Combatant(id) if *id == self.hero2_id => Some(&self.hero2_name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_copies_battle_facts() {
        let hero1 = CombatantStats::new("0x1", "Naruto", 100, 10, 10, 10);
        let hero2 = CombatantStats::new("0x2", "Sasuke", 100, 10, 10, 10);
        let result = BattleResult {
            combatants: ["0x1".into(), "0x2".into()],
            winner: Winner::Combatant("0x2".into()),
            rounds: Vec::new(),
            round_count: 7,
            final_health: [0, 12],
        };

        let summary = BattleSummary::new("b-1", &hero1, &hero2, &result, 1_700_000_000_000);
        assert_eq!(summary.battle_rounds, 7);
        assert_eq!(summary.winner_name(), Some("Sasuke"));

        let drawn = BattleResult {
            winner: Winner::Draw,
            ..result
        };
        let summary = BattleSummary::new("b-2", &hero1, &hero2, &drawn, 0);
        assert_eq!(summary.winner_name(), None);
    }
}
