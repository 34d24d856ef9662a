//! Player ranking by rating.

use super::player::PlayerRecord;

/// A player's position on the leaderboard.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedEntry {
    /// 1-based rank.
    pub rank: u32,
    pub player: String,
    pub record: PlayerRecord,
}

/// Players ordered by rating, then wins, then name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<RankedEntry>,
}

impl Leaderboard {
    pub fn rank(players: impl IntoIterator<Item = (String, PlayerRecord)>) -> Self {
        let mut players: Vec<_> = players.into_iter().collect();
        players.sort_by(|(name_a, a), (name_b, b)| {
            b.rating
                .cmp(&a.rating)
                .then_with(|| b.wins.cmp(&a.wins))
                .then_with(|| name_a.cmp(name_b))
        });

        let entries = players
            .into_iter()
            .enumerate()
            .map(|(index, (player, record))| RankedEntry {
                rank: index as u32 + 1,
                player,
                record,
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn top(&self, n: usize) -> &[RankedEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn position(&self, player: &str) -> Option<&RankedEntry> {
        self.entries.iter().find(|entry| entry.player == player)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
