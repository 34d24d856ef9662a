//! Hero roster access for the arena.

use arena_core::Hero;

use crate::error::{Result, RuntimeError};

/// Source of the heroes a player can send into battle.
///
/// This is the seam where an on-chain roster would plug in; the arena itself
/// only needs lookups.
pub trait RosterProvider: Send + Sync {
    /// Every hero in roster order.
    fn heroes(&self) -> &[Hero];

    /// Finds a hero by its full id or by a prefix matching exactly one id.
    ///
    /// Matching ignores ASCII case, so `0xAB` finds `0xab12`.
    fn find(&self, query: &str) -> Result<&Hero> {
        let query = query.trim();
        let heroes = self.heroes();

        if let Some(hero) = heroes.iter().find(|h| h.id.eq_ignore_ascii_case(query)) {
            return Ok(hero);
        }

        let needle = query.to_ascii_lowercase();
        let mut matches = heroes
            .iter()
            .filter(|h| !needle.is_empty() && h.id.to_ascii_lowercase().starts_with(&needle));

        match (matches.next(), matches.next()) {
            (Some(hero), None) => Ok(hero),
            (None, _) => Err(RuntimeError::UnknownHero {
                query: query.to_string(),
            }),
            (Some(first), Some(second)) => {
                let mut candidates = vec![first.id.clone(), second.id.clone()];
                candidates.extend(matches.map(|h| h.id.clone()));
                Err(RuntimeError::AmbiguousHero {
                    query: query.to_string(),
                    candidates,
                })
            }
        }
    }
}

/// Fixed roster loaded once at startup.
#[derive(Clone, Debug, Default)]
pub struct StaticRoster {
    heroes: Vec<Hero>,
}

impl StaticRoster {
    /// Builds a roster, filling missing combat stats from each hero's id.
    pub fn new(heroes: Vec<Hero>) -> Self {
        let heroes: Vec<Hero> = heroes.into_iter().map(Hero::with_derived_stats).collect();
        tracing::debug!(heroes = heroes.len(), "roster ready");
        Self { heroes }
    }
}

impl RosterProvider for StaticRoster {
    fn heroes(&self) -> &[Hero] {
        &self.heroes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::{DerivedStats, HeroClass};

    fn hero(id: &str, attack: u32) -> Hero {
        Hero {
            id: id.into(),
            name: format!("hero {id}"),
            class: HeroClass::Ranger,
            level: 1,
            xp: 0,
            hp: 100,
            attack,
            defense: 0,
            damage: 0,
            chakra: 0,
            image_url: String::new(),
        }
    }

    fn roster() -> StaticRoster {
        StaticRoster::new(vec![hero("0xab12", 10), hero("0xab34", 10), hero("0xcd56", 10)])
    }

    #[test]
    fn exact_id_wins_over_prefix() {
        let roster = StaticRoster::new(vec![hero("0xab", 10), hero("0xabcd", 10)]);
        assert_eq!(roster.find("0xab").unwrap().id, "0xab");
    }

    #[test]
    fn unique_prefix_resolves() {
        assert_eq!(roster().find("0xcd").unwrap().id, "0xcd56");
        assert_eq!(roster().find("0XAB3").unwrap().id, "0xab34");
    }

    #[test]
    fn ambiguous_prefix_lists_candidates() {
        match roster().find("0xab") {
            Err(RuntimeError::AmbiguousHero { candidates, .. }) => {
                assert_eq!(candidates, ["0xab12", "0xab34"]);
            }
            other => panic!("unexpected lookup result: {other:?}"),
        }
    }

    #[test]
    fn unknown_and_empty_queries_fail() {
        assert!(matches!(
            roster().find("0xff"),
            Err(RuntimeError::UnknownHero { .. })
        ));
        assert!(matches!(
            roster().find("  "),
            Err(RuntimeError::UnknownHero { .. })
        ));
    }

    #[test]
    fn heroes_without_stats_get_derived_ones() {
        let roster = StaticRoster::new(vec![hero("0xfeed", 0), hero("0xbeef", 42)]);

        let derived = DerivedStats::for_hero("0xfeed");
        assert_eq!(roster.heroes()[0].attack, derived.attack);
        assert_eq!(roster.heroes()[1].attack, 42);
    }
}
