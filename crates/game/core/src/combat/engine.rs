//! Turn-based 1v1 battle resolution.

use crate::config::BattleConfig;
use crate::error::{BattleError, CombatantFault, CombatantSlot};
use crate::rng::RandomSource;
use crate::stats::CombatantStats;

use super::damage::{apply_damage, resolve_strike};
use super::result::{BattleResult, RoundEvent, Winner};

/// Resolves battles under a fixed configuration.
///
/// The engine holds no per-battle state, so one instance can serve any number
/// of concurrent callers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BattleEngine {
    config: BattleConfig,
}

impl BattleEngine {
    pub fn new(config: BattleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Runs a full battle between `hero1` and `hero2`.
    ///
    /// hero1 acts first in every round. The battle ends the moment a defender
    /// reaches 0 health, or as a draw once `round_cap` rounds complete with
    /// both sides alive.
    ///
    /// # Errors
    ///
    /// Returns [`BattleError`] before drawing any random value when either
    /// combatant or the configuration is invalid.
    pub fn run<R>(
        &self,
        hero1: &CombatantStats,
        hero2: &CombatantStats,
        rng: &mut R,
    ) -> Result<BattleResult, BattleError>
    where
        R: RandomSource + ?Sized,
    {
        self.config.validate()?;
        hero1.validate(CombatantSlot::First)?;
        hero2.validate(CombatantSlot::Second)?;
        if hero1.id == hero2.id {
            return Err(BattleError::combatant(
                CombatantSlot::Second,
                &hero2.id,
                CombatantFault::DuplicateId,
            ));
        }

        let combatants = [hero1, hero2];
        let ids = [hero1.id.clone(), hero2.id.clone()];
        let mut health = [hero1.health, hero2.health];
        let mut rounds = Vec::with_capacity(self.config.round_cap.min(64) as usize * 2);

        for round in 1..=self.config.round_cap {
            for attacker in 0..2 {
                let defender = 1 - attacker;
                let strike = resolve_strike(
                    combatants[attacker],
                    combatants[defender],
                    &self.config,
                    rng,
                );
                health[defender] = apply_damage(health[defender], strike.damage);

                tracing::trace!(
                    round,
                    actor = %combatants[attacker].id,
                    damage = strike.damage,
                    critical = strike.is_critical,
                    defender_health = health[defender],
                    "strike"
                );

                rounds.push(RoundEvent {
                    round,
                    actor_id: combatants[attacker].id.clone(),
                    damage_dealt: strike.damage,
                    is_critical: strike.is_critical,
                    defender_health_after: health[defender],
                });

                if health[defender] == 0 {
                    let winner = combatants[attacker].id.clone();
                    tracing::debug!(%winner, round, actions = rounds.len(), "battle decided");
                    return Ok(BattleResult {
                        combatants: ids,
                        winner: Winner::Combatant(winner),
                        rounds,
                        round_count: round,
                        final_health: health,
                    });
                }
            }
        }

        tracing::debug!(
            rounds = self.config.round_cap,
            hero1_health = health[0],
            hero2_health = health[1],
            "battle drawn at round cap"
        );

        Ok(BattleResult {
            combatants: ids,
            winner: Winner::Draw,
            rounds,
            round_count: self.config.round_cap,
            final_health: health,
        })
    }
}

/// Runs one battle with `config`; shorthand for [`BattleEngine::run`].
pub fn run_battle<R>(
    hero1: &CombatantStats,
    hero2: &CombatantStats,
    config: &BattleConfig,
    rng: &mut R,
) -> Result<BattleResult, BattleError>
where
    R: RandomSource + ?Sized,
{
    BattleEngine::new(config.clone()).run(hero1, hero2, rng)
}
