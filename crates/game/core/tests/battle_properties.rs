use arena_core::{
    BattleConfig, BattleEngine, BattleError, BattleResult, CombatantFault, CombatantStats,
    PcgRng, Winner, run_battle,
};
use proptest::prelude::*;

fn combatant(id: &str, health: u32, attack: u32, defense: u32, damage: u32) -> CombatantStats {
    CombatantStats::new(id, id.to_uppercase(), health, attack, defense, damage)
}

fn arb_combatant(id: &'static str) -> impl Strategy<Value = CombatantStats> {
    (1u32..=500, 0u32..=100, 0u32..=150, 0u32..=100).prop_map(
        move |(health, attack, defense, damage)| combatant(id, health, attack, defense, damage),
    )
}

fn arb_config() -> impl Strategy<Value = BattleConfig> {
    (1u32..=60, 0.0f64..=1.0).prop_map(|(cap, crit)| {
        BattleConfig::default()
            .with_round_cap(cap)
            .with_crit_chance(crit)
    })
}

/// Health of `id` after each action that targeted it, starting from `initial`.
fn health_track(result: &BattleResult, id: &str, initial: u32) -> Vec<u32> {
    let mut track = vec![initial];
    track.extend(
        result
            .rounds
            .iter()
            .filter(|event| event.actor_id != id)
            .map(|event| event.defender_health_after),
    );
    track
}

proptest! {
    #[test]
    fn prop_terminates_within_cap(
        hero1 in arb_combatant("h1"),
        hero2 in arb_combatant("h2"),
        config in arb_config(),
        seed in any::<u64>(),
    ) {
        let result = run_battle(&hero1, &hero2, &config, &mut PcgRng::seeded(seed)).unwrap();

        prop_assert!(result.round_count >= 1);
        prop_assert!(result.round_count <= config.round_cap);
        prop_assert!(result.rounds.len() <= 2 * result.round_count as usize);
        prop_assert!(result.rounds.windows(2).all(|w| w[0].round <= w[1].round));
        prop_assert!(result.rounds.iter().all(|e| (1..=result.round_count).contains(&e.round)));
    }

    #[test]
    fn prop_actors_alternate_hero1_first(
        hero1 in arb_combatant("h1"),
        hero2 in arb_combatant("h2"),
        config in arb_config(),
        seed in any::<u64>(),
    ) {
        let result = run_battle(&hero1, &hero2, &config, &mut PcgRng::seeded(seed)).unwrap();

        for (index, event) in result.rounds.iter().enumerate() {
            let expected = if index % 2 == 0 { "h1" } else { "h2" };
            prop_assert_eq!(event.actor_id.as_str(), expected);
            prop_assert_eq!(event.round as usize, index / 2 + 1);
        }
    }

    #[test]
    fn prop_health_is_monotone_and_consistent(
        hero1 in arb_combatant("h1"),
        hero2 in arb_combatant("h2"),
        config in arb_config(),
        seed in any::<u64>(),
    ) {
        let result = run_battle(&hero1, &hero2, &config, &mut PcgRng::seeded(seed)).unwrap();

        for (hero, slot) in [(&hero1, 0usize), (&hero2, 1usize)] {
            let track = health_track(&result, &hero.id, hero.health);
            prop_assert!(track.windows(2).all(|w| w[1] <= w[0]), "{:?}", track);
            prop_assert_eq!(*track.last().unwrap(), result.final_health[slot]);
        }

        let mut health = [hero1.health, hero2.health];
        for event in &result.rounds {
            let defender = if event.actor_id == "h1" { 1 } else { 0 };
            health[defender] = health[defender].saturating_sub(event.damage_dealt);
            prop_assert_eq!(event.defender_health_after, health[defender]);
        }
    }

    #[test]
    fn prop_winner_and_draw_consistency(
        hero1 in arb_combatant("h1"),
        hero2 in arb_combatant("h2"),
        config in arb_config(),
        seed in any::<u64>(),
    ) {
        let result = run_battle(&hero1, &hero2, &config, &mut PcgRng::seeded(seed)).unwrap();
        let zeroing = result
            .rounds
            .iter()
            .filter(|event| event.defender_health_after == 0)
            .count();

        match &result.winner {
            Winner::Combatant(id) => {
                let winner_slot = result.slot_of(id).unwrap();
                prop_assert!(result.final_health[winner_slot] > 0);
                prop_assert_eq!(result.final_health[1 - winner_slot], 0);

                let last = result.rounds.last().unwrap();
                prop_assert_eq!(&last.actor_id, id);
                prop_assert_eq!(last.defender_health_after, 0);
                // Only the final blow zeroes anyone.
                prop_assert_eq!(zeroing, 1);
            }
            Winner::Draw => {
                prop_assert!(result.final_health.iter().all(|&hp| hp > 0));
                prop_assert_eq!(result.round_count, config.round_cap);
                prop_assert_eq!(result.rounds.len(), 2 * config.round_cap as usize);
                prop_assert_eq!(zeroing, 0);
            }
        }
    }

    #[test]
    fn prop_damage_within_bounds(
        hero1 in arb_combatant("h1"),
        hero2 in arb_combatant("h2"),
        config in arb_config(),
        seed in any::<u64>(),
    ) {
        let result = run_battle(&hero1, &hero2, &config, &mut PcgRng::seeded(seed)).unwrap();

        for event in &result.rounds {
            let attacker = if event.actor_id == "h1" { &hero1 } else { &hero2 };
            let base = attacker.base_damage() as f64;
            let bound = (base * config.variance.max * config.crit_multiplier).floor();
            prop_assert!(event.damage_dealt as f64 <= bound,
                "{} > {} for {:?}", event.damage_dealt, bound, event);
            if !event.is_critical {
                let plain = (base * config.variance.max).floor();
                prop_assert!(event.damage_dealt as f64 <= plain);
            }
        }
    }

    #[test]
    fn prop_same_seed_same_battle(
        hero1 in arb_combatant("h1"),
        hero2 in arb_combatant("h2"),
        config in arb_config(),
        seed in any::<u64>(),
    ) {
        let engine = BattleEngine::new(config);
        let first = engine.run(&hero1, &hero2, &mut PcgRng::seeded(seed)).unwrap();
        let second = engine.run(&hero1, &hero2, &mut PcgRng::seeded(seed)).unwrap();
        prop_assert_eq!(first, second);
    }
}

#[test]
fn glass_cannon_vs_fortress_is_decided_quickly() {
    let hero1 = combatant("h1", 100, 50, 0, 30);
    let hero2 = combatant("h2", 100, 10, 90, 0);
    let config = BattleConfig::default();

    for seed in 0..200 {
        let result = run_battle(&hero1, &hero2, &config, &mut PcgRng::seeded(seed)).unwrap();

        // Both sides lose at least 6 HP per hit, so nobody survives 13 rounds.
        assert!(!result.is_draw(), "seed {seed} drew");
        assert!(result.round_count <= 13, "seed {seed}: {}", result.round_count);

        // The mitigation floor keeps 10% of hero1's 80 base damage: 6..=13 per hit.
        for event in result.actions_by("h1") {
            assert!(
                (6..=13).contains(&event.damage_dealt),
                "seed {seed}: {event:?}"
            );
        }
        // hero2 hits an undefended target: 8..=17 per hit.
        for event in result.actions_by("h2") {
            assert!(
                (8..=17).contains(&event.damage_dealt),
                "seed {seed}: {event:?}"
            );
        }
    }
}

#[test]
fn equal_stats_split_wins_roughly_evenly() {
    // Large health pools make the first-mover edge small relative to variance.
    let hero1 = combatant("h1", 5000, 20, 20, 10);
    let hero2 = combatant("h2", 5000, 20, 20, 10);
    let config = BattleConfig::default().with_round_cap(400);

    let runs = 1000;
    let mut hero1_wins = 0;
    for seed in 0..runs {
        let result = run_battle(&hero1, &hero2, &config, &mut PcgRng::seeded(seed)).unwrap();
        assert!(!result.is_draw(), "seed {seed} hit the cap");
        if result.winner_id() == "h1" {
            hero1_wins += 1;
        }
    }

    let share = hero1_wins as f64 / runs as f64;
    assert!((0.45..=0.65).contains(&share), "hero1 won {share:.3} of battles");
}

#[test]
fn zero_health_is_rejected_without_events() {
    let dead = combatant("h1", 0, 50, 10, 10);
    let alive = combatant("h2", 100, 50, 10, 10);

    let err = run_battle(&dead, &alive, &BattleConfig::default(), &mut PcgRng::seeded(1))
        .unwrap_err();
    assert!(matches!(
        err,
        BattleError::InvalidCombatant {
            fault: CombatantFault::NonPositiveHealth,
            ..
        }
    ));

    let err = run_battle(&alive, &dead, &BattleConfig::default(), &mut PcgRng::seeded(1))
        .unwrap_err();
    assert!(matches!(err, BattleError::InvalidCombatant { .. }));
}

#[test]
fn tanks_draw_at_exactly_the_cap() {
    let hero1 = combatant("h1", 1_000_000, 1, 0, 0);
    let hero2 = combatant("h2", 1_000_000, 1, 0, 0);
    let config = BattleConfig::default();

    let result = run_battle(&hero1, &hero2, &config, &mut PcgRng::seeded(77)).unwrap();

    assert_eq!(result.winner, Winner::Draw);
    assert_eq!(result.winner_id(), "draw");
    assert_eq!(result.round_count, 20);
    assert_eq!(result.rounds.len(), 40);
    assert!(result.final_health.iter().all(|&hp| hp >= 1_000_000 - 20));
}
