use std::path::PathBuf;
use std::time::Duration;

use arena_client::{CliConfig, Command, app};
use arena_content::ContentFactory;
use arena_runtime::{Arena, StaticRoster};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

fn arena() -> Arena {
    let factory = ContentFactory::new(data_dir());
    Arena::builder()
        .config(factory.load_config().unwrap())
        .roster(StaticRoster::new(factory.load_roster().unwrap()))
        .build()
        .unwrap()
}

fn config() -> CliConfig {
    CliConfig {
        data_dir: data_dir(),
        pace: Duration::ZERO,
        log_dir: std::env::temp_dir(),
    }
}

async fn run(arena: &mut Arena, command: Command) -> String {
    let mut out = Vec::new();
    app::run(command, arena, "ana", &config(), &mut out)
        .await
        .unwrap();
    String::from_utf8(out).unwrap()
}

fn battle(seed: u64) -> Command {
    Command::Battle {
        hero1: "0x7a1c".into(),
        hero2: "0x3f09".into(),
        seed: Some(seed),
        pace_ms: Some(0),
    }
}

#[tokio::test]
async fn battle_prints_every_action_and_a_verdict() {
    let mut arena = arena();
    let text = run(&mut arena, battle(5)).await;

    let report = arena.fight("other", "0x7a1c", "0x3f09", Some(5)).unwrap();
    let round_lines = text.lines().filter(|l| l.starts_with("Round")).count();
    assert_eq!(round_lines, report.result.rounds.len());

    assert!(text.contains("seed 5"), "{text}");
    let naruto_total = report.result.total_damage_by(&report.hero1.id);
    assert!(text.contains(&format!("Naruto dealt {naruto_total}")), "{text}");
    assert!(text.contains("Naruto"), "{text}");
    assert!(
        ["VICTORY", "DEFEAT", "DRAW"]
            .iter()
            .any(|tag| text.contains(tag)),
        "{text}"
    );
}

#[tokio::test]
async fn stats_and_history_reflect_battles() {
    let mut arena = arena();

    let empty = run(&mut arena, Command::History { limit: 10 }).await;
    assert!(empty.contains("No battles yet"));

    for seed in 0..3 {
        run(&mut arena, battle(seed)).await;
    }

    let stats = run(&mut arena, Command::Stats).await;
    assert!(stats.contains("ana"), "{stats}");
    assert!(stats.contains("Battles:      3"), "{stats}");
    assert!(stats.contains("First Battle"), "{stats}");

    let history = run(&mut arena, Command::History { limit: 2 }).await;
    assert_eq!(history.lines().count(), 2, "{history}");
    assert!(history.contains("Naruto vs Sasuke"), "{history}");
}

#[tokio::test]
async fn roster_and_leaderboard_render() {
    let mut arena = arena();

    let roster = run(&mut arena, Command::Roster).await;
    let heroes = arena.roster().heroes().len();
    assert!(roster.contains(&format!("{heroes} heroes")), "{roster}");
    assert!(roster.contains("Shikamaru"), "{roster}");

    let board = run(&mut arena, Command::Leaderboard).await;
    assert!(board.contains("No ranked players yet"));

    run(&mut arena, battle(11)).await;
    let board = run(&mut arena, Command::Leaderboard).await;
    assert!(board.contains("#1"), "{board}");
    assert!(board.contains("ana"), "{board}");
}

#[tokio::test]
async fn unknown_hero_is_an_error() {
    let mut arena = arena();
    let mut out = Vec::new();
    let err = app::run(
        Command::Battle {
            hero1: "0xnothing".into(),
            hero2: "0x3f09".into(),
            seed: None,
            pace_ms: Some(0),
        },
        &mut arena,
        "ana",
        &config(),
        &mut out,
    )
    .await
    .unwrap_err();

    assert!(err.to_string().contains("no hero matches"), "{err}");
    assert!(out.is_empty());
}
