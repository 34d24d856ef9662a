//! Command dispatch.
use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use arena_runtime::Arena;
use console::style;

use crate::cli::Command;
use crate::config::CliConfig;
use crate::{playback, presentation};

/// Runs one command against `arena`, writing everything to `out`.
pub async fn run<W: Write>(
    command: Command,
    arena: &mut Arena,
    player: &str,
    config: &CliConfig,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::Battle {
            hero1,
            hero2,
            seed,
            pace_ms,
        } => {
            let pace = pace_ms.map(Duration::from_millis).unwrap_or(config.pace);
            let report = arena.fight(player, &hero1, &hero2, seed)?;
            playback::replay(&report, pace, out).await?;
        }
        Command::Roster => {
            let heroes = arena.roster().heroes();
            writeln!(out, "{}", style(format!("{} heroes", heroes.len())).bold())?;
            for hero in heroes {
                writeln!(out, "{}", presentation::roster_line(hero))?;
            }
        }
        Command::Stats => {
            let record = arena.record(player)?;
            for line in presentation::record_lines(player, &record) {
                writeln!(out, "{line}")?;
            }
        }
        Command::History { limit } => {
            let history = arena.history()?;
            if history.is_empty() {
                writeln!(out, "{}", style("No battles yet").dim())?;
            }
            for summary in history.iter().rev().take(limit) {
                writeln!(out, "{}", presentation::history_line(summary))?;
            }
        }
        Command::Leaderboard => {
            let board = arena.leaderboard()?;
            if board.is_empty() {
                writeln!(out, "{}", style("No ranked players yet").dim())?;
            }
            for line in presentation::leaderboard_lines(&board, player) {
                writeln!(out, "{line}")?;
            }
        }
    }

    Ok(())
}
