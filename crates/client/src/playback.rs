//! Paced replay of a finished battle.
use std::io::{self, Write};
use std::time::Duration;

use arena_runtime::BattleReport;
use console::style;

use crate::presentation;

/// Writes the matchup, every action and the verdict to `out`.
///
/// The battle is already resolved; pacing only spaces out the lines. A zero
/// `pace` prints everything at once.
pub async fn replay<W: Write>(report: &BattleReport, pace: Duration, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", presentation::matchup(report))?;
    out.flush()?;

    for event in &report.result.rounds {
        if !pace.is_zero() {
            tokio::time::sleep(pace).await;
        }
        writeln!(out, "{}", presentation::round_line(report, event))?;
        out.flush()?;
    }

    if !pace.is_zero() {
        tokio::time::sleep(pace).await;
    }
    writeln!(out, "{}", presentation::verdict(report))?;
    writeln!(out, "{}", style(presentation::damage_totals(report)).dim())?;
    out.flush()
}
