//! Text rendering for battles, records and rankings.
//!
//! Every function returns a finished line so callers decide where it goes.
//! Styling comes from `console` and is dropped automatically when the output
//! is not a terminal.
use arena_core::{
    Achievements, BattleSummary, Hero, Leaderboard, Outcome, PlayerRecord, RoundEvent, Winner,
};
use arena_runtime::BattleReport;
use console::style;

const BAR_WIDTH: usize = 20;

/// Display labels for each unlocked achievement.
pub fn achievement_labels(unlocked: Achievements) -> Vec<&'static str> {
    [
        (Achievements::FIRST_BATTLE, "First Battle"),
        (Achievements::VETERAN, "Veteran"),
        (Achievements::WINNER, "Winner"),
        (Achievements::ON_FIRE, "On Fire"),
        (Achievements::RATED, "Rated"),
        (Achievements::COLLECTOR, "Collector"),
    ]
    .into_iter()
    .filter(|(flag, _)| unlocked.contains(*flag))
    .map(|(_, label)| label)
    .collect()
}

/// Fixed-width health bar such as `[#####---------------]`.
pub fn health_bar(current: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        let ratio = current.min(max) as f64 / max as f64;
        // Any survivor keeps at least one mark.
        let marks = (ratio * width as f64).round() as usize;
        if current > 0 { marks.max(1).min(width) } else { 0 }
    };
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// First characters of a long on-chain id.
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(10) {
        Some((cut, _)) => &id[..cut],
        None => id,
    }
}

pub fn roster_line(hero: &Hero) -> String {
    format!(
        "{:<12} {:<18} {:<10} lv {:>2}  hp {:>4}  atk {:>3}  def {:>3}  dmg {:>3}  power {:>3}",
        style(short_id(&hero.id)).dim(),
        style(&hero.name).bold(),
        hero.class.to_string(),
        hero.level,
        hero.hp,
        hero.attack,
        hero.defense,
        hero.damage,
        hero.power(),
    )
}

/// Header printed before a battle is replayed.
pub fn matchup(report: &BattleReport) -> String {
    format!(
        "{} {} vs {} {}  (seed {})",
        style(&report.hero1.name).bold().cyan(),
        style(format!("[{}]", report.hero1.class)).dim(),
        style(&report.hero2.name).bold().magenta(),
        style(format!("[{}]", report.hero2.class)).dim(),
        report.seed,
    )
}

/// One replayed action.
pub fn round_line(report: &BattleReport, event: &RoundEvent) -> String {
    let (attacker, defender) = if event.actor_id == report.hero1.id {
        (&report.hero1, &report.hero2)
    } else {
        (&report.hero2, &report.hero1)
    };

    let crit = if event.is_critical {
        style(" CRIT!").red().bold().to_string()
    } else {
        String::new()
    };

    format!(
        "Round {:>2}  {} hits {} for {}{}  {} {}/{}",
        event.round,
        style(&attacker.name).bold(),
        defender.name,
        style(event.damage_dealt).yellow(),
        crit,
        health_bar(event.defender_health_after, defender.hp, BAR_WIDTH),
        event.defender_health_after,
        defender.hp,
    )
}

/// Final verdict of a battle from the player's side.
pub fn verdict(report: &BattleReport) -> String {
    let rounds = report.result.round_count;
    let headline = match &report.result.winner {
        Winner::Draw => format!("Draw after {rounds} rounds"),
        Winner::Combatant(id) => {
            let name = if *id == report.hero1.id {
                &report.hero1.name
            } else {
                &report.hero2.name
            };
            format!("{name} wins in {rounds} rounds")
        }
    };

    let tag = match report.outcome {
        Outcome::Win => style("VICTORY").green().bold(),
        Outcome::Loss => style("DEFEAT").red().bold(),
        Outcome::Draw => style("DRAW").yellow().bold(),
    };

    format!(
        "{tag}  {headline}  (rating {}, streak {})",
        report.record.rating, report.record.win_streak
    )
}

/// Damage and crit totals for both heroes.
pub fn damage_totals(report: &BattleReport) -> String {
    let side = |hero: &Hero| {
        format!(
            "{} dealt {} ({} crits)",
            hero.name,
            report.result.total_damage_by(&hero.id),
            report.result.crits_by(&hero.id)
        )
    };
    format!("{}  |  {}", side(&report.hero1), side(&report.hero2))
}

pub fn record_lines(player: &str, record: &PlayerRecord) -> Vec<String> {
    let achievements = achievement_labels(record.achievements());
    let achievements = if achievements.is_empty() {
        style("none yet").dim().to_string()
    } else {
        achievements.join(", ")
    };

    vec![
        format!("{}", style(format!("=== {player} ===")).bold().green()),
        format!("Rating:       {}", style(record.rating).bold()),
        format!(
            "Battles:      {} ({} won, {} lost, {} drawn)",
            record.total_battles, record.wins, record.losses, record.draws
        ),
        format!("Win rate:     {}%", record.win_rate()),
        format!("Win streak:   {}", record.win_streak),
        format!("Heroes:       {}", record.total_heroes),
        format!("Achievements: {achievements}"),
    ]
}

pub fn history_line(summary: &BattleSummary) -> String {
    let when = chrono::DateTime::from_timestamp_millis(summary.timestamp_ms)
        .map(|time| time.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "????-??-?? ??:??".to_string());

    let result = match summary.winner_name() {
        Some(name) => format!("{name} won"),
        None => "draw".to_string(),
    };

    format!(
        "{}  {} vs {}  {} in {} rounds",
        style(when).dim(),
        summary.hero1_name,
        summary.hero2_name,
        style(result).bold(),
        summary.battle_rounds,
    )
}

/// Ranking table; `player` is highlighted when present.
pub fn leaderboard_lines(board: &Leaderboard, player: &str) -> Vec<String> {
    board
        .entries()
        .iter()
        .map(|entry| {
            let line = format!(
                "#{:<3} {:<20} {:>5}  {:>3}W {:>3}L {:>3}D  {:>3}%",
                entry.rank,
                entry.player,
                entry.record.rating,
                entry.record.wins,
                entry.record.losses,
                entry.record.draws,
                entry.record.win_rate(),
            );
            if entry.player == player {
                style(line).cyan().bold().to_string()
            } else {
                line
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_bar_scales_and_keeps_survivors_visible() {
        assert_eq!(health_bar(100, 100, 10), "[##########]");
        assert_eq!(health_bar(50, 100, 10), "[#####-----]");
        assert_eq!(health_bar(1, 1000, 10), "[#---------]");
        assert_eq!(health_bar(0, 100, 10), "[----------]");
        assert_eq!(health_bar(5, 0, 4), "[----]");
    }

    #[test]
    fn short_id_truncates_long_ids_only() {
        assert_eq!(short_id("0x7a1c9e44d2b0f3a1"), "0x7a1c9e44");
        assert_eq!(short_id("0xab"), "0xab");
    }

    #[test]
    fn labels_follow_flag_order() {
        let unlocked = Achievements::ON_FIRE | Achievements::FIRST_BATTLE;
        assert_eq!(achievement_labels(unlocked), ["First Battle", "On Fire"]);
        assert!(achievement_labels(Achievements::empty()).is_empty());
    }

    #[test]
    fn record_lines_show_rate_and_badges() {
        let mut record = PlayerRecord::new();
        record.apply(Outcome::Win);
        record.apply(Outcome::Loss);
        record.apply(Outcome::Win);

        let text = record_lines("ana", &record).join("\n");
        assert!(text.contains("67%"), "{text}");
        assert!(text.contains("Winner"), "{text}");
        assert!(text.contains("ana"), "{text}");
    }

    #[test]
    fn history_line_names_the_winner() {
        let summary = BattleSummary {
            id: "b-1".into(),
            hero1_id: "0x1".into(),
            hero2_id: "0x2".into(),
            hero1_name: "Naruto".into(),
            hero2_name: "Sasuke".into(),
            winner: Winner::Combatant("0x2".into()),
            timestamp_ms: 0,
            battle_rounds: 7,
        };

        let line = history_line(&summary);
        assert!(line.contains("1970-01-01 00:00"), "{line}");
        assert!(line.contains("Sasuke won"), "{line}");
        assert!(line.contains("in 7 rounds"), "{line}");
    }
}
