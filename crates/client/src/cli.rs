//! Command-line arguments.
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Turn-based hero battles in the terminal
#[derive(Debug, Parser)]
#[command(name = "arena")]
#[command(about = "Turn-based hero battles", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Player credited with battle results (overrides ARENA_PLAYER)
    #[arg(short, long, global = true, value_name = "NAME")]
    pub player: Option<String>,

    /// Content directory with arena.toml and heroes.ron (overrides ARENA_DATA_DIR)
    #[arg(short, long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fight two heroes; the player fields the first one
    Battle {
        /// Id or unique id prefix of the first hero
        hero1: String,

        /// Id or unique id prefix of the second hero
        hero2: String,

        /// Replay a battle from its seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// Milliseconds between replayed actions (overrides ARENA_PACE_MS)
        #[arg(long, value_name = "MS")]
        pace_ms: Option<u64>,
    },

    /// List the heroes available for battle
    Roster,

    /// Show the player's record and achievements
    Stats,

    /// Show recent battles, newest first
    History {
        /// Number of battles to show
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },

    /// Rank every player by rating
    Leaderboard,
}
