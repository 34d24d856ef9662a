//! Hero arena client binary.
//!
//! # Examples
//!
//! ```bash
//! # List heroes, then fight two of them by id prefix
//! cargo run -p arena-client -- roster
//! cargo run -p arena-client -- battle 0x7a1c 0x3f09
//!
//! # Replay a battle instantly from its seed
//! cargo run -p arena-client -- battle 0x7a1c 0x3f09 --seed 42 --pace-ms 0
//! ```

use std::io;

use anyhow::{Context, Result};
use arena_client::{Cli, CliConfig, app, logging};
use arena_content::ContentFactory;
use arena_runtime::{Arena, RuntimeConfig, StaticRoster};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // 1. Load configuration: CLI flags win over the environment
    let mut cli_config = CliConfig::from_env();
    if let Some(dir) = cli.data_dir.clone() {
        cli_config.data_dir = dir;
    }
    let mut runtime_config = RuntimeConfig::from_env();
    if let Some(player) = cli.player.clone() {
        runtime_config.player = player;
    }

    // 2. Setup logging
    let _guard = logging::setup_logging(&cli_config.log_dir)?;

    tracing::info!("Starting arena client");
    tracing::info!("Player: {}", runtime_config.player);
    tracing::info!("Data dir: {}", cli_config.data_dir.display());
    tracing::info!("Persistence: {}", runtime_config.persistence);

    // 3. Load content
    let factory = ContentFactory::new(&cli_config.data_dir);
    let battle_config = runtime_config.battle_config(
        factory
            .load_config()
            .context("Failed to load battle config")?,
    );
    let roster = StaticRoster::new(factory.load_roster().context("Failed to load hero roster")?);

    // 4. Build arena
    let mut arena = Arena::builder()
        .config(battle_config)
        .roster(roster)
        .storage(&runtime_config)?
        .build()?;

    tracing::debug!("Arena ready: {:?}", arena);

    // 5. Run the command
    let mut stdout = io::stdout();
    let result = app::run(
        cli.command,
        &mut arena,
        &runtime_config.player,
        &cli_config,
        &mut stdout,
    )
    .await;

    if let Err(e) = &result {
        tracing::error!("Command failed: {:#}", e);
    }
    result
}
