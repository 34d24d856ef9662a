//! Arena orchestrator and builder.

use arena_core::{
    BattleConfig, BattleEngine, BattleResult, BattleSummary, Hero, Leaderboard, Outcome, PcgRng,
    PlayerRecord, Winner,
};

use crate::config::{Persistence, RuntimeConfig};
use crate::error::{Result, RuntimeError};
use crate::repository::{
    FileHistoryLog, FileRecordRepository, HistoryRepository, InMemoryHistory, InMemoryRecordRepo,
    RecordRepository,
};
use crate::roster::RosterProvider;

/// Everything one call to [`Arena::fight`] produced.
#[derive(Clone, Debug)]
pub struct BattleReport {
    /// Seed the battle RNG was built from; replaying it reproduces the battle.
    pub seed: u64,
    pub hero1: Hero,
    pub hero2: Hero,
    pub result: BattleResult,
    pub summary: BattleSummary,
    /// Outcome for the player, who always fields hero1.
    pub outcome: Outcome,
    /// Player record after this battle.
    pub record: PlayerRecord,
}

/// Runs battles between roster heroes and keeps score.
///
/// The engine stays pure; the arena owns lookups, seeding,
/// timestamps and persistence around it.
pub struct Arena {
    engine: BattleEngine,
    roster: Box<dyn RosterProvider>,
    records: Box<dyn RecordRepository>,
    history: Box<dyn HistoryRepository>,
}

impl std::fmt::Debug for Arena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arena")
            .field("engine", &self.engine)
            .field("heroes", &self.roster.heroes().len())
            .finish_non_exhaustive()
    }
}

impl Arena {
    /// Create a builder for configuring the arena
    pub fn builder() -> ArenaBuilder {
        ArenaBuilder::new()
    }

    pub fn config(&self) -> &BattleConfig {
        self.engine.config()
    }

    pub fn roster(&self) -> &dyn RosterProvider {
        self.roster.as_ref()
    }

    /// Fights `hero1_query` against `hero2_query` on behalf of `player`.
    ///
    /// Heroes are looked up by id or unique id prefix. Without a `seed` one is
    /// drawn from OS entropy. The summary is appended to the history and the
    /// player's record is updated with hero1's outcome before this returns.
    pub fn fight(
        &mut self,
        player: &str,
        hero1_query: &str,
        hero2_query: &str,
        seed: Option<u64>,
    ) -> Result<BattleReport> {
        let player = validate_player(player)?;
        let hero1 = self.roster.find(hero1_query)?.clone();
        let hero2 = self.roster.find(hero2_query)?.clone();
        let (fighter1, fighter2) = (hero1.to_combatant(), hero2.to_combatant());

        let seed = seed.unwrap_or_else(rand::random::<u64>);
        let mut rng = PcgRng::seeded(seed);
        let result = self.engine.run(&fighter1, &fighter2, &mut rng)?;

        let timestamp_ms = chrono::Utc::now().timestamp_millis();
        let summary = BattleSummary::new(
            format!("battle-{timestamp_ms}-{seed:016x}"),
            &fighter1,
            &fighter2,
            &result,
            timestamp_ms,
        );

        let outcome = match &result.winner {
            Winner::Draw => Outcome::Draw,
            Winner::Combatant(id) if *id == fighter1.id => Outcome::Win,
            Winner::Combatant(_) => Outcome::Loss,
        };

        let mut record = self.load_record(player)?;
        record.apply(outcome);

        self.history.append(&summary)?;
        self.records.save(player, &record)?;

        tracing::info!(
            player,
            battle = %summary.id,
            seed,
            hero1 = %hero1.name,
            hero2 = %hero2.name,
            winner = result.winner_id(),
            rounds = result.round_count,
            %outcome,
            rating = record.rating,
            "battle finished"
        );

        Ok(BattleReport {
            seed,
            hero1,
            hero2,
            result,
            summary,
            outcome,
            record,
        })
    }

    /// Current record of `player`; a fresh record if they never fought.
    pub fn record(&self, player: &str) -> Result<PlayerRecord> {
        let player = validate_player(player)?;
        self.load_record(player)
    }

    /// Every battle summary, oldest first.
    pub fn history(&self) -> Result<Vec<BattleSummary>> {
        Ok(self.history.read_all()?)
    }

    /// All stored players ranked by rating.
    pub fn leaderboard(&self) -> Result<Leaderboard> {
        Ok(Leaderboard::rank(self.records.list()?))
    }

    fn load_record(&self, player: &str) -> Result<PlayerRecord> {
        let mut record = self.records.load(player)?.unwrap_or_default();
        record.total_heroes = u32::try_from(self.roster.heroes().len()).unwrap_or(u32::MAX);
        Ok(record)
    }
}

fn validate_player(player: &str) -> Result<&str> {
    let player = player.trim();
    if player.is_empty() {
        return Err(RuntimeError::EmptyPlayerName);
    }
    Ok(player)
}

/// Builder for [`Arena`].
///
/// The roster is required. Repositories default to in-memory storage.
pub struct ArenaBuilder {
    config: BattleConfig,
    roster: Option<Box<dyn RosterProvider>>,
    records: Option<Box<dyn RecordRepository>>,
    history: Option<Box<dyn HistoryRepository>>,
}

impl ArenaBuilder {
    fn new() -> Self {
        Self {
            config: BattleConfig::default(),
            roster: None,
            records: None,
            history: None,
        }
    }

    /// Override battle tuning
    pub fn config(mut self, config: BattleConfig) -> Self {
        self.config = config;
        self
    }

    /// Set required roster provider
    pub fn roster(mut self, roster: impl RosterProvider + 'static) -> Self {
        self.roster = Some(Box::new(roster));
        self
    }

    /// Set record repository (optional)
    pub fn records(mut self, records: impl RecordRepository + 'static) -> Self {
        self.records = Some(Box::new(records));
        self
    }

    /// Set history repository (optional)
    pub fn history(mut self, history: impl HistoryRepository + 'static) -> Self {
        self.history = Some(Box::new(history));
        self
    }

    /// Install the repositories `runtime` asks for.
    ///
    /// File persistence creates `save_dir` if needed.
    pub fn storage(self, runtime: &RuntimeConfig) -> Result<Self> {
        match runtime.persistence {
            Persistence::File => {
                let records = FileRecordRepository::new(runtime.save_dir.join("records"))?;
                let history =
                    FileHistoryLog::open_or_create(&runtime.save_dir, FileHistoryLog::DEFAULT_FILE)?;
                tracing::info!(dir = %runtime.save_dir.display(), "using file persistence");
                Ok(self.records(records).history(history))
            }
            Persistence::Memory => {
                tracing::info!("using in-memory persistence");
                Ok(self
                    .records(InMemoryRecordRepo::new())
                    .history(InMemoryHistory::new()))
            }
        }
    }

    /// Validates the tuning and assembles the arena.
    pub fn build(self) -> Result<Arena> {
        self.config.validate().map_err(arena_core::BattleError::from)?;

        let roster = self.roster.ok_or(RuntimeError::MissingComponent("roster"))?;
        let records = self
            .records
            .unwrap_or_else(|| Box::new(InMemoryRecordRepo::new()));
        let history = self
            .history
            .unwrap_or_else(|| Box::new(InMemoryHistory::new()));

        Ok(Arena {
            engine: BattleEngine::new(self.config),
            roster,
            records,
            history,
        })
    }
}
