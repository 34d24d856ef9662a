//! Unified error type surfaced by the runtime API.
//!
//! Wraps engine validation failures, repository failures and hero lookups so
//! clients can bubble them up with consistent context.

use arena_core::{BattleError, ErrorSeverity, GameError};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("no hero matches {query:?}")]
    UnknownHero { query: String },

    #[error("{query:?} is ambiguous, it matches {}", candidates.join(", "))]
    AmbiguousHero {
        query: String,
        candidates: Vec<String>,
    },

    #[error("player name must not be empty")]
    EmptyPlayerName,

    #[error("arena requires a {0} to be configured before building")]
    MissingComponent(&'static str),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Battle(err) => err.severity(),
            Self::Repository(_) | Self::MissingComponent(_) => ErrorSeverity::Internal,
            Self::UnknownHero { .. } | Self::AmbiguousHero { .. } | Self::EmptyPlayerName => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Battle(err) => err.error_code(),
            Self::Repository(_) => "RUNTIME_REPOSITORY",
            Self::UnknownHero { .. } => "RUNTIME_UNKNOWN_HERO",
            Self::AmbiguousHero { .. } => "RUNTIME_AMBIGUOUS_HERO",
            Self::EmptyPlayerName => "RUNTIME_EMPTY_PLAYER",
            Self::MissingComponent(_) => "RUNTIME_MISSING_COMPONENT",
        }
    }
}
