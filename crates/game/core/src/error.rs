//! Common error infrastructure for arena-core.
//!
//! This module provides the shared severity classification and the
//! [`BattleError`] raised by the battle engine. Every error is produced
//! synchronously before a battle starts; nothing fails mid-simulation.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each failure names the offending combatant slot and fault
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **No Partial Output**: A rejected battle never yields round events

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: combatant with zero health, crit chance above 1
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all arena-core errors.
///
/// Provides a uniform interface for error classification across the crate.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for error categorization, metrics, and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Position of a combatant in a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatantSlot {
    /// Acts first in every round.
    First,
    /// Acts second in every round.
    Second,
}

impl CombatantSlot {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::First => "hero1",
            Self::Second => "hero2",
        }
    }
}

impl core::fmt::Display for CombatantSlot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reason a combatant was refused entry into a battle.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatantFault {
    #[error("missing id")]
    MissingId,

    #[error("missing name")]
    MissingName,

    #[error("starting health must be positive")]
    NonPositiveHealth,

    #[error("id collides with the draw sentinel `draw`")]
    ReservedId,

    #[error("both combatants share the same id")]
    DuplicateId,
}

/// Reason a battle configuration was rejected.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigFault {
    #[error("round cap must be at least 1")]
    ZeroRoundCap,

    #[error("crit chance {0} is outside [0, 1]")]
    CritChance(f64),

    #[error("crit multiplier {0} is below 1")]
    CritMultiplier(f64),

    #[error("variance band [{min}, {max}] is invalid")]
    VarianceBand { min: f64, max: f64 },

    #[error("mitigation floor {0} is outside [0, 1]")]
    MitigationFloor(f64),
}

/// Errors surfaced by [`crate::BattleEngine::run`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleError {
    #[error("invalid combatant {slot} ({id:?}): {fault}")]
    InvalidCombatant {
        slot: CombatantSlot,
        id: String,
        fault: CombatantFault,
    },

    #[error("invalid battle config: {0}")]
    InvalidConfig(#[from] ConfigFault),
}

impl BattleError {
    pub(crate) fn combatant(slot: CombatantSlot, id: &str, fault: CombatantFault) -> Self {
        Self::InvalidCombatant {
            slot,
            id: id.to_owned(),
            fault,
        }
    }
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCombatant { .. } => "BATTLE_INVALID_COMBATANT",
            Self::InvalidConfig(_) => "BATTLE_INVALID_CONFIG",
        }
    }
}
