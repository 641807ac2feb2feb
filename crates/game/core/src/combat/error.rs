//! Combat derivation errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors raised by beast and combat derivations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatError {
    /// Beast id outside the catalog (`1..=75`).
    #[error("beast id {0} is not in the catalog")]
    UnknownBeast(u8),

    /// Relative bars need a positive adventurer level.
    #[error("adventurer level must be at least 1")]
    ZeroAdventurerLevel,
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownBeast(_) => "COMBAT_UNKNOWN_BEAST",
            Self::ZeroAdventurerLevel => "COMBAT_ZERO_ADVENTURER_LEVEL",
        }
    }
}
