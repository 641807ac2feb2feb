//! Experience and leveling.
//!
//! The adventurer level curve is `level = floor(sqrt(xp)) + 1`, the same curve
//! the contract enforces. A divergence here shows wrong affordances in the UI
//! (for example "stat upgrades available"), so every helper is integer-exact.
//!
//! ```text
//! level:  1   2   3   4   5 ...
//! xp:     0   1   4   9  16 ...   (floor of level L is (L-1)^2)
//! ```

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};

/// Errors raised for levels outside the curve's domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProgressionError {
    /// Levels start at 1.
    #[error("level must be at least 1")]
    ZeroLevel,
}

impl GameError for ProgressionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ZeroLevel => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroLevel => "PROGRESSION_ZERO_LEVEL",
        }
    }
}

/// Calculate the adventurer level for an XP total.
///
/// Returns 1 at zero XP and is non-decreasing in `xp`.
pub fn calculate_level(xp: u64) -> u64 {
    xp.isqrt() + 1
}

/// Minimum XP required to reach `level + 1`.
///
/// Thresholds are `u128` so every level reachable from `u64` XP has one: the
/// top level, `2^32`, needs `2^64` XP.
///
/// # Errors
///
/// [`ProgressionError::ZeroLevel`] if `level` is 0.
pub fn calculate_next_level_xp(level: u64) -> Result<u128, ProgressionError> {
    if level == 0 {
        return Err(ProgressionError::ZeroLevel);
    }
    let level = u128::from(level);
    Ok(level * level)
}

/// XP at which `level` begins.
pub fn level_floor_xp(level: u64) -> Result<u128, ProgressionError> {
    match level {
        0 => Err(ProgressionError::ZeroLevel),
        1 => Ok(0),
        _ => calculate_next_level_xp(level - 1),
    }
}

/// Percentage of the way from the current level's floor to the next level's floor.
///
/// Always within `[0, 100)`, and exactly 0 at every level boundary.
pub fn calculate_progress(xp: u64) -> f64 {
    let level = u128::from(calculate_level(xp));
    let floor = (level - 1) * (level - 1);
    let next = level * level;

    // u128 keeps next - floor exact even at the top of the u64 range
    let gained = u128::from(xp) - floor;
    let span = next - floor;

    (gained as f64 / span as f64) * 100.0
}

/// Number of levels crossed between two XP readings.
///
/// Each level gained grants one stat upgrade on-chain. XP never decreases in a
/// session, so a lower `current_xp` yields 0.
pub fn levels_gained(previous_xp: u64, current_xp: u64) -> u64 {
    calculate_level(current_xp).saturating_sub(calculate_level(previous_xp))
}

/// Greatness (level) of an equipped item, derived from the item's own XP.
///
/// Items follow `floor(sqrt(xp))` clamped to `1..=MAX_ITEM_GREATNESS`.
pub fn item_greatness(xp: u16) -> u8 {
    let greatness = xp.isqrt() as u8;
    greatness.clamp(1, GameConfig::MAX_ITEM_GREATNESS)
}
