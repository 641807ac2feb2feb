//! Beast power and relative-strength bars.

use crate::items::Tier;

use super::beast::{beast, beast_tier};
use super::error::CombatError;

/// Power ceiling per adventurer level for [`beast_power_percent`].
///
/// A tier-1 beast at the adventurer's own level has power `5 * level`, which
/// fills the bar. Anything stronger is clamped to 100%.
pub const POWER_CEILING_PER_LEVEL: u64 = 5;

/// Beast power: `level * (6 - tier)`.
pub fn beast_power(level: u32, tier: Tier) -> u64 {
    u64::from(level) * u64::from(tier.weight())
}

/// Beast power relative to the adventurer, as a percentage in `[0, 100]`.
///
/// # Formula
///
/// ```text
/// ceiling = POWER_CEILING_PER_LEVEL * adventurer_level
/// percent = min(100, beast_power * 100 / ceiling)
/// ```
///
/// # Errors
///
/// [`CombatError::ZeroAdventurerLevel`] if `adventurer_level` is 0.
pub fn beast_power_percent(adventurer_level: u64, beast_power: u64) -> Result<f64, CombatError> {
    if adventurer_level == 0 {
        return Err(CombatError::ZeroAdventurerLevel);
    }

    let ceiling = u128::from(adventurer_level) * u128::from(POWER_CEILING_PER_LEVEL);
    let percent = (beast_power as f64 * 100.0) / ceiling as f64;

    Ok(percent.min(100.0))
}

/// Current health as a percentage of maximum, in `[0, 100]`.
///
/// A zero maximum (not yet known) reads as an empty bar.
pub fn health_percent(current: u32, max: u32) -> f64 {
    if max == 0 {
        return 0.0;
    }
    (f64::from(current.min(max)) / f64::from(max)) * 100.0
}

/// Snapshot of a beast taken from the battle event stream.
///
/// Events carry only integers; the display name is resolved from the catalog
/// through [`Beast::name`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Beast {
    pub id: u8,
    pub level: u32,
    pub tier: Tier,
    pub health: u32,
}

impl Beast {
    pub fn new(id: u8, level: u32, tier: Tier, health: u32) -> Self {
        Self {
            id,
            level,
            tier,
            health,
        }
    }

    /// Build a snapshot taking the tier from the beast catalog.
    pub fn from_catalog(id: u8, level: u32, health: u32) -> Result<Self, CombatError> {
        Ok(Self::new(id, level, beast_tier(id)?, health))
    }

    /// Catalog name for this beast's id, `None` for ids outside `1..=75`.
    pub fn name(&self) -> Option<&'static str> {
        beast(self.id).map(|definition| definition.name)
    }

    pub fn power(&self) -> u64 {
        beast_power(self.level, self.tier)
    }

    pub fn power_percent(&self, adventurer_level: u64) -> Result<f64, CombatError> {
        beast_power_percent(adventurer_level, self.power())
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }
}
