//! Item classification enums: tier, equipment slot and item type.

use crate::error::{ErrorSeverity, GameError};

/// Rarity band shared by items and beasts. `T1` is the best, `T5` the worst.
///
/// Serialized as its integer value (1..=5) so indexer rows decode directly.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Tier {
    T1 = 1,
    T2 = 2,
    T3 = 3,
    T4 = 4,
    T5 = 5,
}

impl Tier {
    pub const ALL: [Tier; 5] = [Tier::T1, Tier::T2, Tier::T3, Tier::T4, Tier::T5];

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// `6 - tier`: 5 for T1 down to 1 for T5.
    ///
    /// This single table drives both item prices and beast power.
    pub const fn weight(self) -> u8 {
        6 - self as u8
    }
}

/// Raised when a raw tier value falls outside `1..=5`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TierError {
    #[error("tier {0} is out of range (expected 1..=5)")]
    OutOfRange(u8),
}

impl GameError for TierError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "TIER_OUT_OF_RANGE"
    }
}

impl TryFrom<u8> for Tier {
    type Error = TierError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Tier::T1),
            2 => Ok(Tier::T2),
            3 => Ok(Tier::T3),
            4 => Ok(Tier::T4),
            5 => Ok(Tier::T5),
            other => Err(TierError::OutOfRange(other)),
        }
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> Self {
        tier.value()
    }
}

/// Equipment slot an item occupies.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Slot {
    Weapon,
    Chest,
    Head,
    Waist,
    Foot,
    Hand,
    Neck,
    Ring,
}

impl Slot {
    pub const ALL: [Slot; 8] = [
        Slot::Weapon,
        Slot::Chest,
        Slot::Head,
        Slot::Waist,
        Slot::Foot,
        Slot::Hand,
        Slot::Neck,
        Slot::Ring,
    ];

    pub const fn is_jewelry(self) -> bool {
        matches!(self, Slot::Neck | Slot::Ring)
    }
}

/// Material/attack family of an item.
///
/// Weapons are `Magic`, `Blade` or `Bludgeon`; armor is `Cloth`, `Hide` or
/// `Metal`; jewelry has its own kinds and takes no part in elemental combat.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemType {
    Magic,
    Blade,
    Bludgeon,
    Cloth,
    Hide,
    Metal,
    Necklace,
    Ring,
}

impl ItemType {
    pub const fn is_weapon(self) -> bool {
        matches!(self, ItemType::Magic | ItemType::Blade | ItemType::Bludgeon)
    }

    pub const fn is_armor(self) -> bool {
        matches!(self, ItemType::Cloth | ItemType::Hide | ItemType::Metal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn tier_round_trips_through_raw_values() {
        for tier in Tier::ALL {
            assert_eq!(Tier::try_from(tier.value()), Ok(tier));
        }
        assert_eq!(Tier::try_from(0), Err(TierError::OutOfRange(0)));
        assert_eq!(Tier::try_from(6), Err(TierError::OutOfRange(6)));
    }

    #[test]
    fn tier_weight_inverts_rank() {
        assert_eq!(Tier::T1.weight(), 5);
        assert_eq!(Tier::T3.weight(), 3);
        assert_eq!(Tier::T5.weight(), 1);
    }

    #[test]
    fn enums_parse_case_insensitively() {
        assert_eq!(Tier::from_str("t2").unwrap(), Tier::T2);
        assert_eq!(Slot::from_str("WEAPON").unwrap(), Slot::Weapon);
        assert_eq!(ItemType::from_str("bludgeon").unwrap(), ItemType::Bludgeon);
        assert_eq!(Slot::Neck.to_string(), "neck");
    }
}
