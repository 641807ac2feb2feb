//! Elemental effectiveness between weapon and armor types.
//!
//! ```text
//!            Cloth   Hide    Metal
//! Magic      fair    weak    strong
//! Blade      strong  fair    weak
//! Bludgeon   weak    strong  fair
//! ```

use crate::items::ItemType;

/// How well an attack type fares against an armor type.
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
pub enum Effectiveness {
    Weak,
    Fair,
    Strong,
}

/// Effectiveness of `attack` against `armor`.
///
/// Pairs that are not weapon-vs-armor (jewelry, or two armor types) are `Fair`.
pub fn effectiveness(attack: ItemType, armor: ItemType) -> Effectiveness {
    use ItemType::*;
    match (attack, armor) {
        (Magic, Metal) | (Blade, Cloth) | (Bludgeon, Hide) => Effectiveness::Strong,
        (Magic, Hide) | (Blade, Metal) | (Bludgeon, Cloth) => Effectiveness::Weak,
        _ => Effectiveness::Fair,
    }
}

/// Apply elemental adjustment to a base damage value: +50% strong, -50% weak.
pub fn elemental_adjusted(base: u32, effectiveness: Effectiveness) -> u32 {
    let half = base / 2;
    match effectiveness {
        Effectiveness::Strong => base.saturating_add(half),
        Effectiveness::Fair => base,
        Effectiveness::Weak => base - half,
    }
}
