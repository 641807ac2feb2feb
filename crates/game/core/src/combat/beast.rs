//! Beast catalog.
//!
//! 75 beasts in three families of 25. Within a family, ids run from the five
//! tier-1 beasts down to the five tier-5 beasts, so the tier of a beast is a
//! function of its id alone.

use crate::config::GameConfig;
use crate::items::{ItemType, Tier};

use super::error::CombatError;

/// Beast family. Determines which weapon the beast attacks with and which
/// armor material it wears.
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
pub enum BeastType {
    Magical,
    Hunter,
    Brute,
}

impl BeastType {
    pub const fn attack_type(self) -> ItemType {
        match self {
            BeastType::Magical => ItemType::Magic,
            BeastType::Hunter => ItemType::Blade,
            BeastType::Brute => ItemType::Bludgeon,
        }
    }

    pub const fn armor_type(self) -> ItemType {
        match self {
            BeastType::Magical => ItemType::Cloth,
            BeastType::Hunter => ItemType::Hide,
            BeastType::Brute => ItemType::Metal,
        }
    }
}

/// Immutable catalog entry for a beast id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BeastDefinition {
    pub id: u8,
    pub name: &'static str,
    pub tier: Tier,
    pub beast_type: BeastType,
}

const fn def(id: u8, name: &'static str, tier: Tier, beast_type: BeastType) -> BeastDefinition {
    BeastDefinition {
        id,
        name,
        tier,
        beast_type,
    }
}

/// All beasts, indexed by `id - 1`.
pub static BEASTS: [BeastDefinition; GameConfig::NUM_BEASTS as usize] = [
    def(1, "Warlock", Tier::T1, BeastType::Magical),
    def(2, "Typhon", Tier::T1, BeastType::Magical),
    def(3, "Jiangshi", Tier::T1, BeastType::Magical),
    def(4, "Anansi", Tier::T1, BeastType::Magical),
    def(5, "Basilisk", Tier::T1, BeastType::Magical),
    def(6, "Gorgon", Tier::T2, BeastType::Magical),
    def(7, "Kitsune", Tier::T2, BeastType::Magical),
    def(8, "Lich", Tier::T2, BeastType::Magical),
    def(9, "Chimera", Tier::T2, BeastType::Magical),
    def(10, "Wendigo", Tier::T2, BeastType::Magical),
    def(11, "Rakshasa", Tier::T3, BeastType::Magical),
    def(12, "Werewolf", Tier::T3, BeastType::Magical),
    def(13, "Banshee", Tier::T3, BeastType::Magical),
    def(14, "Draugr", Tier::T3, BeastType::Magical),
    def(15, "Vampire", Tier::T3, BeastType::Magical),
    def(16, "Goblin", Tier::T4, BeastType::Magical),
    def(17, "Ghoul", Tier::T4, BeastType::Magical),
    def(18, "Wraith", Tier::T4, BeastType::Magical),
    def(19, "Sprite", Tier::T4, BeastType::Magical),
    def(20, "Kappa", Tier::T4, BeastType::Magical),
    def(21, "Fairy", Tier::T5, BeastType::Magical),
    def(22, "Leprechaun", Tier::T5, BeastType::Magical),
    def(23, "Kelpie", Tier::T5, BeastType::Magical),
    def(24, "Pixie", Tier::T5, BeastType::Magical),
    def(25, "Gnome", Tier::T5, BeastType::Magical),
    def(26, "Griffin", Tier::T1, BeastType::Hunter),
    def(27, "Manticore", Tier::T1, BeastType::Hunter),
    def(28, "Phoenix", Tier::T1, BeastType::Hunter),
    def(29, "Dragon", Tier::T1, BeastType::Hunter),
    def(30, "Minotaur", Tier::T1, BeastType::Hunter),
    def(31, "Qilin", Tier::T2, BeastType::Hunter),
    def(32, "Ammit", Tier::T2, BeastType::Hunter),
    def(33, "Nue", Tier::T2, BeastType::Hunter),
    def(34, "Skinwalker", Tier::T2, BeastType::Hunter),
    def(35, "Chupacabra", Tier::T2, BeastType::Hunter),
    def(36, "Weretiger", Tier::T3, BeastType::Hunter),
    def(37, "Wyvern", Tier::T3, BeastType::Hunter),
    def(38, "Roc", Tier::T3, BeastType::Hunter),
    def(39, "Harpy", Tier::T3, BeastType::Hunter),
    def(40, "Pegasus", Tier::T3, BeastType::Hunter),
    def(41, "Hippogriff", Tier::T4, BeastType::Hunter),
    def(42, "Fenrir", Tier::T4, BeastType::Hunter),
    def(43, "Jaguar", Tier::T4, BeastType::Hunter),
    def(44, "Satori", Tier::T4, BeastType::Hunter),
    def(45, "Direwolf", Tier::T4, BeastType::Hunter),
    def(46, "Bear", Tier::T5, BeastType::Hunter),
    def(47, "Wolf", Tier::T5, BeastType::Hunter),
    def(48, "Mantis", Tier::T5, BeastType::Hunter),
    def(49, "Spider", Tier::T5, BeastType::Hunter),
    def(50, "Rat", Tier::T5, BeastType::Hunter),
    def(51, "Kraken", Tier::T1, BeastType::Brute),
    def(52, "Colossus", Tier::T1, BeastType::Brute),
    def(53, "Balrog", Tier::T1, BeastType::Brute),
    def(54, "Leviathan", Tier::T1, BeastType::Brute),
    def(55, "Tarrasque", Tier::T1, BeastType::Brute),
    def(56, "Titan", Tier::T2, BeastType::Brute),
    def(57, "Nephilim", Tier::T2, BeastType::Brute),
    def(58, "Behemoth", Tier::T2, BeastType::Brute),
    def(59, "Hydra", Tier::T2, BeastType::Brute),
    def(60, "Juggernaut", Tier::T2, BeastType::Brute),
    def(61, "Oni", Tier::T3, BeastType::Brute),
    def(62, "Jotunn", Tier::T3, BeastType::Brute),
    def(63, "Ettin", Tier::T3, BeastType::Brute),
    def(64, "Cyclops", Tier::T3, BeastType::Brute),
    def(65, "Giant", Tier::T3, BeastType::Brute),
    def(66, "Nemean Lion", Tier::T4, BeastType::Brute),
    def(67, "Berserker", Tier::T4, BeastType::Brute),
    def(68, "Yeti", Tier::T4, BeastType::Brute),
    def(69, "Golem", Tier::T4, BeastType::Brute),
    def(70, "Ent", Tier::T4, BeastType::Brute),
    def(71, "Troll", Tier::T5, BeastType::Brute),
    def(72, "Bigfoot", Tier::T5, BeastType::Brute),
    def(73, "Ogre", Tier::T5, BeastType::Brute),
    def(74, "Orc", Tier::T5, BeastType::Brute),
    def(75, "Skeleton", Tier::T5, BeastType::Brute),
];

/// Look up a beast definition by id.
pub fn beast(id: u8) -> Option<&'static BeastDefinition> {
    BEASTS.get(usize::from(id).checked_sub(1)?)
}

/// Tier of the beast with `id`.
///
/// # Errors
///
/// [`CombatError::UnknownBeast`] for ids outside `1..=75`.
pub fn beast_tier(id: u8) -> Result<Tier, CombatError> {
    beast(id)
        .map(|definition| definition.tier)
        .ok_or(CombatError::UnknownBeast(id))
}
