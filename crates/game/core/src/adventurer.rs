//! Adventurer snapshot and the values derived from it.
//!
//! The snapshot is decoded elsewhere (contract call or indexer row) and passed
//! in explicitly; nothing here reads shared state. Stats and equipment are
//! read-only inputs to the derived formulas.

use crate::config::GameConfig;
use crate::items::{ItemDefinition, Slot, Tier, item, item_price, potion_price};
use crate::progression::{
    ProgressionError, calculate_level, calculate_next_level_xp, calculate_progress,
    item_greatness,
};

/// The seven adventurer attributes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub strength: u8,
    pub dexterity: u8,
    pub vitality: u8,
    pub intelligence: u8,
    pub wisdom: u8,
    pub charisma: u8,
    pub luck: u8,
}

/// An item in an equipment slot with the XP it has accumulated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquippedItem {
    pub id: u8,
    pub xp: u16,
}

impl EquippedItem {
    pub const fn new(id: u8, xp: u16) -> Self {
        Self { id, xp }
    }

    pub fn definition(&self) -> Option<&'static ItemDefinition> {
        item(self.id)
    }

    pub fn greatness(&self) -> u8 {
        item_greatness(self.xp)
    }
}

/// Eight equipment slots, each optionally filled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    pub weapon: Option<EquippedItem>,
    pub chest: Option<EquippedItem>,
    pub head: Option<EquippedItem>,
    pub waist: Option<EquippedItem>,
    pub foot: Option<EquippedItem>,
    pub hand: Option<EquippedItem>,
    pub neck: Option<EquippedItem>,
    pub ring: Option<EquippedItem>,
}

impl Equipment {
    pub fn get(&self, slot: Slot) -> Option<EquippedItem> {
        match slot {
            Slot::Weapon => self.weapon,
            Slot::Chest => self.chest,
            Slot::Head => self.head,
            Slot::Waist => self.waist,
            Slot::Foot => self.foot,
            Slot::Hand => self.hand,
            Slot::Neck => self.neck,
            Slot::Ring => self.ring,
        }
    }

    /// Filled slots in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, EquippedItem)> + '_ {
        Slot::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|equipped| (slot, equipped)))
    }

    /// Whether an item id is currently equipped in any slot.
    pub fn contains(&self, id: u8) -> bool {
        self.iter().any(|(_, equipped)| equipped.id == id)
    }

    /// Luck granted by jewelry: the summed greatness of the neck and ring items.
    pub fn luck(&self) -> u32 {
        self.iter()
            .filter(|(slot, _)| slot.is_jewelry())
            .map(|(_, equipped)| u32::from(equipped.greatness()))
            .sum()
    }
}

/// Snapshot of an adventurer as decoded from on-chain state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Adventurer {
    pub health: u32,
    pub xp: u64,
    pub gold: u32,
    pub stats: Stats,
    pub equipment: Equipment,
    /// Unspent stat points granted by level-ups.
    pub stat_upgrades: u8,
}

impl Adventurer {
    pub fn level(&self) -> u64 {
        calculate_level(self.xp)
    }

    pub fn progress(&self) -> f64 {
        calculate_progress(self.xp)
    }

    pub fn next_level_xp(&self) -> Result<u128, ProgressionError> {
        calculate_next_level_xp(self.level())
    }

    /// `min(starting_health + vitality * health_per_vitality, max_adventurer_health)`
    pub fn max_health(&self, config: &GameConfig) -> u32 {
        let bonus = u32::from(self.stats.vitality).saturating_mul(config.health_per_vitality);
        config
            .starting_health
            .saturating_add(bonus)
            .min(config.max_adventurer_health)
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    pub fn has_stat_upgrades(&self) -> bool {
        self.stat_upgrades > 0
    }

    /// Health potions only help below max health.
    pub fn can_use_potion(&self, config: &GameConfig) -> bool {
        !self.is_dead() && self.health < self.max_health(config)
    }

    pub fn potion_price(&self, config: &GameConfig) -> u64 {
        potion_price(self.level(), self.stats.charisma, config)
    }

    pub fn item_price(&self, tier: Tier, config: &GameConfig) -> u32 {
        item_price(tier, self.stats.charisma, config)
    }

    pub fn can_afford(&self, price: u32) -> bool {
        self.gold >= price
    }
}
