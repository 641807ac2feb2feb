//! Deterministic derivation layer for the survivor client.
//!
//! `survivor-core` turns raw on-chain integers (adventurer XP, beast level and
//! tier, market seeds) into the derived values the UI displays: levels,
//! progress bars, market inventories and beast power. Every function is pure,
//! so results can be recomputed on any render without a network round trip
//! and must match the contract-side computation exactly.
pub mod adventurer;
pub mod combat;
pub mod config;
pub mod error;
pub mod items;
pub mod market;
pub mod progression;

pub use alloy_primitives::U256;

pub use adventurer::{Adventurer, Equipment, EquippedItem, Stats};
pub use combat::{
    Beast, BeastDefinition, BeastType, CombatError, Effectiveness, beast, beast_power,
    beast_power_percent, beast_tier, effectiveness, health_percent,
};
pub use config::GameConfig;
pub use error::{ErrorSeverity, GameError};
pub use items::{ItemDefinition, ItemType, Slot, Tier, TierError, item, item_price, potion_price};
pub use market::{
    MarketItem, MarketSort, generate_market_items, generate_market_items_with, market_item_ids,
};
pub use progression::{
    ProgressionError, calculate_level, calculate_next_level_xp, calculate_progress,
    item_greatness, levels_gained,
};
