//! Item catalog, classification and pricing.
//!
//! - [`catalog`]: the fixed 101-entry item table
//! - [`types`]: `Tier`, `Slot` and `ItemType`
//! - [`price`]: the tier-to-price table used by the market and the UI

pub mod catalog;
pub mod price;
pub mod types;

pub use catalog::{ITEMS, ItemDefinition, item, items_for_slot};
pub use price::{item_price, potion_price};
pub use types::{ItemType, Slot, Tier, TierError};
