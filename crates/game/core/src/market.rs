//! Deterministic market generation.
//!
//! Given the market seed published by the game contract, the set of items an
//! adventurer may buy is fully determined. The UI regenerates it from the seed
//! on every mount instead of fetching it.
//!
//! # Selection
//!
//! ```text
//! stride = (seed mod 100) + 1          in 1..=100
//! start  = (seed div 100) mod 101      in 0..=100
//! id_i   = ((start + i * stride) mod 101) + 1
//! ```
//!
//! The catalog size (101) is prime and the stride is never a multiple of it,
//! so the first 101 slots of any market hold distinct items. Longer markets
//! wrap around the same cycle.

use alloy_primitives::U256;

use crate::config::GameConfig;
use crate::items::{ItemDefinition, ItemType, Slot, Tier, item, item_price};

/// A purchasable item in the current market.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MarketItem {
    pub id: u8,
    pub name: &'static str,
    pub tier: Tier,
    pub slot: Slot,
    pub kind: ItemType,
    pub price: u32,
}

impl MarketItem {
    pub fn new(definition: &ItemDefinition, price: u32) -> Self {
        Self {
            id: definition.id,
            name: definition.name,
            tier: definition.tier,
            slot: definition.slot,
            kind: definition.kind,
            price,
        }
    }

    pub fn is_affordable(&self, gold: u32) -> bool {
        gold >= self.price
    }
}

/// Sort order for market listings. Ties always fall back to item id.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MarketSort {
    /// Keep the order derived from the seed.
    #[default]
    Seed,
    Price,
    Tier,
    Slot,
    Name,
}

/// Item ids offered by the market for `seed`, in display order.
///
/// Returns an empty list for a zero seed or zero count.
pub fn market_item_ids(seed: U256, count: usize) -> Vec<u8> {
    if seed.is_zero() || count == 0 {
        return Vec::new();
    }

    let num_items = u64::from(GameConfig::NUM_ITEMS);
    let stride_modulus = U256::from(num_items - 1);

    // both remainders are below 101, so the low limb holds the full value
    let stride = (seed % stride_modulus).as_limbs()[0] + 1;
    let start = ((seed / stride_modulus) % U256::from(num_items)).as_limbs()[0];

    let mut ids = Vec::with_capacity(count);
    let mut cursor = start;
    for _ in 0..count {
        ids.push(cursor as u8 + 1);
        cursor = (cursor + stride) % num_items;
    }
    ids
}

/// Generate the market for `seed` at base prices (no charisma discount).
pub fn generate_market_items(seed: U256, count: usize) -> Vec<MarketItem> {
    generate_market_items_with(seed, count, 0, &GameConfig::default())
}

/// Generate the market for `seed`, priced for an adventurer with `charisma`.
///
/// Ids and order are independent of `charisma` and `config`; only prices change.
pub fn generate_market_items_with(
    seed: U256,
    count: usize,
    charisma: u8,
    config: &GameConfig,
) -> Vec<MarketItem> {
    market_item_ids(seed, count)
        .into_iter()
        .filter_map(item)
        .map(|definition| {
            MarketItem::new(definition, item_price(definition.tier, charisma, config))
        })
        .collect()
}

/// Items in `items` that fit `slot`.
pub fn filter_by_slot(items: &[MarketItem], slot: Slot) -> impl Iterator<Item = &MarketItem> {
    items.iter().filter(move |item| item.slot == slot)
}

/// Sort a market listing in place.
pub fn sort_market(items: &mut [MarketItem], sort: MarketSort) {
    match sort {
        MarketSort::Seed => {}
        MarketSort::Price => items.sort_by_key(|item| (item.price, item.id)),
        MarketSort::Tier => items.sort_by_key(|item| (item.tier, item.id)),
        MarketSort::Slot => items.sort_by_key(|item| (item.slot, item.id)),
        MarketSort::Name => items.sort_by(|a, b| a.name.cmp(b.name).then(a.id.cmp(&b.id))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn zero_seed_or_count_yields_empty_market() {
        assert!(generate_market_items(U256::ZERO, 5).is_empty());
        assert!(generate_market_items(U256::from(12345u64), 0).is_empty());
    }

    #[test]
    fn small_seed_walks_the_catalog() {
        // seed 1: stride 2, start 0
        assert_eq!(market_item_ids(U256::from(1u64), 5), vec![1, 3, 5, 7, 9]);
        // seed 12345: stride 46, start 123 mod 101 = 22
        assert_eq!(market_item_ids(U256::from(12345u64), 5), vec![23, 69, 14, 60, 5]);
    }

    #[test]
    fn full_cycle_has_no_duplicates() {
        let seed = U256::from_str_radix("9f3a61c0de5b7e2241aa0b83cc91d4e7", 16).unwrap();
        let ids = market_item_ids(seed, 101);
        let unique: HashSet<u8> = ids.iter().copied().collect();
        assert_eq!(unique.len(), 101);
        assert!(ids.iter().all(|id| (1..=101).contains(id)));
    }

    #[test]
    fn long_markets_wrap_around() {
        let ids = market_item_ids(U256::from(777u64), 202);
        assert_eq!(ids[..101], ids[101..]);
    }

    #[test]
    fn same_seed_same_market() {
        let seed = U256::MAX - U256::from(42u64);
        assert_eq!(generate_market_items(seed, 20), generate_market_items(seed, 20));
    }

    #[test]
    fn charisma_changes_prices_not_items() {
        let seed = U256::from(987654321u64);
        let config = GameConfig::default();
        let base = generate_market_items(seed, 10);
        let discounted = generate_market_items_with(seed, 10, 3, &config);

        for (a, b) in base.iter().zip(&discounted) {
            assert_eq!(a.id, b.id);
            assert!(b.price <= a.price);
            assert!(b.price >= config.minimum_item_price);
        }
    }

    #[test]
    fn sorting_breaks_ties_by_id() {
        let mut items = generate_market_items(U256::from(31337u64), 20);
        sort_market(&mut items, MarketSort::Price);
        for pair in items.windows(2) {
            assert!((pair[0].price, pair[0].id) < (pair[1].price, pair[1].id));
        }

        sort_market(&mut items, MarketSort::Name);
        for pair in items.windows(2) {
            assert!(pair[0].name <= pair[1].name);
        }
    }

    #[test]
    fn slot_filter_and_affordability() {
        let items = generate_market_items(U256::from(5555u64), 30);
        let rings: Vec<_> = filter_by_slot(&items, Slot::Ring).collect();
        assert!(rings.iter().all(|item| item.kind == ItemType::Ring));

        let cheapest = items.iter().map(|item| item.price).min().unwrap();
        assert!(items.iter().any(|item| item.is_affordable(cheapest)));
        assert!(!items.iter().any(|item| item.is_affordable(cheapest - 1)));
    }
}
