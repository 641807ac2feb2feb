//! Gold prices for items and potions.
//!
//! # Formulas
//!
//! ```text
//! item_price   = max((6 - tier) * tier_price_multiplier - charisma * charisma_item_discount,
//!                    minimum_item_price)
//! potion_price = max(level - charisma * charisma_potion_discount, minimum_potion_price)
//! ```

use super::types::Tier;
use crate::config::GameConfig;

/// Price of an item of `tier` for an adventurer with `charisma`.
pub fn item_price(tier: Tier, charisma: u8, config: &GameConfig) -> u32 {
    let base = u32::from(tier.weight()).saturating_mul(config.tier_price_multiplier);
    let discount = u32::from(charisma).saturating_mul(config.charisma_item_discount);

    base.saturating_sub(discount).max(config.minimum_item_price)
}

/// Price of a health potion at adventurer `level` with `charisma`.
pub fn potion_price(level: u64, charisma: u8, config: &GameConfig) -> u64 {
    let discount = u64::from(charisma).saturating_mul(config.charisma_potion_discount);

    level.saturating_sub(discount).max(config.minimum_potion_price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_price_follows_tier_table() {
        let config = GameConfig::default();
        assert_eq!(item_price(Tier::T1, 0, &config), 20);
        assert_eq!(item_price(Tier::T2, 0, &config), 16);
        assert_eq!(item_price(Tier::T3, 0, &config), 12);
        assert_eq!(item_price(Tier::T4, 0, &config), 8);
        assert_eq!(item_price(Tier::T5, 0, &config), 4);
    }

    #[test]
    fn charisma_discount_never_drops_below_minimum() {
        let config = GameConfig::default();
        assert_eq!(item_price(Tier::T1, 5, &config), 15);
        assert_eq!(item_price(Tier::T5, 3, &config), 1);
        assert_eq!(item_price(Tier::T5, u8::MAX, &config), 1);
    }

    #[test]
    fn potion_price_scales_with_level() {
        let config = GameConfig::default();
        assert_eq!(potion_price(1, 0, &config), 1);
        assert_eq!(potion_price(10, 0, &config), 10);
        assert_eq!(potion_price(10, 3, &config), 4);
        assert_eq!(potion_price(10, 5, &config), 1);
        assert_eq!(potion_price(10, 200, &config), 1);
    }

    #[test]
    fn custom_multiplier_is_respected() {
        let config = GameConfig {
            tier_price_multiplier: 10,
            ..GameConfig::default()
        };
        assert_eq!(item_price(Tier::T2, 0, &config), 40);
    }
}
