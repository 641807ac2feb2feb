/// Game balance constants and tunable parameters.
///
/// Defaults mirror the constants enforced by the game contract. Overriding
/// them is only meaningful for local experiments; displayed prices must match
/// the contract to be accurate.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Gold per tier step. A T1 item costs `5 * multiplier`, a T5 item `1 * multiplier`.
    pub tier_price_multiplier: u32,
    /// Gold discount on items per point of charisma.
    pub charisma_item_discount: u32,
    pub minimum_item_price: u32,
    /// Gold discount on potions per point of charisma.
    pub charisma_potion_discount: u64,
    pub minimum_potion_price: u64,
    pub starting_health: u32,
    pub health_per_vitality: u32,
    pub max_adventurer_health: u32,
    /// Number of items offered per market.
    pub market_size: usize,
}

impl GameConfig {
    // ===== catalog constants =====
    /// Number of items in the catalog. Prime, which the market stride relies on.
    pub const NUM_ITEMS: u8 = 101;
    pub const NUM_BEASTS: u8 = 75;
    pub const MAX_ITEM_GREATNESS: u8 = 20;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TIER_PRICE_MULTIPLIER: u32 = 4;
    pub const DEFAULT_CHARISMA_ITEM_DISCOUNT: u32 = 1;
    pub const DEFAULT_MINIMUM_ITEM_PRICE: u32 = 1;
    pub const DEFAULT_CHARISMA_POTION_DISCOUNT: u64 = 2;
    pub const DEFAULT_MINIMUM_POTION_PRICE: u64 = 1;
    pub const DEFAULT_STARTING_HEALTH: u32 = 100;
    pub const DEFAULT_HEALTH_PER_VITALITY: u32 = 10;
    pub const DEFAULT_MAX_ADVENTURER_HEALTH: u32 = 1023;
    pub const DEFAULT_MARKET_SIZE: usize = 20;

    pub const fn new() -> Self {
        Self {
            tier_price_multiplier: Self::DEFAULT_TIER_PRICE_MULTIPLIER,
            charisma_item_discount: Self::DEFAULT_CHARISMA_ITEM_DISCOUNT,
            minimum_item_price: Self::DEFAULT_MINIMUM_ITEM_PRICE,
            charisma_potion_discount: Self::DEFAULT_CHARISMA_POTION_DISCOUNT,
            minimum_potion_price: Self::DEFAULT_MINIMUM_POTION_PRICE,
            starting_health: Self::DEFAULT_STARTING_HEALTH,
            health_per_vitality: Self::DEFAULT_HEALTH_PER_VITALITY,
            max_adventurer_health: Self::DEFAULT_MAX_ADVENTURER_HEALTH,
            market_size: Self::DEFAULT_MARKET_SIZE,
        }
    }

    pub fn with_market_size(mut self, market_size: usize) -> Self {
        self.market_size = market_size;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
