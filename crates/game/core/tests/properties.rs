//! Cross-module properties of the derivation layer.
//!
//! These exercise the public API the way the client does: raw integers in,
//! derived values out.

use survivor_core::{
    Adventurer, Beast, GameConfig, Tier, U256, beast_power, beast_power_percent, calculate_level,
    calculate_next_level_xp, calculate_progress, generate_market_items, generate_market_items_with,
    market_item_ids,
};

const SEEDS: [&str; 4] = [
    "1",
    "123456789012345678901234567890",
    "0x8f1c2a7b3d9e4f6051a2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c4d5e6f70",
    "0xffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
];

fn seeds() -> impl Iterator<Item = U256> {
    SEEDS.iter().map(|s| s.parse::<U256>().expect("valid seed literal"))
}

#[test]
fn level_is_positive_and_monotonic() {
    let mut previous = calculate_level(0);
    assert_eq!(previous, 1);

    for xp in 1..=20_000u64 {
        let level = calculate_level(xp);
        assert!(level >= previous, "level dropped at xp {xp}");
        previous = level;
    }
}

#[test]
fn level_curve_known_points() {
    assert_eq!(calculate_level(0), 1);
    assert_eq!(calculate_level(1), 2);
    assert_eq!(calculate_level(4), 3);
}

#[test]
fn next_level_xp_round_trips_through_level() {
    for level in (1..=10_000u64).chain([65_535, 1 << 20, u64::from(u32::MAX)]) {
        let next = u64::try_from(calculate_next_level_xp(level).unwrap()).unwrap();
        assert_eq!(calculate_level(next), level + 1);
        assert_eq!(calculate_level(next - 1), level);
    }
}

#[test]
fn top_level_threshold_lies_past_u64_xp() {
    let top = calculate_level(u64::MAX);
    let next = calculate_next_level_xp(top).unwrap();
    assert_eq!(next, u128::from(u64::MAX) + 1);
    assert_eq!(calculate_level(u64::try_from(next - 1).unwrap()), top);
}

#[test]
fn progress_bounded_and_zero_at_level_start() {
    for xp in 0..=10_000u64 {
        let progress = calculate_progress(xp);
        assert!((0.0..=100.0).contains(&progress), "xp {xp} -> {progress}");
    }
    for level in 1..=100u64 {
        let start = if level == 1 {
            0
        } else {
            calculate_next_level_xp(level - 1).unwrap() as u64
        };
        assert_eq!(calculate_progress(start), 0.0);
    }
}

#[test]
fn market_is_deterministic() {
    for seed in seeds() {
        assert_eq!(generate_market_items(seed, 20), generate_market_items(seed, 20));
    }
}

#[test]
fn degenerate_market_inputs_are_empty() {
    assert!(generate_market_items(U256::ZERO, 20).is_empty());
    for seed in seeds() {
        assert!(generate_market_items(seed, 0).is_empty());
    }
}

#[test]
fn market_of_five_has_valid_items() {
    for seed in seeds() {
        let items = generate_market_items(seed, 5);
        assert_eq!(items.len(), 5);
        for item in &items {
            assert!((1..=5).contains(&item.tier.value()));
            assert!(item.price > 0);
            assert!((1..=101).contains(&item.id));
        }
    }
}

#[test]
fn market_prefix_is_stable_across_counts() {
    for seed in seeds() {
        let short = market_item_ids(seed, 5);
        let long = market_item_ids(seed, 20);
        assert_eq!(short[..], long[..5]);
    }
}

#[test]
fn market_default_size_from_config() {
    let config = GameConfig::default();
    for seed in seeds() {
        let items = generate_market_items_with(seed, config.market_size, 0, &config);
        assert_eq!(items.len(), GameConfig::DEFAULT_MARKET_SIZE);
    }
}

#[test]
fn beast_power_examples() {
    assert_eq!(beast_power(10, Tier::T1), 50);
    assert_eq!(beast_power(10, Tier::T5), 10);
    assert!(Tier::try_from(6).is_err());
}

#[test]
fn beast_power_percent_never_exceeds_hundred() {
    for adventurer_level in [1u64, 2, 10, 100, 65_536] {
        for power in [0u64, 1, 5, 50, 500, 5_000_000, u64::MAX] {
            let percent = beast_power_percent(adventurer_level, power).unwrap();
            assert!((0.0..=100.0).contains(&percent));
        }
    }
}

#[test]
fn beast_relative_to_adventurer() {
    let adventurer = Adventurer {
        xp: 81,
        health: 100,
        ..Adventurer::default()
    };
    assert_eq!(adventurer.level(), 10);

    let weak = Beast::from_catalog(75, 10, 30).unwrap();
    let strong = Beast::from_catalog(1, 10, 30).unwrap();

    let weak_bar = weak.power_percent(adventurer.level()).unwrap();
    let strong_bar = strong.power_percent(adventurer.level()).unwrap();
    assert_eq!(weak_bar, 20.0);
    assert_eq!(strong_bar, 100.0);
}
