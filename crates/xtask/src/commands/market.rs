//! Market generation command
//!
//! Regenerates the market for a seed exactly as the client shows it.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use survivor_core::market::{filter_by_slot, sort_market};
use survivor_core::{MarketItem, MarketSort, Slot, U256, generate_market_items_with};

use super::{OutputFormat, parse_enum, parse_seed};
use crate::dirs;

/// Generate the market for a seed
#[derive(Parser)]
pub struct Market {
    /// Market seed, decimal or 0x-prefixed hex
    #[arg(value_name = "SEED", value_parser = parse_seed)]
    seed: U256,

    /// Number of items (defaults to the configured market size)
    #[arg(short, long)]
    count: Option<usize>,

    /// Adventurer charisma, applied as a price discount
    #[arg(long, default_value_t = 0)]
    charisma: u8,

    /// Adventurer gold; items above it are marked unaffordable
    #[arg(long)]
    gold: Option<u32>,

    /// Only show items for this slot (weapon, chest, head, waist, foot, hand, neck, ring)
    #[arg(long, value_parser = parse_enum::<Slot>)]
    slot: Option<Slot>,

    /// Sort order (seed, price, tier, slot, name)
    #[arg(long, value_parser = parse_enum::<MarketSort>, default_value = "seed")]
    sort: MarketSort,

    /// Config TOML (overrides $SURVIVOR_CONFIG)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Market {
    pub fn execute(self) -> Result<()> {
        let config = dirs::load_config(self.config.as_deref())?;
        let count = self.count.unwrap_or(config.market_size);

        let mut items = generate_market_items_with(self.seed, count, self.charisma, &config);
        if let Some(slot) = self.slot {
            items = filter_by_slot(&items, slot).copied().collect();
        }
        sort_market(&mut items, self.sort);

        tracing::debug!(seed = %self.seed, count, shown = items.len(), "generated market");

        match self.format {
            OutputFormat::Summary => self.print_summary(&items),
            OutputFormat::Json => {
                let json =
                    serde_json::to_string_pretty(&items).context("Failed to serialize market")?;
                println!("{}", json);
            }
        }

        Ok(())
    }

    fn print_summary(&self, items: &[MarketItem]) {
        println!("{} {}", style("Seed:").bold().cyan(), self.seed);
        if items.is_empty() {
            println!("{}", style("No market available").yellow());
            return;
        }

        println!(
            "{}",
            style(format!(
                "{:>4}  {:<24} {:<4} {:<7} {:<9} {:>5}",
                "ID", "NAME", "TIER", "SLOT", "TYPE", "PRICE"
            ))
            .bold()
        );
        for item in items {
            let line = format!(
                "{:>4}  {:<24} {:<4} {:<7} {:<9} {:>5}",
                item.id,
                item.name,
                item.tier.to_string(),
                item.slot.to_string(),
                item.kind.to_string(),
                item.price
            );
            match self.gold {
                Some(gold) if !item.is_affordable(gold) => println!("{}", style(line).dim()),
                _ => println!("{}", line),
            }
        }
    }
}
