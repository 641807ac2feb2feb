//! Market fixture verification command
//!
//! Replays recorded `(seed, count, ids)` triples against the current market
//! selection, or captures new ones.

use anyhow::Result;
use clap::Parser;
use console::style;
use std::path::PathBuf;

use survivor_content::{FixtureLoader, FixtureSet, MarketFixture};
use survivor_core::U256;

use super::parse_seed;

/// Replay recorded market fixtures against the current selection
#[derive(Parser)]
pub struct VerifyFixtures {
    /// RON fixture file
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Instead of verifying, print a fixture file captured for these seeds
    #[arg(long, value_name = "SEED", value_parser = parse_seed, num_args = 1..)]
    capture: Vec<U256>,

    /// Items per captured fixture
    #[arg(long, default_value_t = 20)]
    count: usize,
}

impl VerifyFixtures {
    pub fn execute(self) -> Result<()> {
        if !self.capture.is_empty() {
            let set = FixtureSet {
                fixtures: self
                    .capture
                    .iter()
                    .map(|seed| MarketFixture::capture(format!("seed {seed}"), *seed, self.count))
                    .collect(),
            };
            println!("{}", FixtureLoader::to_ron(&set)?);
            return Ok(());
        }

        let Some(path) = self.path else {
            anyhow::bail!("Provide a fixture FILE to verify, or --capture SEED to record one");
        };

        let report = FixtureLoader::verify_file(&path)?;

        for mismatch in &report.mismatches {
            println!(
                "{} {} (seed {})",
                style("✗").red().bold(),
                mismatch.label,
                mismatch.seed
            );
            println!("    expected: {:?}", mismatch.expected);
            println!("    actual:   {:?}", mismatch.actual);
        }

        if report.is_clean() {
            println!(
                "{} {} fixtures match",
                style("✓").green().bold(),
                report.total()
            );
            Ok(())
        } else {
            anyhow::bail!(
                "{} of {} fixtures diverged from the market selection",
                report.mismatches.len(),
                report.total()
            )
        }
    }
}
