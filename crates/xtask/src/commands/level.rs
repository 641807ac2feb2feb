//! Level inspection command
//!
//! Prints the level, progress bar and next threshold for an XP total.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use survivor_core::progression::level_floor_xp;
use survivor_core::{calculate_level, calculate_next_level_xp, calculate_progress, levels_gained};

use super::OutputFormat;

/// Show level, progress and next threshold for an XP total
#[derive(Parser)]
pub struct Level {
    /// Adventurer experience points
    #[arg(value_name = "XP")]
    xp: u64,

    /// XP before the latest update; reports how many stat upgrades it unlocked
    #[arg(long, value_name = "XP")]
    previous: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Level {
    pub fn execute(self) -> Result<()> {
        let level = calculate_level(self.xp);
        let floor = level_floor_xp(level).context("level below curve")?;
        let next = calculate_next_level_xp(level).context("next level threshold")?;
        let progress = calculate_progress(self.xp);
        let gained = self.previous.map(|previous| levels_gained(previous, self.xp));

        tracing::debug!(xp = self.xp, level, next, "computed level");

        match self.format {
            OutputFormat::Summary => {
                println!("{} {}", style("XP:").bold().cyan(), self.xp);
                println!("{} {}", style("Level:").bold().cyan(), level);
                println!(
                    "{} {:.1}% ({} / {} XP into level)",
                    style("Progress:").bold().cyan(),
                    progress,
                    u128::from(self.xp) - floor,
                    next - floor
                );
                println!("{} {}", style("Next level at:").bold().cyan(), next);
                if let Some(gained) = gained {
                    println!("{} {}", style("Stat upgrades unlocked:").bold().yellow(), gained);
                }
            }
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "xp": self.xp,
                    "level": level,
                    "progress": progress,
                    "level_floor_xp": u64::try_from(floor).ok(),
                    // the top level's threshold is past u64 XP and prints as null
                    "next_level_xp": u64::try_from(next).ok(),
                    "levels_gained": gained,
                });
                println!("{}", serde_json::to_string_pretty(&json)?);
            }
        }

        Ok(())
    }
}
