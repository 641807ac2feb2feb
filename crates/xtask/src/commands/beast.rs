//! Beast inspection command

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use survivor_core::combat::elemental_adjusted;
use survivor_core::{
    Beast as BeastSnapshot, Effectiveness, ItemType, beast, effectiveness, health_percent,
};

use super::OutputFormat;

/// Show a beast's tier, power and matchups
#[derive(Parser)]
pub struct Beast {
    /// Beast id (1-75)
    #[arg(value_name = "ID")]
    id: u8,

    /// Beast level
    #[arg(short, long, default_value_t = 1)]
    level: u32,

    /// Adventurer level, for the relative power bar
    #[arg(short, long)]
    adventurer_level: Option<u64>,

    /// Current and maximum beast health, e.g. `--health 40 --max-health 80`
    #[arg(long, requires = "max_health")]
    health: Option<u32>,

    #[arg(long, requires = "health")]
    max_health: Option<u32>,

    /// Base weapon damage to adjust for each weapon type against this beast
    #[arg(short, long, default_value_t = 100)]
    damage: u32,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

const WEAPONS: [ItemType; 3] = [ItemType::Magic, ItemType::Blade, ItemType::Bludgeon];
const ARMORS: [ItemType; 3] = [ItemType::Cloth, ItemType::Hide, ItemType::Metal];

impl Beast {
    pub fn execute(self) -> Result<()> {
        let definition = beast(self.id).with_context(|| format!("Unknown beast id {}", self.id))?;
        let snapshot = BeastSnapshot::from_catalog(self.id, self.level, self.health.unwrap_or(0))?;

        let power = snapshot.power();
        let power_percent = self
            .adventurer_level
            .map(|level| snapshot.power_percent(level))
            .transpose()?;
        let health_bar = self
            .health
            .zip(self.max_health)
            .map(|(current, max)| health_percent(current, max));

        let armor = definition.beast_type.armor_type();
        let attack = definition.beast_type.attack_type();
        let weak_to = matchups(&WEAPONS, |weapon| effectiveness(weapon, armor), Effectiveness::Strong);
        let resists = matchups(&WEAPONS, |weapon| effectiveness(weapon, armor), Effectiveness::Weak);
        let threatens = matchups(&ARMORS, |worn| effectiveness(attack, worn), Effectiveness::Strong);
        let damage = weapon_damage(self.damage, armor);

        match self.format {
            OutputFormat::Summary => {
                println!(
                    "{} {} (#{})",
                    style("Beast:").bold().cyan(),
                    definition.name,
                    definition.id
                );
                println!("{} {}", style("Type:").bold().cyan(), definition.beast_type);
                println!("{} {}", style("Tier:").bold().cyan(), definition.tier);
                println!("{} {}", style("Level:").bold().cyan(), self.level);
                println!("{} {}", style("Power:").bold().cyan(), power);
                if let Some(percent) = power_percent {
                    println!("{} {:.1}%", style("Power bar:").bold().cyan(), percent);
                }
                if let Some(percent) = health_bar {
                    println!("{} {:.1}%", style("Health bar:").bold().cyan(), percent);
                }
                println!();
                println!("{}", style("Matchups:").bold().yellow());
                println!("  Attacks with {attack}, wears {armor}");
                println!("  Weak to: {}", join(&weak_to));
                println!("  Resists: {}", join(&resists));
                println!("  Hits hard against: {}", join(&threatens));
                println!();
                println!("{} (base {})", style("Damage dealt:").bold().yellow(), self.damage);
                for (weapon, dealt) in &damage {
                    println!("  {:<9} {}", weapon.to_string(), dealt);
                }
            }
            OutputFormat::Json => {
                let damage: serde_json::Map<String, serde_json::Value> = damage
                    .iter()
                    .map(|(weapon, dealt)| (weapon.to_string(), (*dealt).into()))
                    .collect();
                let json = serde_json::json!({
                    "beast": definition,
                    "level": self.level,
                    "power": power,
                    "power_percent": power_percent,
                    "health_percent": health_bar,
                    "weak_to": weak_to,
                    "resists": resists,
                    "hits_hard_against": threatens,
                    "base_damage": self.damage,
                    "damage": damage,
                });
                println!("{}", serde_json::to_string_pretty(&json)?);
            }
        }

        Ok(())
    }
}

fn matchups(
    candidates: &[ItemType],
    rate: impl Fn(ItemType) -> Effectiveness,
    wanted: Effectiveness,
) -> Vec<ItemType> {
    candidates
        .iter()
        .copied()
        .filter(|candidate| rate(*candidate) == wanted)
        .collect()
}

/// Damage each weapon type deals to `armor` from the same base.
fn weapon_damage(base: u32, armor: ItemType) -> Vec<(ItemType, u32)> {
    WEAPONS
        .iter()
        .map(|&weapon| (weapon, elemental_adjusted(base, effectiveness(weapon, armor))))
        .collect()
}

fn join(types: &[ItemType]) -> String {
    types
        .iter()
        .map(ItemType::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_flags_come_in_pairs() {
        assert!(Beast::try_parse_from(["beast", "53", "--max-health", "80"]).is_err());
        assert!(Beast::try_parse_from(["beast", "53", "--health", "40"]).is_err());

        let cmd = Beast::try_parse_from(["beast", "53", "--health", "40", "--max-health", "80"])
            .unwrap();
        assert_eq!((cmd.health, cmd.max_health), (Some(40), Some(80)));
    }

    #[test]
    fn damage_against_metal_armor() {
        assert_eq!(
            weapon_damage(100, ItemType::Metal),
            vec![
                (ItemType::Magic, 150),
                (ItemType::Blade, 50),
                (ItemType::Bludgeon, 100)
            ]
        );
    }

    #[test]
    fn matchups_for_a_brute() {
        let armor = ItemType::Metal;
        let weak_to = matchups(&WEAPONS, |weapon| effectiveness(weapon, armor), Effectiveness::Strong);
        assert_eq!(weak_to, vec![ItemType::Magic]);
        assert_eq!(join(&[ItemType::Blade, ItemType::Hide]), "blade, hide");
    }
}
