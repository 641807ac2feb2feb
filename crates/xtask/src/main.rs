//! Development tasks for the survivor client
//!
//! This binary inspects the derivation layer from the command line using the
//! cargo-xtask pattern. Run with: `cargo xtask <command>`

mod commands;
mod dirs;

use anyhow::Result;
use clap::Parser;
use commands::{Beast, Level, Market, VerifyFixtures};

/// Development tasks for the survivor client
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Inspect levels, markets and beasts", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Show level, progress and next threshold for an XP total
    Level(Level),

    /// Generate the market for a seed
    Market(Market),

    /// Show a beast's tier, power and matchups
    Beast(Beast),

    /// Replay recorded market fixtures against the current selection
    VerifyFixtures(VerifyFixtures),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for SURVIVOR_CONFIG and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Level(cmd) => cmd.execute(),
        Command::Market(cmd) => cmd.execute(),
        Command::Beast(cmd) => cmd.execute(),
        Command::VerifyFixtures(cmd) => cmd.execute(),
    }
}
