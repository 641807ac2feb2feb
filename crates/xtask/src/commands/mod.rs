//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod beast;
mod level;
mod market;
mod verify_fixtures;

pub use beast::Beast;
pub use level::Level;
pub use market::Market;
pub use verify_fixtures::VerifyFixtures;

use std::str::FromStr;

use survivor_core::U256;

/// Output format shared by the inspection commands.
#[derive(Clone, Copy, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable summary
    Summary,
    /// Pretty-printed JSON
    Json,
}

/// Parse a seed given in decimal or `0x`-prefixed hex.
pub(crate) fn parse_seed(raw: &str) -> Result<U256, String> {
    U256::from_str(raw.trim()).map_err(|e| format!("invalid seed {raw:?}: {e}"))
}

/// Parse any strum-backed enum argument case-insensitively.
pub(crate) fn parse_enum<T: FromStr>(raw: &str) -> Result<T, String> {
    T::from_str(raw).map_err(|_| format!("unrecognized value {raw:?}"))
}
