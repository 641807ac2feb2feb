//! Beast and combat derivations.
//!
//! Combat itself is resolved on-chain. This module only derives the values
//! the UI shows about a fight: beast power, relative bars and elemental
//! matchups. All functions are deterministic and side-effect free.
//!
//! # Core Functions
//!
//! - `beast_power`: `level * (6 - tier)`
//! - `beast_power_percent`: power bar against a fixed per-level ceiling
//! - `health_percent`: health bar
//! - `effectiveness`: weapon type vs armor type

pub mod beast;
pub mod effectiveness;
pub mod error;
pub mod power;

pub use beast::{BEASTS, BeastDefinition, BeastType, beast, beast_tier};
pub use effectiveness::{Effectiveness, effectiveness, elemental_adjusted};
pub use error::CombatError;
pub use power::{
    Beast, POWER_CEILING_PER_LEVEL, beast_power, beast_power_percent, health_percent,
};
