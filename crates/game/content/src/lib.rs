//! Data-driven content and loaders for the survivor client.
//!
//! This crate provides:
//! - Market fixtures: `(seed, count, ids)` triples that pin the market
//!   selection. The bundled set is a regression snapshot; markets recorded
//!   from the contract can be added in the same format
//! - Loaders for RON fixture files and TOML game configuration
//!
//! Content is consumed by tooling and tests and never feeds back into
//! `survivor-core` state.

pub mod fixtures;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use fixtures::{FixtureMismatch, FixtureReport, FixtureSet, MarketFixture};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, FixtureLoader, LoadResult};
