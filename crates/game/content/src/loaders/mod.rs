//! Content loaders for reading data files.
//!
//! This module provides loaders that convert TOML/RON files into core types:
//! - [`ConfigLoader`]: `GameConfig` from TOML
//! - [`FixtureLoader`]: market fixtures from RON
//! - [`ContentFactory`]: both, from a conventional data directory

pub mod config;
pub mod factory;
pub mod fixtures;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use fixtures::FixtureLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
