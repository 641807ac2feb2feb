//! Content factory for loading data files from a directory.

use std::path::{Path, PathBuf};

use survivor_core::GameConfig;

use crate::fixtures::FixtureSet;
use crate::loaders::{ConfigLoader, FixtureLoader, LoadResult};

/// Content factory that loads content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml            (optional)
/// └── market_fixtures.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const FIXTURES_FILE: &'static str = "market_fixtures.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load game configuration from `config.toml`, or defaults if the file is absent.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        ConfigLoader::load_or_default(path.exists().then_some(path.as_path()))
    }

    /// Load market fixtures from `market_fixtures.ron`.
    pub fn load_fixtures(&self) -> LoadResult<FixtureSet> {
        let path = self.data_dir.join(Self::FIXTURES_FILE);
        FixtureLoader::load(&path)
    }
}
