//! Game configuration loader.

use std::path::Path;

use survivor_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
///
/// Every field is optional in the file; missing fields keep the contract defaults.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing GameConfig
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)?;

        tracing::debug!(path = %path.display(), ?config, "loaded game config");
        Ok(config)
    }

    /// Load from `path` if given, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> LoadResult<GameConfig> {
        match path {
            Some(path) => Self::load(path),
            None => {
                tracing::debug!("no config file, using defaults");
                Ok(GameConfig::default())
            }
        }
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = ConfigLoader::parse("market_size = 25\ncharisma_item_discount = 2\n").unwrap();
        assert_eq!(config.market_size, 25);
        assert_eq!(config.charisma_item_discount, 2);
        assert_eq!(config.tier_price_multiplier, GameConfig::DEFAULT_TIER_PRICE_MULTIPLIER);
        assert_eq!(config.max_adventurer_health, GameConfig::DEFAULT_MAX_ADVENTURER_HEALTH);
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(ConfigLoader::parse("").unwrap(), GameConfig::default());
    }

    #[test]
    fn rejects_wrong_types() {
        let err = ConfigLoader::parse("market_size = \"twenty\"").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "starting_health = 150").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.starting_health, 150);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConfigLoader::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn no_path_means_defaults() {
        assert_eq!(ConfigLoader::load_or_default(None).unwrap(), GameConfig::default());
    }
}
