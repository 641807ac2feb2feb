//! Market fixture loader.

use std::path::Path;

use crate::fixtures::{FixtureReport, FixtureSet};
use crate::loaders::{LoadResult, read_file};

/// Loader for market fixtures from RON files.
///
/// # Format
///
/// ```ron
/// (
///     fixtures: [
///         (label: "small seed", seed: "12345", count: 5, ids: [23, 69, 14, 60, 5]),
///     ],
/// )
/// ```
pub struct FixtureLoader;

impl FixtureLoader {
    pub fn load(path: &Path) -> LoadResult<FixtureSet> {
        let content = read_file(path)?;
        let set = Self::parse(&content)?;

        tracing::debug!(
            path = %path.display(),
            count = set.fixtures.len(),
            "loaded market fixtures"
        );
        Ok(set)
    }

    pub fn parse(content: &str) -> LoadResult<FixtureSet> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse fixtures RON: {}", e))
    }

    /// Serialize a fixture set back to RON, e.g. after capturing new fixtures.
    pub fn to_ron(set: &FixtureSet) -> LoadResult<String> {
        ron::ser::to_string_pretty(set, ron::ser::PrettyConfig::default())
            .map_err(|e| anyhow::anyhow!("Failed to serialize fixtures RON: {}", e))
    }

    /// Load and verify every fixture in `path`, logging each mismatch.
    pub fn verify_file(path: &Path) -> LoadResult<FixtureReport> {
        let report = Self::load(path)?.verify();

        for mismatch in &report.mismatches {
            tracing::warn!(
                label = %mismatch.label,
                seed = %mismatch.seed,
                expected = ?mismatch.expected,
                actual = ?mismatch.actual,
                "market fixture mismatch"
            );
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::MarketFixture;
    use survivor_core::U256;

    const SAMPLE: &str = r#"(
        fixtures: [
            (label: "seed one", seed: "1", count: 5, ids: [1, 3, 5, 7, 9]),
            (seed: "12345", count: 5, ids: [23, 69, 14, 60, 5]),
            (label: "hex seed", seed: "0x9f3a61c0de5b7e2241aa0b83cc91d4e7", count: 5, ids: [93, 56, 19, 83, 46]),
        ],
    )"#;

    #[test]
    fn parses_decimal_and_hex_seeds() {
        let set = FixtureLoader::parse(SAMPLE).unwrap();
        assert_eq!(set.fixtures.len(), 3);
        assert_eq!(set.fixtures[0].seed, U256::from(1u64));
        assert_eq!(set.fixtures[1].label, "");
        assert!(set.verify().is_clean());
    }

    #[test]
    fn rejects_malformed_seed() {
        let bad = r#"(fixtures: [(seed: "not-a-number", count: 1, ids: [1])])"#;
        let err = FixtureLoader::parse(bad).unwrap_err();
        assert!(err.to_string().contains("Failed to parse fixtures RON"));
    }

    #[test]
    fn captured_fixtures_survive_a_file_round_trip() {
        let set = FixtureSet {
            fixtures: vec![
                MarketFixture::capture("a", U256::from(31337u64), 20),
                MarketFixture::capture("b", U256::MAX, 20),
            ],
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixtures.ron");
        std::fs::write(&path, FixtureLoader::to_ron(&set).unwrap()).unwrap();

        let report = FixtureLoader::verify_file(&path).unwrap();
        assert_eq!(report.passed, 2);
        assert!(report.is_clean());
    }

    #[test]
    fn verify_file_reports_drift() {
        let drifted = r#"(fixtures: [(label: "drift", seed: "1", count: 3, ids: [1, 2, 3])])"#;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drift.ron");
        std::fs::write(&path, drifted).unwrap();

        let report = FixtureLoader::verify_file(&path).unwrap();
        assert_eq!(report.mismatches.len(), 1);
        assert_eq!(report.mismatches[0].actual, vec![1, 3, 5]);
    }
}
