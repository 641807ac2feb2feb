//! Market fixtures.
//!
//! A fixture records the ids a market held for a seed. Replaying it through
//! [`survivor_core::market_item_ids`] flags any change to the selection. The
//! bundled set is a snapshot of this crate's own output; fixtures recorded
//! from the contract use the same format.

use survivor_core::{U256, market_item_ids};

/// A recorded market: the seed, how many items were drawn and which ids came out.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketFixture {
    /// Free-form description shown in reports.
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: String,
    /// Decimal or `0x`-prefixed hex in files.
    #[cfg_attr(feature = "serde", serde(with = "seed_string"))]
    pub seed: U256,
    pub count: usize,
    pub ids: Vec<u8>,
}

#[cfg(feature = "serde")]
mod seed_string {
    use core::str::FromStr;

    use serde::{Deserialize, Deserializer, Serializer, de::Error};
    use survivor_core::U256;

    pub fn serialize<S: Serializer>(seed: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{seed:x}"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        let raw = String::deserialize(deserializer)?;
        U256::from_str(raw.trim())
            .map_err(|e| D::Error::custom(format!("invalid seed {raw:?}: {e}")))
    }
}

/// A file's worth of fixtures.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixtureSet {
    pub fixtures: Vec<MarketFixture>,
}

/// A fixture whose replay did not reproduce the recorded ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixtureMismatch {
    pub label: String,
    pub seed: U256,
    pub expected: Vec<u8>,
    pub actual: Vec<u8>,
}

impl MarketFixture {
    pub fn new(label: impl Into<String>, seed: U256, ids: Vec<u8>) -> Self {
        Self {
            label: label.into(),
            seed,
            count: ids.len(),
            ids,
        }
    }

    /// Record the current selection for `seed` as a fixture.
    pub fn capture(label: impl Into<String>, seed: U256, count: usize) -> Self {
        Self::new(label, seed, market_item_ids(seed, count))
    }

    /// Replay the fixture. Returns the mismatch if the ids differ.
    pub fn verify(&self) -> Result<(), FixtureMismatch> {
        let actual = market_item_ids(self.seed, self.count);
        if actual == self.ids {
            Ok(())
        } else {
            Err(FixtureMismatch {
                label: self.label.clone(),
                seed: self.seed,
                expected: self.ids.clone(),
                actual,
            })
        }
    }
}

/// Outcome of verifying a [`FixtureSet`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FixtureReport {
    pub passed: usize,
    pub mismatches: Vec<FixtureMismatch>,
}

impl FixtureReport {
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }

    pub fn total(&self) -> usize {
        self.passed + self.mismatches.len()
    }
}

impl FixtureSet {
    pub fn verify(&self) -> FixtureReport {
        let mut report = FixtureReport::default();
        for fixture in &self.fixtures {
            match fixture.verify() {
                Ok(()) => report.passed += 1,
                Err(mismatch) => report.mismatches.push(mismatch),
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captured_fixture_verifies() {
        let fixture = MarketFixture::capture("captured", U256::from(424242u64), 20);
        assert_eq!(fixture.count, 20);
        assert!(fixture.verify().is_ok());
    }

    #[test]
    fn known_fixture_matches() {
        let fixture = MarketFixture::new("small", U256::from(12345u64), vec![23, 69, 14, 60, 5]);
        assert_eq!(fixture.verify(), Ok(()));
    }

    #[test]
    fn tampered_fixture_reports_mismatch() {
        let mut fixture = MarketFixture::capture("tampered", U256::from(7u64), 3);
        fixture.ids[1] = fixture.ids[1] % 101 + 1;

        let mismatch = fixture.verify().unwrap_err();
        assert_eq!(mismatch.label, "tampered");
        assert_ne!(mismatch.expected, mismatch.actual);
    }

    #[test]
    fn report_counts_outcomes() {
        let good = MarketFixture::capture("good", U256::from(99u64), 4);
        let mut bad = good.clone();
        bad.label = "bad".into();
        bad.ids.reverse();

        let set = FixtureSet {
            fixtures: vec![good, bad],
        };
        let report = set.verify();
        assert_eq!(report.passed, 1);
        assert_eq!(report.total(), 2);
        assert!(!report.is_clean());
        assert_eq!(report.mismatches[0].label, "bad");
    }

    #[test]
    fn zero_seed_fixture_is_empty() {
        let fixture = MarketFixture::new("no market yet", U256::ZERO, Vec::new());
        assert!(fixture.verify().is_ok());
    }
}
