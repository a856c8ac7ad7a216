//! Ordered threshold lookup for narrative comparisons
//!
//! A table is a list of `(upper_bound, message)` tiers checked in ascending
//! order. The first tier whose upper bound is strictly greater than the level
//! wins; levels past the last tier get the fallback message.

use serde::{Deserialize, Serialize};

use crate::error::{DecibelError, Result};

/// Built-in cosmic comparison tiers (exclusive upper bound in dB, message)
pub const COSMIC_TIERS: [(f64, &str); 6] = [
    (200.0, "Still within the realm of physical possibility"),
    (300.0, "Energy equivalent to detonating thousands of nuclear bombs per second"),
    (500.0, "Energy output of a supernova explosion - could destroy solar systems"),
    (1000.0, "Energy equivalent to the Big Bang - universe-creating levels"),
    (2000.0, "Energy to annihilate entire galaxies worth of matter"),
    (5000.0, "Energy density exceeding black hole event horizons"),
];

/// Message for levels at or past the last cosmic tier
pub const COSMIC_FALLBACK: &str = "Energy levels that transcend our understanding of physics";

/// Cosmic comparison for a decibel level using the built-in tiers
pub fn cosmic_comparison(decibel: f64) -> &'static str {
    COSMIC_TIERS
        .iter()
        .find(|(upper_bound, _)| decibel < *upper_bound)
        .map(|(_, message)| *message)
        .unwrap_or(COSMIC_FALLBACK)
}

/// One tier of a comparison table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonTier {
    /// Exclusive upper bound in dB
    pub upper_bound: f64,
    pub message: String,
}

/// Configurable ordered lookup table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonTable {
    tiers: Vec<ComparisonTier>,
    fallback: String,
}

impl ComparisonTable {
    /// Build a table, rejecting non-finite or non-increasing bounds
    pub fn new(tiers: Vec<ComparisonTier>, fallback: impl Into<String>) -> Result<Self> {
        let table = Self {
            tiers,
            fallback: fallback.into(),
        };
        table.validate()?;
        Ok(table)
    }

    /// Table holding the built-in cosmic tiers
    pub fn cosmic() -> Self {
        Self {
            tiers: COSMIC_TIERS
                .iter()
                .map(|(upper_bound, message)| ComparisonTier {
                    upper_bound: *upper_bound,
                    message: message.to_string(),
                })
                .collect(),
            fallback: COSMIC_FALLBACK.to_string(),
        }
    }

    /// Check bound ordering; needed after deserializing a table
    pub fn validate(&self) -> Result<()> {
        for (index, tier) in self.tiers.iter().enumerate() {
            if !tier.upper_bound.is_finite() {
                return Err(DecibelError::InvalidComparisonTable {
                    reason: format!("tier {} has non-finite bound {}", index, tier.upper_bound),
                });
            }
            if index > 0 && tier.upper_bound <= self.tiers[index - 1].upper_bound {
                return Err(DecibelError::InvalidComparisonTable {
                    reason: format!(
                        "tier {} bound {} does not exceed previous bound {}",
                        index,
                        tier.upper_bound,
                        self.tiers[index - 1].upper_bound
                    ),
                });
            }
        }
        Ok(())
    }

    /// Message for `decibel`
    pub fn lookup(&self, decibel: f64) -> &str {
        self.tiers
            .iter()
            .find(|tier| decibel < tier.upper_bound)
            .map(|tier| tier.message.as_str())
            .unwrap_or(self.fallback.as_str())
    }

    pub fn tiers(&self) -> &[ComparisonTier] {
        &self.tiers
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

impl Default for ComparisonTable {
    fn default() -> Self {
        Self::cosmic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cosmic_tier_boundaries() {
        assert_eq!(cosmic_comparison(0.0), COSMIC_TIERS[0].1);
        assert_eq!(cosmic_comparison(199.9), COSMIC_TIERS[0].1);
        assert_eq!(cosmic_comparison(200.0), COSMIC_TIERS[1].1);
        assert_eq!(cosmic_comparison(499.0), COSMIC_TIERS[2].1);
        assert_eq!(cosmic_comparison(500.0), COSMIC_TIERS[3].1);
        assert_eq!(cosmic_comparison(1000.0), COSMIC_TIERS[4].1);
        assert_eq!(cosmic_comparison(4999.0), COSMIC_TIERS[5].1);
        assert_eq!(cosmic_comparison(5000.0), COSMIC_FALLBACK);
        assert_eq!(cosmic_comparison(1e9), COSMIC_FALLBACK);
    }

    #[test]
    fn test_table_matches_function() {
        let table = ComparisonTable::cosmic();
        for db in [-10.0, 150.0, 250.0, 400.0, 750.0, 1500.0, 3000.0, 9000.0] {
            assert_eq!(table.lookup(db), cosmic_comparison(db));
        }
    }

    #[test]
    fn test_custom_table() {
        let table = ComparisonTable::new(
            vec![
                ComparisonTier {
                    upper_bound: 10.0,
                    message: "low".to_string(),
                },
                ComparisonTier {
                    upper_bound: 20.0,
                    message: "mid".to_string(),
                },
            ],
            "high",
        )
        .unwrap();

        assert_eq!(table.lookup(9.0), "low");
        assert_eq!(table.lookup(10.0), "mid");
        assert_eq!(table.lookup(20.0), "high");
    }

    #[test]
    fn test_empty_table_uses_fallback() {
        let table = ComparisonTable::new(Vec::new(), "always").unwrap();
        assert_eq!(table.lookup(123.0), "always");
    }

    #[test]
    fn test_rejects_unordered_tiers() {
        let result = ComparisonTable::new(
            vec![
                ComparisonTier {
                    upper_bound: 20.0,
                    message: "a".to_string(),
                },
                ComparisonTier {
                    upper_bound: 20.0,
                    message: "b".to_string(),
                },
            ],
            "c",
        );
        assert!(matches!(result, Err(DecibelError::InvalidComparisonTable { .. })));
    }

    #[test]
    fn test_rejects_non_finite_bound() {
        let result = ComparisonTable::new(
            vec![ComparisonTier {
                upper_bound: f64::INFINITY,
                message: "a".to_string(),
            }],
            "b",
        );
        assert!(result.is_err());
    }
}
