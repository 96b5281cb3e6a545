//! # Tier Weights
//!
//! Configurable mapping from opposition-strength tiers ("A" strongest
//! through "C" weakest) to the multipliers the opposition-quality scorers
//! apply per innings/spell.
//!
//! - Loads from JSON config (default weight + per-tier weights).
//! - Case-insensitive lookup with whitespace trimming.
//! - Unknown tiers take the explicit default weight, never an error.
//! - Built-in seeds carry the calibrated batting and bowling tables.

use serde::Deserialize;
use std::{collections::HashMap, fs, path::Path};

/// Tier weight table, loaded from JSON or seeded with defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct TierWeightsConfig {
    /// Weight applied when the tier is not in the table.
    pub default_weight: f64,
    /// Explicit weights keyed by upper-case tier name.
    #[serde(default)]
    pub weights: HashMap<String, f64>,
}

impl TierWeightsConfig {
    /// Load configuration from a JSON file.
    /// Falls back to the given seed on error.
    pub fn load_from_file_or<P: AsRef<Path>>(path: P, seed: fn() -> Self) -> Self {
        match fs::read_to_string(path) {
            Ok(s) => serde_json::from_str(&s).unwrap_or_else(|_| seed()),
            Err(_) => seed(),
        }
    }

    /// Get the weight for a tier. Lookup is trimmed and case-insensitive;
    /// unknown tiers take the default weight.
    pub fn weight_for(&self, tier: &str) -> f64 {
        let t = tier.trim().to_ascii_uppercase();
        match self.weights.get(&t) {
            Some(&w) => w,
            None => self.default_weight,
        }
    }

    /// Calibrated batting table: elite opposition dominates, weak opposition
    /// contributes little. Unknown tiers count as weak.
    pub fn batting_seed() -> Self {
        let mut weights = HashMap::new();
        for (k, v) in [("A", 1.0), ("B", 0.6), ("C", 0.3)] {
            weights.insert(k.to_string(), v);
        }
        Self {
            default_weight: 0.3,
            weights,
        }
    }

    /// Calibrated bowling table: a gentler spread around 1.0, since per-spell
    /// scores are already banded before weighting.
    pub fn bowling_seed() -> Self {
        let mut weights = HashMap::new();
        for (k, v) in [("A", 1.2), ("B", 1.0), ("C", 0.8)] {
            weights.insert(k.to_string(), v);
        }
        Self {
            default_weight: 1.0,
            weights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batting_seed_lookup() {
        let c = TierWeightsConfig::batting_seed();
        assert!((c.weight_for("A") - 1.0).abs() < 1e-9);
        assert!((c.weight_for("B") - 0.6).abs() < 1e-9);
        assert!((c.weight_for("C") - 0.3).abs() < 1e-9);
    }

    #[test]
    fn bowling_seed_lookup() {
        let c = TierWeightsConfig::bowling_seed();
        assert!((c.weight_for("A") - 1.2).abs() < 1e-9);
        assert!((c.weight_for("C") - 0.8).abs() < 1e-9);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let c = TierWeightsConfig::batting_seed();
        assert_eq!(c.weight_for("a"), c.weight_for("A"));
        assert_eq!(c.weight_for(" b "), c.weight_for("B"));
    }

    #[test]
    fn unknown_tier_takes_default() {
        let b = TierWeightsConfig::batting_seed();
        assert!((b.weight_for("D") - 0.3).abs() < 1e-9);
        let w = TierWeightsConfig::bowling_seed();
        assert!((w.weight_for("International") - 1.0).abs() < 1e-9);
    }

    #[test]
    fn file_load_falls_back_to_seed() {
        let c = TierWeightsConfig::load_from_file_or(
            "definitely/not/a/file.json",
            TierWeightsConfig::bowling_seed,
        );
        assert!((c.weight_for("A") - 1.2).abs() < 1e-9);
    }

    #[test]
    fn file_shape_parses() {
        let c: TierWeightsConfig =
            serde_json::from_str(r#"{"default_weight":0.5,"weights":{"A":1.5}}"#).unwrap();
        assert!((c.weight_for("a") - 1.5).abs() < 1e-9);
        assert!((c.weight_for("B") - 0.5).abs() < 1e-9);
    }
}
