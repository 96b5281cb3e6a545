//! # Bowling Records
//! Raw JSON shape and the typed `BowlingSpell` — one bowler's spell in one
//! match, at match-level granularity.
//!
//! Situational pressure flags arrive pre-tagged upstream inside the
//! `pressure_context` mapping; the spell only exposes them through read-only
//! accessors. Economy may be supplied or derived from runs and overs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::innings::MatchResult;

/// One bowling spell as it arrives on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawBowlingRecord {
    pub bowler_name: String,
    pub team: String,
    pub overs: f64,
    #[serde(default)]
    pub maidens: u32,
    pub runs_conceded: u32,
    pub wickets: u32,
    #[serde(default)]
    pub economy: Option<f64>,
    pub opposition: String,
    pub opposition_tier: String,
    pub result: String,
    pub knockout: bool,
    #[serde(default)]
    pub bowling_phase: HashMap<String, f64>,
    #[serde(default)]
    pub pressure_context: HashMap<String, bool>,
}

impl RawBowlingRecord {
    /// Resolve into the immutable scoring record. Economy falls back to
    /// runs-per-over when not supplied (0 for an empty spell).
    pub fn spell(&self) -> BowlingSpell {
        let economy = self.economy.unwrap_or_else(|| {
            if self.overs > 0.0 {
                self.runs_conceded as f64 / self.overs
            } else {
                0.0
            }
        });
        BowlingSpell {
            bowler_name: self.bowler_name.clone(),
            team: self.team.clone(),
            overs: self.overs,
            maidens: self.maidens,
            runs_conceded: self.runs_conceded,
            wickets: self.wickets,
            economy,
            opposition: self.opposition.clone(),
            opposition_tier: self.opposition_tier.clone(),
            result: MatchResult::parse(&self.result),
            knockout: self.knockout,
            bowling_phase: self.bowling_phase.clone(),
            pressure_context: self.pressure_context.clone(),
        }
    }
}

/// One bowling spell, fully resolved and immutable.
#[derive(Debug, Clone, PartialEq)]
pub struct BowlingSpell {
    pub bowler_name: String,
    pub team: String,

    pub overs: f64,
    pub maidens: u32,
    pub runs_conceded: u32,
    pub wickets: u32,
    pub economy: f64,

    pub opposition: String,
    pub opposition_tier: String,

    pub result: MatchResult,
    pub knockout: bool,

    /// Fraction of the spell bowled in each phase (e.g. powerplay/death).
    pub bowling_phase: HashMap<String, f64>,
    /// Pre-tagged situational flags (e.g. "match_pressure").
    pub pressure_context: HashMap<String, bool>,
}

impl BowlingSpell {
    fn context_flag(&self, key: &str) -> bool {
        self.pressure_context.get(key).copied().unwrap_or(false)
    }

    /// Whether this spell counts as a pressure situation.
    pub fn is_pressure_spell(&self) -> bool {
        self.context_flag("match_pressure")
    }

    pub fn bowled_in_powerplay(&self) -> bool {
        self.context_flag("bowled_in_powerplay")
    }

    pub fn bowled_in_death(&self) -> bool {
        self.context_flag("bowled_in_death")
    }

    pub fn defending_target(&self) -> bool {
        self.context_flag("defending_target")
    }

    pub fn is_vs_tier_a(&self) -> bool {
        self.opposition_tier.trim().eq_ignore_ascii_case("A")
    }

    pub fn wickets_per_over(&self) -> f64 {
        if self.overs == 0.0 {
            return 0.0;
        }
        crate::normalize::round2(self.wickets as f64 / self.overs)
    }

    pub fn runs_per_over(&self) -> f64 {
        if self.overs == 0.0 {
            return 0.0;
        }
        crate::normalize::round2(self.runs_conceded as f64 / self.overs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(json: &str) -> RawBowlingRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn context_mappings_default_to_empty() {
        let r = raw(
            r#"{"bowler_name":"N Jagadeesan","team":"Tamil Nadu","overs":4.0,
                "runs_conceded":28,"wickets":1,"economy":7.0,
                "opposition":"Punjab","opposition_tier":"B",
                "result":"Win","knockout":false}"#,
        );
        assert!(r.bowling_phase.is_empty());
        assert!(r.pressure_context.is_empty());
        assert_eq!(r.maidens, 0);
        assert!(!r.spell().is_pressure_spell());
    }

    #[test]
    fn economy_is_derived_when_absent() {
        let r = raw(
            r#"{"bowler_name":"X","team":"T","overs":4.0,"runs_conceded":30,
                "wickets":0,"opposition":"O","opposition_tier":"C",
                "result":"Loss","knockout":false}"#,
        );
        assert!((r.spell().economy - 7.5).abs() < 1e-9);
    }

    #[test]
    fn empty_spell_rates_are_zero() {
        let r = raw(
            r#"{"bowler_name":"X","team":"T","overs":0.0,"runs_conceded":0,
                "wickets":0,"opposition":"O","opposition_tier":"B",
                "result":"Loss","knockout":false}"#,
        );
        let s = r.spell();
        assert_eq!(s.economy, 0.0);
        assert_eq!(s.wickets_per_over(), 0.0);
        assert_eq!(s.runs_per_over(), 0.0);
    }

    #[test]
    fn derived_flags_read_from_context() {
        let r = raw(
            r#"{"bowler_name":"X","team":"T","overs":4.0,"runs_conceded":24,
                "wickets":2,"economy":6.0,"opposition":"O","opposition_tier":"A",
                "result":"Win","knockout":true,
                "pressure_context":{"match_pressure":true,"bowled_in_death":true}}"#,
        );
        let s = r.spell();
        assert!(s.is_pressure_spell());
        assert!(s.bowled_in_death());
        assert!(!s.bowled_in_powerplay());
        assert!(!s.defending_target());
        assert!((s.wickets_per_over() - 0.5).abs() < 1e-9);
    }
}
