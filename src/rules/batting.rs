//! Format-aware, rule-based pressure tags for a single batting innings.
//!
//! Thresholds are calibrated per format: a 2-down entry at 50 is a collapse
//! in a T20 but routine in a Test. All four tags default to false and each
//! rule only ever switches its own tag on.

use serde::Serialize;

use crate::innings::{Innings, MatchFormat};

/// Team score at entry below which a 2-down situation counts as a collapse.
const COLLAPSE_SCORE_TEST: u32 = 120;
const COLLAPSE_SCORE_ODI: u32 = 100;
const COLLAPSE_SCORE_T20: u32 = 60;

/// Minimum wickets already down for collapse pressure.
const COLLAPSE_WICKETS_MIN: u32 = 2;

/// Required run rate at entry from which a chase counts as pressure.
const CHASE_RRR_TEST: f64 = 4.0;
const CHASE_RRR_ODI: f64 = 6.0;
const CHASE_RRR_T20: f64 = 8.0;

/// Fixed-key situational tags for one batting innings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BattingPressureTags {
    pub collapse_pressure: bool,
    pub chase_pressure: bool,
    pub knockout_pressure: bool,
    pub quality_pressure: bool,
}

/// Apply the pressure rules to a single innings.
/// Pure classification — a side-effect-free function of its input.
pub fn tag_pressure(innings: &Innings) -> BattingPressureTags {
    let mut tags = BattingPressureTags::default();

    // 1) Collapse: early wickets with little on the board.
    let collapse_below = match innings.match_format {
        MatchFormat::Test => COLLAPSE_SCORE_TEST,
        MatchFormat::Odi => COLLAPSE_SCORE_ODI,
        MatchFormat::T20 => COLLAPSE_SCORE_T20,
    };
    if innings.wickets_at_entry >= COLLAPSE_WICKETS_MIN
        && innings.team_score_at_entry < collapse_below
    {
        tags.collapse_pressure = true;
    }

    // 2) Chase: batting second against a demanding required rate.
    if innings.chasing {
        let rrr_min = match innings.match_format {
            MatchFormat::Test => CHASE_RRR_TEST,
            MatchFormat::Odi => CHASE_RRR_ODI,
            MatchFormat::T20 => CHASE_RRR_T20,
        };
        if innings.required_run_rate >= rrr_min {
            tags.chase_pressure = true;
        }
    }

    // 3) Knockout match, format-independent.
    if innings.knockout {
        tags.knockout_pressure = true;
    }

    // 4) Elite opposition.
    if innings.is_vs_tier_a() {
        tags.quality_pressure = true;
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::innings::{MatchFormat, MatchResult};

    fn innings(format: MatchFormat) -> Innings {
        Innings {
            runs: 30,
            balls: 25,
            fours: 2,
            sixes: 1,
            dismissed: true,
            result: MatchResult::Loss,
            chasing: false,
            knockout: false,
            opposition_tier: "B".into(),
            match_format: format,
            team_score_at_entry: 0,
            wickets_at_entry: 0,
            required_run_rate: 0.0,
        }
    }

    #[test]
    fn t20_collapse_boundary() {
        let mut i = innings(MatchFormat::T20);
        i.wickets_at_entry = 2;
        i.team_score_at_entry = 50;
        assert!(tag_pressure(&i).collapse_pressure);

        i.team_score_at_entry = 70;
        assert!(!tag_pressure(&i).collapse_pressure);
    }

    #[test]
    fn collapse_needs_two_down() {
        let mut i = innings(MatchFormat::T20);
        i.wickets_at_entry = 1;
        i.team_score_at_entry = 10;
        assert!(!tag_pressure(&i).collapse_pressure);
    }

    #[test]
    fn collapse_thresholds_differ_per_format() {
        let mut odi = innings(MatchFormat::Odi);
        odi.wickets_at_entry = 3;
        odi.team_score_at_entry = 90;
        assert!(tag_pressure(&odi).collapse_pressure);

        let mut test = innings(MatchFormat::Test);
        test.wickets_at_entry = 3;
        test.team_score_at_entry = 90;
        assert!(tag_pressure(&test).collapse_pressure);
        test.team_score_at_entry = 120;
        assert!(!tag_pressure(&test).collapse_pressure);
    }

    #[test]
    fn chase_requires_both_flag_and_rate() {
        let mut i = innings(MatchFormat::T20);
        i.required_run_rate = 9.0;
        assert!(!tag_pressure(&i).chase_pressure, "not chasing");

        i.chasing = true;
        assert!(tag_pressure(&i).chase_pressure);

        i.required_run_rate = 7.9;
        assert!(!tag_pressure(&i).chase_pressure, "rate below T20 threshold");
    }

    #[test]
    fn chase_rate_thresholds_per_format() {
        let mut i = innings(MatchFormat::Odi);
        i.chasing = true;
        i.required_run_rate = 6.0;
        assert!(tag_pressure(&i).chase_pressure);

        let mut t = innings(MatchFormat::Test);
        t.chasing = true;
        t.required_run_rate = 4.0;
        assert!(tag_pressure(&t).chase_pressure);
        t.required_run_rate = 3.9;
        assert!(!tag_pressure(&t).chase_pressure);
    }

    #[test]
    fn knockout_and_quality_are_independent() {
        let mut i = innings(MatchFormat::T20);
        i.knockout = true;
        i.opposition_tier = "a".into();
        let tags = tag_pressure(&i);
        assert!(tags.knockout_pressure);
        assert!(tags.quality_pressure);
        assert!(!tags.collapse_pressure);
        assert!(!tags.chase_pressure);
    }
}
