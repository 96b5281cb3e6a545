//! Batting sub-scores: base skill, consistency and opposition quality.
//!
//! Each computer is a pure reduction over a player's full innings list,
//! clamped to [0, 100] and rounded to 2 decimal places. An empty list scores
//! 0 across the board — no innings, no evidence. Every ratio is guarded:
//! zero dismissals fall back to total runs/balls as a proxy, zero balls give
//! a zero strike rate.

use once_cell::sync::Lazy;

use crate::innings::Innings;
use crate::normalize::{clamp, normalize_linear, population_std_dev, round2};
use crate::tier_weights::TierWeightsConfig;

static BATTING_TIER_WEIGHTS: Lazy<TierWeightsConfig> = Lazy::new(TierWeightsConfig::batting_seed);

/// Base Skill Score (0–100).
///
/// Blends batting average, strike rate, balls-per-dismissal and boundary
/// balance against T20 benchmark bands. Boundary balance is non-linear:
/// balanced scoring (40–55% of runs in boundaries) is ideal, pure boundary
/// dependence and under-aggression both cost.
pub fn compute_base_skill_score(innings: &[Innings]) -> f64 {
    if innings.is_empty() {
        return 0.0;
    }

    let total_runs: u32 = innings.iter().map(|i| i.runs).sum();
    let total_balls: u32 = innings.iter().map(|i| i.balls).sum();
    let dismissals = innings.iter().filter(|i| i.dismissed).count() as u32;

    let fours: u32 = innings.iter().map(|i| i.fours).sum();
    let sixes: u32 = innings.iter().map(|i| i.sixes).sum();

    let batting_avg = if dismissals > 0 {
        total_runs as f64 / dismissals as f64
    } else {
        total_runs as f64
    };
    let strike_rate = if total_balls > 0 {
        (total_runs as f64 / total_balls as f64) * 100.0
    } else {
        0.0
    };
    let balls_per_dismissal = if dismissals > 0 {
        total_balls as f64 / dismissals as f64
    } else {
        total_balls as f64
    };

    let boundary_runs = (fours * 4 + sixes * 6) as f64;
    let boundary_pct = if total_runs > 0 {
        (boundary_runs / total_runs as f64) * 100.0
    } else {
        0.0
    };

    let avg_score = normalize_linear(batting_avg, 20.0, 40.0);
    let sr_score = normalize_linear(strike_rate, 110.0, 150.0);
    let bpd_score = normalize_linear(balls_per_dismissal, 15.0, 30.0);

    // Boundary balance bands: reward the 40–55% sweet spot.
    let boundary_score = if boundary_pct < 40.0 {
        60.0
    } else if boundary_pct <= 55.0 {
        100.0
    } else if boundary_pct <= 65.0 {
        70.0
    } else {
        40.0
    };

    let base_skill =
        0.35 * avg_score + 0.30 * sr_score + 0.20 * bpd_score + 0.15 * boundary_score;

    clamp(round2(base_skill), 0.0, 100.0)
}

/// Consistency Score (0–100).
///
/// Fractions of innings reaching 30 and 50, a variance penalty (population
/// spread of per-innings runs, only judged once ≥3 innings exist) and a
/// recovery term counting bounce-backs from a sub-10 score straight to 30+.
pub fn compute_consistency_score(innings: &[Innings]) -> f64 {
    if innings.is_empty() {
        return 0.0;
    }

    let scores: Vec<f64> = innings.iter().map(|i| i.runs as f64).collect();
    let total = scores.len();

    let contrib_30 = scores.iter().filter(|&&s| s >= 30.0).count() as f64 / total as f64;
    let contrib_50 = scores.iter().filter(|&&s| s >= 50.0).count() as f64 / total as f64;

    let variance_penalty = if total >= 3 {
        // Lower spread scores higher.
        100.0 - normalize_linear(population_std_dev(&scores), 5.0, 35.0)
    } else {
        0.0
    };

    // Failure recovery: consecutive-innings jumps from <10 to >=30.
    let recovery_count = scores
        .windows(2)
        .filter(|w| w[0] < 10.0 && w[1] >= 30.0)
        .count();
    let recovery_score = (recovery_count as f64 / total as f64) * 100.0;

    let consistency = 0.40 * (contrib_30 * 100.0)
        + 0.25 * (contrib_50 * 100.0)
        + 0.20 * variance_penalty
        + 0.15 * recovery_score;

    clamp(round2(consistency), 0.0, 100.0)
}

/// Opposition Quality Score (0–100), using the calibrated batting tier table.
pub fn compute_opposition_quality_score(innings: &[Innings]) -> f64 {
    compute_opposition_quality_score_with_weights(innings, &BATTING_TIER_WEIGHTS)
}

/// Same scorer with an explicit tier table (e.g. loaded from config).
///
/// Every innings is weighted by its opposition tier; the win-impact term is
/// the tier-weighted average restricted to innings the team won.
pub fn compute_opposition_quality_score_with_weights(
    innings: &[Innings],
    tiers: &TierWeightsConfig,
) -> f64 {
    if innings.is_empty() {
        return 0.0;
    }

    let mut weighted_runs = 0.0;
    let mut weighted_balls = 0.0;
    let mut weight_sum = 0.0;

    let mut win_contrib = 0.0;
    let mut win_weight = 0.0;

    for i in innings {
        let weight = tiers.weight_for(&i.opposition_tier);

        weighted_runs += i.runs as f64 * weight;
        weighted_balls += i.balls as f64 * weight;
        weight_sum += weight;

        if i.result.is_win() {
            win_contrib += i.runs as f64 * weight;
            win_weight += weight;
        }
    }

    let avg_vs_quality = if weight_sum > 0.0 {
        weighted_runs / weight_sum
    } else {
        0.0
    };
    let sr_vs_quality = if weighted_balls > 0.0 {
        (weighted_runs / weighted_balls) * 100.0
    } else {
        0.0
    };
    let win_impact = if win_weight > 0.0 {
        win_contrib / win_weight
    } else {
        0.0
    };

    let avg_score = normalize_linear(avg_vs_quality, 20.0, 40.0);
    let sr_score = normalize_linear(sr_vs_quality, 110.0, 150.0);
    let win_score = normalize_linear(win_impact, 15.0, 40.0);

    let opposition_quality = 0.50 * avg_score + 0.30 * win_score + 0.20 * sr_score;

    clamp(round2(opposition_quality), 0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::innings::{MatchFormat, MatchResult};

    fn mk(runs: u32, balls: u32, fours: u32, sixes: u32, dismissed: bool) -> Innings {
        Innings {
            runs,
            balls,
            fours,
            sixes,
            dismissed,
            result: MatchResult::Loss,
            chasing: false,
            knockout: false,
            opposition_tier: "B".into(),
            match_format: MatchFormat::T20,
            team_score_at_entry: 0,
            wickets_at_entry: 0,
            required_run_rate: 0.0,
        }
    }

    #[test]
    fn empty_input_scores_zero() {
        assert_eq!(compute_base_skill_score(&[]), 0.0);
        assert_eq!(compute_consistency_score(&[]), 0.0);
        assert_eq!(compute_opposition_quality_score(&[]), 0.0);
    }

    #[test]
    fn base_skill_with_saturated_bands() {
        // avg 80, SR 160 and bpd 50 all saturate their bands; 50 boundary
        // runs out of 80 is 62.5% and lands in the 70-point band.
        let i = mk(80, 50, 8, 3, true);
        let score = compute_base_skill_score(&[i]);
        assert_eq!(score, 95.5);
    }

    #[test]
    fn base_skill_zero_dismissals_uses_total_proxies() {
        // No dismissals: average falls back to total runs, bpd to total balls.
        let innings = vec![mk(25, 20, 1, 0, false), mk(20, 18, 1, 0, false)];
        // avg proxy 45 -> 100, SR 118.42 -> 21.05, bpd proxy 38 -> 100,
        // boundary pct 17.8 -> 60.
        assert_eq!(compute_base_skill_score(&innings), 70.32);
    }

    #[test]
    fn base_skill_degenerate_zero_balls() {
        let i = mk(0, 0, 0, 0, false);
        let score = compute_base_skill_score(&[i]);
        assert!((0.0..=100.0).contains(&score));
    }

    #[test]
    fn consistency_known_value() {
        let innings = vec![mk(40, 30, 0, 0, true), mk(5, 8, 0, 0, true),
                           mk(35, 28, 0, 0, true), mk(50, 33, 0, 0, true)];
        // 3/4 reach 30, 1/4 reaches 50, population spread 16.77 over [5,35],
        // one sub-10 -> 30+ recovery out of four innings.
        assert_eq!(compute_consistency_score(&innings), 52.15);
    }

    #[test]
    fn consistency_skips_variance_below_three_innings() {
        let innings = vec![mk(40, 30, 0, 0, true), mk(45, 31, 0, 0, true)];
        // 0.40*100 + 0.25*0 + variance contributes nothing + no recoveries.
        assert_eq!(compute_consistency_score(&innings), 40.0);
    }

    #[test]
    fn opposition_quality_known_value() {
        let mut a = mk(40, 25, 0, 0, true);
        a.opposition_tier = "A".into();
        a.result = MatchResult::Win;
        let mut c = mk(10, 10, 0, 0, true);
        c.opposition_tier = "C".into();
        assert_eq!(compute_opposition_quality_score(&[a, c]), 82.69);
    }

    #[test]
    fn opposition_quality_unknown_tier_uses_default_weight() {
        let mut x = mk(30, 20, 0, 0, true);
        x.opposition_tier = "Z".into();
        let mut c = mk(30, 20, 0, 0, true);
        c.opposition_tier = "C".into();
        // Unknown tier weighs the same as the default (0.3 == tier C).
        assert_eq!(
            compute_opposition_quality_score(&[x]),
            compute_opposition_quality_score(&[c])
        );
    }

    #[test]
    fn all_scores_stay_bounded() {
        let monster = vec![mk(200, 40, 20, 15, false); 10];
        for f in [
            compute_base_skill_score,
            compute_consistency_score,
            compute_opposition_quality_score,
        ] {
            let s = f(&monster);
            assert!((0.0..=100.0).contains(&s), "out of bounds: {s}");
        }
    }
}
