//! Bowling sub-scores: base skill, consistency, opposition quality and
//! pressure.
//!
//! Each computer starts from a neutral 50 and applies banded adjustments, so
//! a bowler with thin evidence is judged gently: when the sample is below a
//! component-specific threshold the score is pulled toward 50 by blending
//! `score * 0.7 + 50 * 0.3`. Empty inputs take documented neutral fallbacks
//! instead of propagating an error. Bands are T20 benchmarks.

use once_cell::sync::Lazy;

use crate::normalize::{clamp, population_std_dev, round2};
use crate::rules::bowling::tag_bowling_pressure;
use crate::spell::BowlingSpell;
use crate::tier_weights::TierWeightsConfig;

static BOWLING_TIER_WEIGHTS: Lazy<TierWeightsConfig> = Lazy::new(TierWeightsConfig::bowling_seed);

/// Neutral midpoint every adjustment starts from and dampening pulls toward.
const NEUTRAL: f64 = 50.0;
/// Share of the raw score retained when dampening; the rest is neutral.
const DAMPEN_RETAIN: f64 = 0.7;

/// Pull `score` toward the neutral midpoint when the sample is too small.
fn dampen(score: f64, samples: usize, min_samples: usize) -> f64 {
    if samples < min_samples {
        score * DAMPEN_RETAIN + NEUTRAL * (1.0 - DAMPEN_RETAIN)
    } else {
        score
    }
}

/// Base Bowling Skill Score (0–100). No spells scores a neutral-low 40.
///
/// Rewards control (aggregate economy) and wicket efficiency per match,
/// without punishing bowlers who bowl fewer overs.
pub fn compute_base_bowling_skill_score(spells: &[BowlingSpell]) -> f64 {
    if spells.is_empty() {
        return 40.0;
    }

    let total_overs: f64 = spells.iter().map(|s| s.overs).sum();
    let total_runs: u32 = spells.iter().map(|s| s.runs_conceded).sum();
    let total_wickets: u32 = spells.iter().map(|s| s.wickets).sum();
    let matches = spells.len();

    let avg_economy = if total_overs > 0.0 {
        total_runs as f64 / total_overs
    } else {
        10.0 // neutral fallback for an all-zero-over sample
    };
    let wickets_per_match = total_wickets as f64 / matches as f64;

    let mut score = NEUTRAL;

    // Economy impact.
    score += if avg_economy <= 6.5 {
        20.0
    } else if avg_economy <= 7.5 {
        12.0
    } else if avg_economy <= 8.5 {
        5.0
    } else if avg_economy <= 9.5 {
        -5.0
    } else {
        -15.0
    };

    // Wicket-taking impact.
    score += if wickets_per_match >= 2.0 {
        15.0
    } else if wickets_per_match >= 1.0 {
        8.0
    } else if wickets_per_match >= 0.5 {
        2.0
    } else {
        -5.0
    };

    score = dampen(score, matches, 3);

    round2(clamp(score, 0.0, 100.0))
}

/// Consistency Score for bowling (0–100). Fewer than two spells is not
/// enough data to judge, and scores a flat 45.
///
/// Low spread in economy means repeatable control; wicket spread adds a
/// small stability bonus or penalty on top.
pub fn compute_consistency_bowling_score(spells: &[BowlingSpell]) -> f64 {
    let matches = spells.len();
    if matches < 2 {
        return 45.0;
    }

    let economies: Vec<f64> = spells.iter().map(|s| s.economy).collect();
    let econ_std = population_std_dev(&economies);

    let mut score = NEUTRAL;

    // Variance impact.
    score += if econ_std <= 0.75 {
        25.0
    } else if econ_std <= 1.25 {
        15.0
    } else if econ_std <= 2.0 {
        5.0
    } else if econ_std <= 3.0 {
        -10.0
    } else {
        -20.0
    };

    // Wicket stability.
    let wicket_counts: Vec<f64> = spells.iter().map(|s| s.wickets as f64).collect();
    let wicket_std = population_std_dev(&wicket_counts);
    if wicket_std <= 0.5 {
        score += 5.0;
    } else if wicket_std >= 1.5 {
        score -= 5.0;
    }

    score = dampen(score, matches, 4);

    round2(clamp(score, 0.0, 100.0))
}

/// Opposition Quality Score for bowling (0–100), calibrated bowling tiers.
/// No spells scores 45.
pub fn compute_opposition_quality_bowling_score(spells: &[BowlingSpell]) -> f64 {
    compute_opposition_quality_bowling_score_with_weights(spells, &BOWLING_TIER_WEIGHTS)
}

/// Same scorer with an explicit tier table (e.g. loaded from config).
///
/// Each spell is banded on its own economy and wickets, clamped, then the
/// per-spell scores are averaged under tier weights so performances against
/// Tier-A sides matter more. Avoids stat-padding against weak opposition.
pub fn compute_opposition_quality_bowling_score_with_weights(
    spells: &[BowlingSpell],
    tiers: &TierWeightsConfig,
) -> f64 {
    if spells.is_empty() {
        return 45.0;
    }

    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;

    for spell in spells {
        let weight = tiers.weight_for(&spell.opposition_tier);

        let mut score = NEUTRAL;

        // Economy impact.
        score += if spell.economy <= 7.0 {
            15.0
        } else if spell.economy <= 8.0 {
            8.0
        } else if spell.economy <= 9.0 {
            -5.0
        } else {
            -12.0
        };

        // Wicket impact.
        score += if spell.wickets >= 2 {
            12.0
        } else if spell.wickets == 1 {
            6.0
        } else {
            -4.0
        };

        weighted_sum += clamp(score, 0.0, 100.0) * weight;
        total_weight += weight;
    }

    if total_weight == 0.0 {
        return 45.0;
    }

    let final_score = dampen(weighted_sum / total_weight, spells.len(), 3);

    round2(final_score)
}

/// Pressure Bowling Score (0–100). Only pressure spells are judged; with
/// none tagged the score is a neutral-low 40.
///
/// Bowling well in losses still counts: the bands reward control and
/// wickets under pressure, with flat bonuses for the tougher phases. The
/// pressure economy bands judge a single spell, not an aggregate, and are
/// calibrated separately from the base-skill bands.
pub fn compute_pressure_bowling_score(spells: &[BowlingSpell]) -> f64 {
    let pressure_spells: Vec<&BowlingSpell> =
        spells.iter().filter(|s| s.is_pressure_spell()).collect();

    if pressure_spells.is_empty() {
        return 40.0;
    }

    let mut scores = Vec::with_capacity(pressure_spells.len());

    for spell in &pressure_spells {
        let tags = tag_bowling_pressure(spell);

        let mut spell_score = NEUTRAL;

        // Economy under pressure (ideal T20 economy under pressure ~ 7.5).
        spell_score += if spell.economy <= 7.5 {
            15.0
        } else if spell.economy <= 8.5 {
            5.0
        } else if spell.economy <= 9.5 {
            -5.0
        } else {
            -15.0
        };

        // Wickets under pressure.
        spell_score += if spell.wickets >= 2 {
            15.0
        } else if spell.wickets == 1 {
            7.0
        } else {
            -5.0
        };

        // Phase bonuses.
        if tags.powerplay_pressure {
            spell_score += 5.0;
        }
        if tags.death_pressure {
            spell_score += 10.0;
        }
        if tags.quality_opposition_pressure {
            spell_score += 5.0;
        }
        if tags.knockout_pressure {
            spell_score += 5.0;
        }

        scores.push(clamp(spell_score, 0.0, 100.0));
    }

    let avg_score = scores.iter().sum::<f64>() / scores.len() as f64;

    round2(dampen(avg_score, scores.len(), 3))
}
