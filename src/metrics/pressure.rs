//! Batting pressure score: four situational buckets reduced to one 0–100
//! number.
//!
//! Each bucket (collapse, chase, knockout, quality) summarizes the subset of
//! innings matching its filter as {average, strike rate, balls per
//! dismissal}, one innings counting as one dismissal context. The aggregator
//! is format-agnostic: buckets are normalized to [0,1], weighted, summed and
//! rescaled against a calibrated maximum raw score.

use crate::innings::Innings;
use crate::normalize::{normalize_unit, round2};

/// Calibrated upper bound for the weighted raw sum.
const MAX_REALISTIC_RAW_SCORE: f64 = 75.0;

/// Bucket weights; they sum to the calibrated maximum.
const WEIGHT_COLLAPSE: f64 = 30.0;
const WEIGHT_CHASE: f64 = 25.0;
const WEIGHT_KNOCKOUT: f64 = 25.0;
const WEIGHT_QUALITY: f64 = 20.0;

/// Wickets already down for an innings to land in the collapse bucket.
/// Stricter than the tagging rule's 2-down on purpose: the bucket feeds a
/// score, the tag only flags a situation.
const COLLAPSE_BUCKET_WICKETS_MIN: u32 = 3;

/// {average, strike rate, balls per dismissal} over one bucket's subset.
/// An empty subset summarizes to all zeros and contributes the minimum.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BucketSummary {
    pub average: f64,
    pub strike_rate: f64,
    pub balls_per_dismissal: f64,
}

impl BucketSummary {
    pub fn new(average: f64, strike_rate: f64, balls_per_dismissal: f64) -> Self {
        Self {
            average,
            strike_rate,
            balls_per_dismissal,
        }
    }
}

/// The four situational buckets consumed by the aggregator.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PressureBuckets {
    pub collapse: BucketSummary,
    pub chase: BucketSummary,
    pub knockout: BucketSummary,
    pub quality: BucketSummary,
}

/// Summarize one filtered subset. One innings = one dismissal context.
fn summarize<'a, I>(subset: I) -> BucketSummary
where
    I: IntoIterator<Item = &'a Innings>,
{
    let mut runs = 0u32;
    let mut balls = 0u32;
    let mut count = 0u32;
    for i in subset {
        runs += i.runs;
        balls += i.balls;
        count += 1;
    }
    if count == 0 {
        return BucketSummary::default();
    }
    BucketSummary {
        average: runs as f64 / count as f64,
        strike_rate: if balls > 0 {
            (runs as f64 / balls as f64) * 100.0
        } else {
            0.0
        },
        balls_per_dismissal: balls as f64 / count as f64,
    }
}

/// Partition a player's innings into the four situational buckets.
pub fn build_pressure_buckets(innings: &[Innings]) -> PressureBuckets {
    PressureBuckets {
        collapse: summarize(
            innings
                .iter()
                .filter(|i| i.wickets_at_entry >= COLLAPSE_BUCKET_WICKETS_MIN),
        ),
        chase: summarize(innings.iter().filter(|i| i.chasing)),
        knockout: summarize(innings.iter().filter(|i| i.knockout)),
        quality: summarize(innings.iter().filter(|i| i.is_vs_tier_a())),
    }
}

/// Weighted contribution of one bucket.
fn bucket_score(s: &BucketSummary, weight: f64) -> f64 {
    let avg_score = normalize_unit(s.average, 20.0, 60.0);
    let sr_score = normalize_unit(s.strike_rate, 80.0, 150.0);
    let bpd_score = normalize_unit(s.balls_per_dismissal, 20.0, 80.0);

    let combined = avg_score * 0.4 + sr_score * 0.3 + bpd_score * 0.3;

    combined * weight
}

/// Combine the four buckets into the 0–100 pressure score.
pub fn compute_total_pressure_score(buckets: &PressureBuckets) -> f64 {
    let raw_score = bucket_score(&buckets.collapse, WEIGHT_COLLAPSE)
        + bucket_score(&buckets.chase, WEIGHT_CHASE)
        + bucket_score(&buckets.knockout, WEIGHT_KNOCKOUT)
        + bucket_score(&buckets.quality, WEIGHT_QUALITY);

    // Scale against the calibrated maximum and cap.
    let final_score = (raw_score / MAX_REALISTIC_RAW_SCORE) * 100.0;
    round2(final_score.min(100.0))
}

/// Pressure score straight from a player's innings list.
pub fn compute_pressure_score(innings: &[Innings]) -> f64 {
    compute_total_pressure_score(&build_pressure_buckets(innings))
}
