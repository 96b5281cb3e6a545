//! # Composite Scoring Engine
//! Pure, testable logic that maps a flat collection of raw match records to
//! the ranked `PlayerAggregate` list. No I/O, suitable for unit tests and
//! offline evaluation.
//!
//! Policy: partition by exact player name (first-appearance order), score
//! every player's subset with the four role metrics, blend with the
//! calibrated final weights, then stable-sort descending so score ties keep
//! their grouping order. Players are independent, so the per-player step
//! runs in parallel.

use std::collections::HashMap;

use rayon::prelude::*;
use tracing::debug;

use crate::innings::{Innings, RawBattingRecord};
use crate::metrics;
use crate::normalize::round2;
use crate::player::{PlayerAggregate, PlayerStats, Role};
use crate::spell::{BowlingSpell, RawBowlingRecord};

/// Final composite weights: pressure leads, base skill close behind.
const W_PRESSURE: f64 = 0.35;
const W_BASE_SKILL: f64 = 0.30;
const W_CONSISTENCY: f64 = 0.20;
const W_OPPOSITION: f64 = 0.15;

/// Score and rank a flat collection of raw batting records.
pub fn compute_batting_intelligence(records: &[RawBattingRecord]) -> Vec<PlayerAggregate> {
    // 1) Partition by player, resolving raw rows into typed innings.
    let grouped = group_by_player(
        records,
        |r| &r.player_name,
        |r| &r.team,
        RawBattingRecord::innings,
    );

    // 2) Per-player metrics.
    let mut players: Vec<PlayerAggregate> = grouped
        .par_iter()
        .map(|(name, team, innings)| score_batter(name, team, innings))
        .collect();

    // 3) Rank.
    sort_descending_by_final_score(&mut players);
    players
}

/// Score and rank a flat collection of raw bowling records.
pub fn compute_bowling_intelligence(records: &[RawBowlingRecord]) -> Vec<PlayerAggregate> {
    let grouped = group_by_player(
        records,
        |r| &r.bowler_name,
        |r| &r.team,
        RawBowlingRecord::spell,
    );

    let mut players: Vec<PlayerAggregate> = grouped
        .par_iter()
        .map(|(name, team, spells)| score_bowler(name, team, spells))
        .collect();

    sort_descending_by_final_score(&mut players);
    players
}

/// Partition records by player identity — exact string match, no
/// normalization — preserving first-appearance order. The group's team is
/// the latest one seen for that player.
fn group_by_player<R, T>(
    records: &[R],
    name_of: impl Fn(&R) -> &str,
    team_of: impl Fn(&R) -> &str,
    resolve: impl Fn(&R) -> T,
) -> Vec<(String, String, Vec<T>)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, String, Vec<T>)> = Vec::new();

    for record in records {
        let name = name_of(record);
        let slot = match index.get(name) {
            Some(&i) => i,
            None => {
                index.insert(name.to_string(), groups.len());
                groups.push((name.to_string(), String::new(), Vec::new()));
                groups.len() - 1
            }
        };
        groups[slot].1 = team_of(record).to_string();
        groups[slot].2.push(resolve(record));
    }

    groups
}

fn score_batter(name: &str, team: &str, innings: &[Innings]) -> PlayerAggregate {
    let pressure = metrics::pressure::compute_pressure_score(innings);
    let base_skill = metrics::batting::compute_base_skill_score(innings);
    let consistency = metrics::batting::compute_consistency_score(innings);
    let opposition = metrics::batting::compute_opposition_quality_score(innings);
    let final_score = blend(pressure, base_skill, consistency, opposition);

    debug!(
        player = name,
        pressure, base_skill, consistency, opposition, final_score, "scored batter"
    );

    let matches = innings.len() as u32;
    let total_runs: u32 = innings.iter().map(|i| i.runs).sum();
    let total_balls: u32 = innings.iter().map(|i| i.balls).sum();
    let average = round2(total_runs as f64 / matches as f64);
    let strike_rate = if total_balls > 0 {
        round2((total_runs as f64 / total_balls as f64) * 100.0)
    } else {
        0.0
    };

    PlayerAggregate::new(
        name,
        team,
        Role::Batter,
        PlayerStats::scores_only(pressure, base_skill, consistency, opposition, final_score)
            .with_batting_aggregates(matches, total_runs, average, strike_rate),
    )
}

fn score_bowler(name: &str, team: &str, spells: &[BowlingSpell]) -> PlayerAggregate {
    let pressure = metrics::bowling::compute_pressure_bowling_score(spells);
    let base_skill = metrics::bowling::compute_base_bowling_skill_score(spells);
    let consistency = metrics::bowling::compute_consistency_bowling_score(spells);
    let opposition = metrics::bowling::compute_opposition_quality_bowling_score(spells);
    let final_score = blend(pressure, base_skill, consistency, opposition);

    debug!(
        player = name,
        pressure, base_skill, consistency, opposition, final_score, "scored bowler"
    );

    PlayerAggregate::new(
        name,
        team,
        Role::Bowler,
        PlayerStats::scores_only(pressure, base_skill, consistency, opposition, final_score),
    )
}

fn blend(pressure: f64, base_skill: f64, consistency: f64, opposition: f64) -> f64 {
    round2(
        W_PRESSURE * pressure
            + W_BASE_SKILL * base_skill
            + W_CONSISTENCY * consistency
            + W_OPPOSITION * opposition,
    )
}

/// Stable sort, descending by final score; ties keep grouping order.
fn sort_descending_by_final_score(players: &mut [PlayerAggregate]) {
    players.sort_by(|a, b| {
        b.final_score()
            .partial_cmp(&a.final_score())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
