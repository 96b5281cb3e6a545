//! # Batting Records
//! Raw JSON shape and the typed, immutable `Innings` it resolves into.
//!
//! Optional raw fields carry documented defaults and are resolved exactly
//! once at construction; the typed record never changes afterwards. Only
//! `player_name`, `runs` and `balls` are required — a record missing them
//! fails deserialization and is reported with its file/index context by the
//! ingest layer.

use serde::{Deserialize, Serialize};

/// Match format; thresholds in the pressure rules depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchFormat {
    T20,
    Odi,
    Test,
}

impl MatchFormat {
    /// Case-insensitive parse. Unknown formats fall back to T20, the
    /// format all current data sets are recorded in.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "TEST" => MatchFormat::Test,
            "ODI" => MatchFormat::Odi,
            _ => MatchFormat::T20,
        }
    }
}

/// Match outcome from the player's perspective.
/// Anything that is not an exact `"Win"` counts as a loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Win,
    Loss,
}

impl MatchResult {
    pub fn parse(s: &str) -> Self {
        if s == "Win" {
            MatchResult::Win
        } else {
            MatchResult::Loss
        }
    }

    pub fn is_win(self) -> bool {
        matches!(self, MatchResult::Win)
    }
}

/// One player's batting performance in one match, as it arrives on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawBattingRecord {
    pub player_name: String,
    pub runs: u32,
    pub balls: u32,
    #[serde(default)]
    pub fours: u32,
    #[serde(default)]
    pub sixes: u32,
    #[serde(default = "default_dismissed")]
    pub dismissed: bool,
    #[serde(default = "default_result")]
    pub result: String,
    #[serde(default)]
    pub chasing: bool,
    #[serde(default)]
    pub knockout: bool,
    #[serde(default = "default_tier")]
    pub opposition_tier: String,
    #[serde(default = "default_format")]
    pub match_format: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub team_runs: u32,
    #[serde(default)]
    pub team_wickets: u32,
    #[serde(default)]
    pub required_run_rate: f64,
}

fn default_dismissed() -> bool {
    true
}
fn default_result() -> String {
    "Loss".to_string()
}
fn default_tier() -> String {
    "B".to_string()
}
fn default_format() -> String {
    "T20".to_string()
}

impl RawBattingRecord {
    /// Resolve into the immutable scoring record.
    pub fn innings(&self) -> Innings {
        Innings {
            runs: self.runs,
            balls: self.balls,
            fours: self.fours,
            sixes: self.sixes,
            dismissed: self.dismissed,
            result: MatchResult::parse(&self.result),
            chasing: self.chasing,
            knockout: self.knockout,
            opposition_tier: self.opposition_tier.clone(),
            match_format: MatchFormat::parse(&self.match_format),
            team_score_at_entry: self.team_runs,
            wickets_at_entry: self.team_wickets,
            required_run_rate: self.required_run_rate,
        }
    }
}

/// One batting innings, fully resolved. Consumed by the metric computers;
/// never persisted by the core itself.
///
/// `balls == 0` is a legal degenerate case (e.g. a not-out duck off zero
/// deliveries); every ratio over it is guarded downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct Innings {
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    pub dismissed: bool,

    pub result: MatchResult,
    pub chasing: bool,
    pub knockout: bool,
    pub opposition_tier: String,
    pub match_format: MatchFormat,

    pub team_score_at_entry: u32,
    pub wickets_at_entry: u32,
    pub required_run_rate: f64,
}

impl Innings {
    /// Case-insensitive tier-A check, shared by the quality-pressure rule
    /// and the quality bucket filter.
    pub fn is_vs_tier_a(&self) -> bool {
        self.opposition_tier.trim().eq_ignore_ascii_case("A")
    }
}
