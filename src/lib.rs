// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod engine;
pub mod export;
pub mod ingest;
pub mod innings;
pub mod metrics;
pub mod normalize;
pub mod player;
pub mod rules;
pub mod spell;
pub mod tier_weights;

// ---- Re-exports for stable public API ----
pub use crate::engine::{compute_batting_intelligence, compute_bowling_intelligence};
pub use crate::innings::{Innings, MatchFormat, MatchResult, RawBattingRecord};
pub use crate::player::{PlayerAggregate, PlayerStats, Role};
pub use crate::rules::{tag_bowling_pressure, tag_pressure};
pub use crate::spell::{BowlingSpell, RawBowlingRecord};
pub use crate::tier_weights::TierWeightsConfig;
