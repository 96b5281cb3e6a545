//! Pressure tags for a single bowling spell.
//!
//! No thresholds are computed here: match-level pressure and phase flags are
//! pre-tagged upstream in the spell's context mapping, so the rules only read
//! them back out. Opposition tier and knockout are evaluated directly.

use serde::Serialize;

use crate::spell::BowlingSpell;

/// Fixed-key situational tags for one bowling spell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BowlingPressureTags {
    pub match_pressure: bool,
    pub powerplay_pressure: bool,
    pub death_pressure: bool,
    pub defending_pressure: bool,
    pub quality_opposition_pressure: bool,
    pub knockout_pressure: bool,
}

/// Apply the pressure rules to a single spell.
/// Pure classification — no scoring, no weighting.
pub fn tag_bowling_pressure(spell: &BowlingSpell) -> BowlingPressureTags {
    let mut tags = BowlingPressureTags::default();

    // 1) Match-level pressure (pre-tagged upstream).
    if spell.is_pressure_spell() {
        tags.match_pressure = true;
    }

    // 2) Powerplay overs.
    if spell.bowled_in_powerplay() {
        tags.powerplay_pressure = true;
    }

    // 3) Death overs.
    if spell.bowled_in_death() {
        tags.death_pressure = true;
    }

    // 4) Defending a target.
    if spell.defending_target() {
        tags.defending_pressure = true;
    }

    // 5) Elite opposition.
    if spell.is_vs_tier_a() {
        tags.quality_opposition_pressure = true;
    }

    // 6) Knockout match.
    if spell.knockout {
        tags.knockout_pressure = true;
    }

    tags
}
