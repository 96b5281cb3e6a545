//! player.rs — Selector-ready output types for ranked players.
//!
//! One `PlayerAggregate` per player per pipeline run: identity, role and the
//! stats block with the four sub-scores plus the final composite. Batters
//! additionally carry raw aggregates (matches, runs, average, strike rate);
//! those fields are skipped entirely for bowlers so the serialized shape
//! stays role-specific. Constructed once, never mutated — the ranked list
//! sort is the only post-construction reordering.

use serde::{Deserialize, Serialize};

/// Player role on the output boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Batter,
    Bowler,
}

/// Named sub-scores plus the final composite, serialized in camelCase to
/// match the selector UI contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matches: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runs: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strike_rate: Option<f64>,

    pub pressure_score: f64,
    pub base_skill_score: f64,
    pub consistency_score: f64,
    pub opposition_quality_score: f64,
    pub final_score: f64,
}

impl PlayerStats {
    /// Stats block with only the sub-scores (bowler shape).
    pub fn scores_only(
        pressure_score: f64,
        base_skill_score: f64,
        consistency_score: f64,
        opposition_quality_score: f64,
        final_score: f64,
    ) -> Self {
        Self {
            matches: None,
            runs: None,
            average: None,
            strike_rate: None,
            pressure_score,
            base_skill_score,
            consistency_score,
            opposition_quality_score,
            final_score,
        }
    }

    /// Attach batter raw aggregates (builder style).
    pub fn with_batting_aggregates(
        mut self,
        matches: u32,
        runs: u32,
        average: f64,
        strike_rate: f64,
    ) -> Self {
        self.matches = Some(matches);
        self.runs = Some(runs);
        self.average = Some(average);
        self.strike_rate = Some(strike_rate);
        self
    }
}

/// The ranked entity exposed at the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerAggregate {
    pub id: String,
    pub name: String,
    pub team: String,
    pub role: Role,
    pub stats: PlayerStats,
}

impl PlayerAggregate {
    /// Build an aggregate, deriving the id slug from the name.
    pub fn new(
        name: impl Into<String>,
        team: impl Into<String>,
        role: Role,
        stats: PlayerStats,
    ) -> Self {
        let name = name.into();
        Self {
            id: slug(&name),
            name,
            team: team.into(),
            role,
            stats,
        }
    }

    pub fn final_score(&self) -> f64 {
        self.stats.final_score
    }
}

/// Lowercased, space-to-dash identifier slug.
fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_batter_shape_matches_selector_contract() {
        let p = PlayerAggregate::new(
            "Sai Sudharsan",
            "Tamil Nadu",
            Role::Batter,
            PlayerStats::scores_only(61.4, 72.15, 55.0, 48.33, 62.11)
                .with_batting_aggregates(9, 312, 34.67, 138.67),
        );

        let v = serde_json::to_value(&p).unwrap();

        assert_eq!(v["id"], serde_json::json!("sai-sudharsan"));
        assert_eq!(v["name"], serde_json::json!("Sai Sudharsan"));
        assert_eq!(v["role"], serde_json::json!("Batter"));

        let stats = &v["stats"];
        assert_eq!(stats["matches"], serde_json::json!(9));
        assert_eq!(stats["runs"], serde_json::json!(312));
        assert_eq!(stats["pressureScore"], serde_json::json!(61.4));
        assert_eq!(stats["baseSkillScore"], serde_json::json!(72.15));
        assert_eq!(stats["consistencyScore"], serde_json::json!(55.0));
        assert_eq!(stats["oppositionQualityScore"], serde_json::json!(48.33));
        assert_eq!(stats["finalScore"], serde_json::json!(62.11));
        assert_eq!(stats["strikeRate"], serde_json::json!(138.67));
    }

    #[test]
    fn bowler_shape_skips_batting_aggregates() {
        let p = PlayerAggregate::new(
            "M Ashwin",
            "Tamil Nadu",
            Role::Bowler,
            PlayerStats::scores_only(58.0, 64.2, 51.5, 47.0, 57.42),
        );

        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["role"], serde_json::json!("Bowler"));
        let stats = v["stats"].as_object().unwrap();
        assert!(!stats.contains_key("matches"));
        assert!(!stats.contains_key("runs"));
        assert!(!stats.contains_key("average"));
        assert!(!stats.contains_key("strikeRate"));
        assert!(stats.contains_key("finalScore"));
    }
}
