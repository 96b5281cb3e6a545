//! # Export
//! Writes the ranked player list as a selector-ready JSON document.
//!
//! The document wraps the players array with a generation stamp so consumers
//! can tell stale exports apart. Ranking order is whatever the engine
//! produced — the writer never re-sorts.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::player::PlayerAggregate;

/// On-disk document shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDocument {
    pub generated_at: String,
    pub players: Vec<PlayerAggregate>,
}

impl ExportDocument {
    /// Wrap a ranked list, stamping it with the current time.
    pub fn new(players: Vec<PlayerAggregate>) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            players,
        }
    }
}

/// Write the ranked players to `path`, pretty-printed.
pub fn write_players<P: AsRef<Path>>(path: P, players: &[PlayerAggregate]) -> Result<()> {
    let path = path.as_ref();
    let doc = ExportDocument::new(players.to_vec());
    let json = serde_json::to_string_pretty(&doc).context("serializing player export")?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), players = doc.players.len(), "export written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{PlayerStats, Role};
    use std::path::PathBuf;

    /// Create a unique temporary directory in std::env::temp_dir().
    fn unique_tmp_dir() -> PathBuf {
        let mut dir = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        dir.push(format!("export_test_{}", nanos));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn written_document_round_trips() {
        let dir = unique_tmp_dir();
        let path = dir.join("players.json");

        let players = vec![
            PlayerAggregate::new(
                "A One",
                "TN",
                Role::Bowler,
                PlayerStats::scores_only(60.0, 55.0, 50.0, 45.0, 54.5),
            ),
            PlayerAggregate::new(
                "B Two",
                "TN",
                Role::Bowler,
                PlayerStats::scores_only(40.0, 45.0, 50.0, 45.0, 43.25),
            ),
        ];

        write_players(&path, &players).unwrap();

        let doc: ExportDocument =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(doc.players, players);
        assert!(!doc.generated_at.is_empty());

        let _ = fs::remove_dir_all(&dir);
    }
}
