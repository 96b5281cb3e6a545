//! # Ingest
//! Loads raw batting/bowling record files from disk into typed records.
//!
//! A record missing a required field is a construction failure carrying its
//! file and index context; the caller decides whether to skip or abort (the
//! CLI aborts). Optional fields resolve to their documented defaults during
//! deserialization. Numeric edge cases are not the ingest layer's problem —
//! the metric computers guard those locally.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::info;

use crate::innings::RawBattingRecord;
use crate::spell::RawBowlingRecord;

/// Load and concatenate batting record files, in the order given.
pub fn load_batting_records<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<RawBattingRecord>> {
    load_records(paths, "batting")
}

/// Load and concatenate bowling record files, in the order given.
pub fn load_bowling_records<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<RawBowlingRecord>> {
    load_records(paths, "bowling")
}

fn load_records<T, P>(paths: &[P], kind: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let mut records = Vec::new();

    for path in paths {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading {kind} records from {}", path.display()))?;
        let rows: Vec<serde_json::Value> = serde_json::from_str(&text)
            .with_context(|| format!("{} is not a JSON array of records", path.display()))?;

        let before = records.len();
        // Decode row by row so a bad record is reported with its index.
        for (index, row) in rows.into_iter().enumerate() {
            let record: T = serde_json::from_value(row).with_context(|| {
                format!("invalid {kind} record #{index} in {}", path.display())
            })?;
            records.push(record);
        }
        info!(
            path = %path.display(),
            count = records.len() - before,
            "loaded {kind} records"
        );
    }

    Ok(records)
}
