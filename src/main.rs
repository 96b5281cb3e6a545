//! Cricket Intelligence — Binary Entrypoint
//! Batch exporter: load raw innings/spell JSON, group and score every
//! player, write the selector-ready ranked JSON document.
//!
//! Usage:
//!   cricket-intelligence batters --out batters_ready.json raw1.json [raw2.json ...]
//!   cricket-intelligence bowlers --out bowlers_ready.json raw.json

use anyhow::{bail, Result};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cricket_intelligence::{engine, export, ingest};

/// Compact tracing to stderr; RUST_LOG overrides the default filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cricket_intelligence=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

struct Args {
    role: String,
    out: String,
    inputs: Vec<String>,
}

fn parse_args() -> Result<Args> {
    let mut args = std::env::args().skip(1);

    let Some(role) = args.next() else {
        bail!("usage: cricket-intelligence <batters|bowlers> --out <file> <input.json>...");
    };

    let mut out = None;
    let mut inputs = Vec::new();
    while let Some(arg) = args.next() {
        if arg == "--out" {
            match args.next() {
                Some(path) => out = Some(path),
                None => bail!("--out needs a file path"),
            }
        } else {
            inputs.push(arg);
        }
    }

    let Some(out) = out else {
        bail!("missing --out <file>");
    };
    if inputs.is_empty() {
        bail!("no input files given");
    }

    Ok(Args { role, out, inputs })
}

fn main() -> Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let args = parse_args()?;

    let players = match args.role.as_str() {
        "batters" => {
            let records = ingest::load_batting_records(&args.inputs)?;
            engine::compute_batting_intelligence(&records)
        }
        "bowlers" => {
            let records = ingest::load_bowling_records(&args.inputs)?;
            engine::compute_bowling_intelligence(&records)
        }
        other => bail!("unknown role {other:?}; expected \"batters\" or \"bowlers\""),
    };

    export::write_players(&args.out, &players)?;

    info!(
        role = %args.role,
        players = players.len(),
        out = %args.out,
        "intelligence export finished"
    );
    Ok(())
}
