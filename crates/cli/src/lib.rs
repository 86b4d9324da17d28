//! `sgc-guard` command: explain guard decisions for a session snapshot.

pub mod config;

use std::io::Write;

use anyhow::Context;
use sgc_auth::{strip_location, Guard, KvSessionStore, MemoryStore, RoutePolicyTable};

pub use config::GuardConfig;

/// Evaluate each location and write one JSON explanation per line.
pub fn run(
    policy: &RoutePolicyTable,
    session: &MemoryStore,
    locations: &[String],
    mut out: impl Write,
) -> anyhow::Result<()> {
    let guard = Guard::new(policy, KvSessionStore::new(session));

    for location in locations {
        let explanation = guard.explain(strip_location(location));
        serde_json::to_writer(&mut out, &explanation).context("failed to encode explanation")?;
        writeln!(out).context("failed to write output")?;
    }

    Ok(())
}
