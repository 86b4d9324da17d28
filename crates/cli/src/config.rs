//! Startup configuration, read once from the environment.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde_json::Value;
use sgc_auth::{MemoryStore, RoutePolicyTable};

/// Optional JSON policy document replacing the compiled-in table.
pub const POLICY_PATH_VAR: &str = "SGC_POLICY_PATH";

/// Optional JSON snapshot of the session key-value store.
pub const SESSION_PATH_VAR: &str = "SGC_SESSION_PATH";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuardConfig {
    pub policy_path: Option<PathBuf>,
    pub session_path: Option<PathBuf>,
}

impl GuardConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable source; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
        };

        Self {
            policy_path: path(POLICY_PATH_VAR),
            session_path: path(SESSION_PATH_VAR),
        }
    }

    /// The policy to enforce: the override file if configured (validated),
    /// otherwise the built-in table.
    pub fn load_policy(&self) -> anyhow::Result<RoutePolicyTable> {
        let Some(path) = &self.policy_path else {
            return Ok(RoutePolicyTable::builtin().clone());
        };

        let text = read(path)?;
        let table = RoutePolicyTable::from_json(&text)
            .with_context(|| format!("invalid policy file {}", path.display()))?;
        tracing::info!(path = %path.display(), roles = table.roles().count(), "loaded policy override");
        Ok(table)
    }

    /// The session snapshot, or an empty store when none is configured.
    pub fn load_session(&self) -> anyhow::Result<MemoryStore> {
        match &self.session_path {
            Some(path) => session_from_json(&read(path)?)
                .with_context(|| format!("invalid session snapshot {}", path.display())),
            None => Ok(MemoryStore::new()),
        }
    }
}

fn read(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Parse `{ "usuario": "...", "rolActivo": "..." }`.
///
/// Browser storage only holds strings; object values are accepted too and
/// stored as their JSON text, so snapshots can be written by hand. Whether
/// the text is a valid record is left to the session store.
pub fn session_from_json(text: &str) -> anyhow::Result<MemoryStore> {
    let entries: serde_json::Map<String, Value> =
        serde_json::from_str(text).context("session snapshot must be a JSON object")?;

    Ok(entries
        .into_iter()
        .map(|(key, value)| {
            let raw = match value {
                Value::String(s) => s,
                other => other.to_string(),
            };
            (key, raw)
        })
        .collect())
}
