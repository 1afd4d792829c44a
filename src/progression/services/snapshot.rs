//! Versioned envelope for persisted progression state.

use crate::progression::domain::{Progression, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Errors returned while decoding a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The payload is not valid snapshot JSON.
    #[error("malformed progress snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The payload was written by an unsupported format version.
    #[error("unsupported snapshot version {found}")]
    UnsupportedVersion {
        /// Version recorded in the payload.
        found: u32,
    },

    /// The payload decoded but violates progression invariants.
    #[error("inconsistent progress snapshot: {0}")]
    Inconsistent(String),
}

/// Persisted progression with format metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedProgress {
    version: u32,
    saved_at: DateTime<Utc>,
    progression: Progression,
}

impl SavedProgress {
    /// Wraps `progression`, stamping it with the clock's current time.
    #[must_use]
    pub fn new(progression: Progression, clock: &impl Clock) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            saved_at: clock.utc(),
            progression,
        }
    }

    /// Returns the format version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns when the snapshot was taken.
    #[must_use]
    pub const fn saved_at(&self) -> DateTime<Utc> {
        self.saved_at
    }

    /// Returns the wrapped progression.
    #[must_use]
    pub const fn progression(&self) -> &Progression {
        &self.progression
    }

    /// Consumes the envelope, returning the progression.
    #[must_use]
    pub fn into_progression(self) -> Progression {
        self.progression
    }

    /// Serialises the snapshot to JSON.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialisation fails.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parses and validates a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] when the JSON is malformed, the version is
    /// unsupported, or the decoded state is inconsistent.
    pub fn decode(payload: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(payload)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: snapshot.version,
            });
        }
        check_consistency(&snapshot.progression)?;
        Ok(snapshot)
    }
}

fn check_consistency(progression: &Progression) -> Result<(), SnapshotError> {
    let mut keys = HashSet::new();
    let mut ids: HashSet<TaskId> = HashSet::new();
    for category in progression.categories() {
        if !keys.insert(&category.key) {
            return Err(SnapshotError::Inconsistent(format!(
                "category '{}' appears twice",
                category.key
            )));
        }
        for task in &category.tasks {
            if task.category() != &category.key {
                return Err(SnapshotError::Inconsistent(format!(
                    "task {} is filed under '{}' but belongs to '{}'",
                    task.id(),
                    category.key,
                    task.category()
                )));
            }
            if !ids.insert(task.id()) {
                return Err(SnapshotError::Inconsistent(format!(
                    "task id {} appears twice",
                    task.id()
                )));
            }
        }
    }
    match progression.gate_category() {
        Some(gate) if !keys.contains(gate) => Err(SnapshotError::Inconsistent(format!(
            "gating category '{gate}' is missing"
        ))),
        _ => Ok(()),
    }
}
