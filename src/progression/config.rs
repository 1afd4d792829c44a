//! Runtime configuration for the progression store.

use serde::{Deserialize, Serialize};

/// What mutations do before the store has been initialised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UninitializedPolicy {
    /// Generate state with no track selected, then apply the mutation.
    #[default]
    LazyInitialize,
    /// Treat the mutation as a no-op.
    Ignore,
}

/// Progression store settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionConfig {
    /// Whether state is written to the slot after every mutation and read
    /// back on open.
    pub persist: bool,
    /// Whether the first task of the gating category starts completed.
    pub seed_gate_first_task: bool,
    /// Whether `open` generates fresh state when nothing can be restored.
    pub initialize_on_open: bool,
    /// Behaviour of mutations while uninitialised.
    pub uninitialized: UninitializedPolicy,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            persist: true,
            seed_gate_first_task: true,
            initialize_on_open: true,
            uninitialized: UninitializedPolicy::LazyInitialize,
        }
    }
}

impl ProgressionConfig {
    /// Configuration that never touches the slot.
    ///
    /// Useful for previews and tests that must not leave state behind.
    #[must_use]
    pub fn ephemeral() -> Self {
        Self {
            persist: false,
            ..Self::default()
        }
    }

    /// Configuration that waits for an explicit `initialize` call.
    ///
    /// Mutations before initialisation are ignored.
    #[must_use]
    pub const fn explicit() -> Self {
        Self {
            persist: true,
            seed_gate_first_task: true,
            initialize_on_open: false,
            uninitialized: UninitializedPolicy::Ignore,
        }
    }

    /// Sets whether the gating category's first task starts completed.
    #[must_use]
    pub const fn with_gate_seed(mut self, seed: bool) -> Self {
        self.seed_gate_first_task = seed;
        self
    }

    /// Parses a configuration from JSON, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
