//! Persisted "onboarding finished" flag, independent of task state.

use crate::progression::ports::{ProgressSlot, SlotKey, SlotResult};
use std::sync::Arc;
use tracing::warn;

/// Reads and writes the onboarding completion flag.
#[derive(Debug, Clone)]
pub struct OnboardingFlag<S>
where
    S: ProgressSlot,
{
    slot: Arc<S>,
}

impl<S> OnboardingFlag<S>
where
    S: ProgressSlot,
{
    /// Creates a flag backed by `slot`.
    #[must_use]
    pub const fn new(slot: Arc<S>) -> Self {
        Self { slot }
    }

    /// Returns whether onboarding has been marked complete.
    ///
    /// Unreadable or malformed values count as not complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        match self.slot.load(SlotKey::Onboarding) {
            Ok(Some(payload)) => serde_json::from_str::<bool>(&payload).unwrap_or_else(|err| {
                warn!(error = %err, "ignoring malformed onboarding flag");
                false
            }),
            Ok(None) => false,
            Err(err) => {
                warn!(error = %err, "failed to read onboarding flag");
                false
            }
        }
    }

    /// Marks onboarding complete.
    ///
    /// # Errors
    ///
    /// Returns the slot error when the write fails.
    pub fn mark_complete(&self) -> SlotResult<()> {
        self.slot.save(SlotKey::Onboarding, "true")
    }

    /// Clears the flag.
    ///
    /// # Errors
    ///
    /// Returns the slot error when the removal fails.
    pub fn clear(&self) -> SlotResult<()> {
        self.slot.clear(SlotKey::Onboarding)
    }
}
