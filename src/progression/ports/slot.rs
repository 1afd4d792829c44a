//! Key-value slot port used to persist progression and onboarding state.

use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for slot operations.
pub type SlotResult<T> = Result<T, SlotError>;

/// Named storage slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKey {
    /// Serialised progression snapshot.
    Progress,
    /// Flag recording that the first-visit onboarding flow was finished.
    Onboarding,
}

impl SlotKey {
    /// Returns the stable storage name of the slot.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Progress => "skill-tree-progress",
            Self::Onboarding => "onboarding-complete",
        }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable key-value storage contract.
///
/// Slots hold opaque UTF-8 payloads. Implementations must make `save`
/// replace the previous payload as a whole.
pub trait ProgressSlot {
    /// Stores `payload` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::Storage`] when the backing store rejects the
    /// write.
    fn save(&self, key: SlotKey, payload: &str) -> SlotResult<()>;

    /// Loads the payload stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing has been stored.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::Storage`] when the backing store cannot be read.
    fn load(&self, key: SlotKey) -> SlotResult<Option<String>>;

    /// Removes the payload stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::Storage`] when the backing store rejects the
    /// removal.
    fn clear(&self, key: SlotKey) -> SlotResult<()>;
}

impl<S: ProgressSlot + ?Sized> ProgressSlot for Arc<S> {
    fn save(&self, key: SlotKey, payload: &str) -> SlotResult<()> {
        (**self).save(key, payload)
    }

    fn load(&self, key: SlotKey) -> SlotResult<Option<String>> {
        (**self).load(key)
    }

    fn clear(&self, key: SlotKey) -> SlotResult<()> {
        (**self).clear(key)
    }
}

/// Errors returned by slot implementations.
#[derive(Debug, Clone, Error)]
pub enum SlotError {
    /// Storage-layer failure.
    #[error("storage error on slot {key}: {cause}")]
    Storage {
        /// Slot being accessed.
        key: SlotKey,
        /// Underlying failure.
        cause: Arc<dyn std::error::Error + Send + Sync>,
    },

    /// The payload could not be serialised.
    #[error("failed to encode payload for slot {key}: {message}")]
    Encode {
        /// Slot being written.
        key: SlotKey,
        /// Encoder message.
        message: String,
    },
}

impl SlotError {
    /// Wraps a storage error for `key`.
    pub fn storage(key: SlotKey, err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage {
            key,
            cause: Arc::new(err),
        }
    }
}
