//! In-memory slot for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::progression::ports::{ProgressSlot, SlotError, SlotKey, SlotResult};

/// Thread-safe in-memory key-value slot.
///
/// Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct InMemorySlot {
    state: Arc<RwLock<HashMap<SlotKey, String>>>,
}

impl InMemorySlot {
    /// Creates an empty in-memory slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot pre-populated with `payload` under `key`.
    #[must_use]
    pub fn with_payload(key: SlotKey, payload: impl Into<String>) -> Self {
        let slot = Self::new();
        if let Ok(mut state) = slot.state.write() {
            state.insert(key, payload.into());
        }
        slot
    }
}

fn poisoned(key: SlotKey, err: &impl ToString) -> SlotError {
    SlotError::storage(key, std::io::Error::other(err.to_string()))
}

impl ProgressSlot for InMemorySlot {
    fn save(&self, key: SlotKey, payload: &str) -> SlotResult<()> {
        let mut state = self.state.write().map_err(|err| poisoned(key, &err))?;
        state.insert(key, payload.to_owned());
        Ok(())
    }

    fn load(&self, key: SlotKey) -> SlotResult<Option<String>> {
        let state = self.state.read().map_err(|err| poisoned(key, &err))?;
        Ok(state.get(&key).cloned())
    }

    fn clear(&self, key: SlotKey) -> SlotResult<()> {
        let mut state = self.state.write().map_err(|err| poisoned(key, &err))?;
        state.remove(&key);
        Ok(())
    }
}
