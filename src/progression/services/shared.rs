//! Thread-safe handle over a [`ProgressionStore`].

use super::store::{ProgressionStore, StoreStatus};
use crate::progression::{
    domain::{CategoryKey, Progression, TaskId, TrackKey},
    ports::{PointBonus, ProgressSlot, SlotResult},
};
use mockable::Clock;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle that serialises access to one store.
///
/// Each call holds the lock for the whole mutation, so readers never observe
/// a partially applied change.
pub struct SharedProgressionStore<S, B, C>
where
    S: ProgressSlot,
    B: PointBonus,
    C: Clock,
{
    inner: Arc<Mutex<ProgressionStore<S, B, C>>>,
}

impl<S, B, C> Clone for SharedProgressionStore<S, B, C>
where
    S: ProgressSlot,
    B: PointBonus,
    C: Clock,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, B, C> SharedProgressionStore<S, B, C>
where
    S: ProgressSlot,
    B: PointBonus,
    C: Clock,
{
    /// Wraps `store` for shared use.
    #[must_use]
    pub fn new(store: ProgressionStore<S, B, C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ProgressionStore<S, B, C>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`ProgressionStore::initialize`].
    pub fn initialize(&self, track: Option<&TrackKey>) {
        self.lock().initialize(track);
    }

    /// See [`ProgressionStore::complete_task`].
    #[must_use]
    pub fn complete_task(&self, id: TaskId) -> bool {
        self.lock().complete_task(id)
    }

    /// See [`ProgressionStore::reset_category`].
    #[must_use]
    pub fn reset_category(&self, category: Option<&CategoryKey>) -> bool {
        self.lock().reset_category(category)
    }

    /// See [`ProgressionStore::reset_progress`].
    #[must_use]
    pub fn reset_progress(&self) -> bool {
        self.lock().reset_progress()
    }

    /// See [`ProgressionStore::flush`].
    ///
    /// # Errors
    ///
    /// Returns the slot error when the write fails.
    pub fn flush(&self) -> SlotResult<()> {
        self.lock().flush()
    }

    /// Returns whether state is available.
    #[must_use]
    pub fn status(&self) -> StoreStatus {
        self.lock().status()
    }

    /// Returns a copy of the current progression.
    #[must_use]
    pub fn snapshot(&self) -> Option<Progression> {
        self.lock().progression().cloned()
    }

    /// Evaluates whether the task with `id` is actionable.
    #[must_use]
    pub fn is_unlocked(&self, id: TaskId) -> bool {
        self.lock().is_unlocked(id)
    }

    /// Runs `read` against the locked store.
    #[must_use]
    pub fn read<R>(&self, read: impl FnOnce(&ProgressionStore<S, B, C>) -> R) -> R {
        read(&self.lock())
    }
}
