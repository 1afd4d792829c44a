//! Single owner of progression state.
//!
//! The store applies mutations, answers read queries and writes a snapshot
//! through the [`ProgressSlot`] after every state change. Persistence failures
//! are logged and never surface from mutations; callers that need to know use
//! [`ProgressionStore::flush`].

use super::{
    generator::TaskGenerator,
    snapshot::{SavedProgress, SnapshotError},
};
use crate::progression::{
    config::{ProgressionConfig, UninitializedPolicy},
    domain::{CategoryKey, CategoryProgress, Progression, Task, TaskId, TrackKey, TreeNode},
    ports::{PointBonus, ProgressSlot, SlotError, SlotKey, SlotResult},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Whether the store currently holds progression state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreStatus {
    /// No state has been generated or restored.
    Uninitialized,
    /// State is available.
    Ready,
}

/// Owns the progression and mediates every mutation.
pub struct ProgressionStore<S, B, C>
where
    S: ProgressSlot,
    B: PointBonus,
    C: Clock,
{
    slot: Arc<S>,
    generator: TaskGenerator<B>,
    clock: Arc<C>,
    config: ProgressionConfig,
    state: Option<Progression>,
}

impl<S, B, C> ProgressionStore<S, B, C>
where
    S: ProgressSlot,
    B: PointBonus,
    C: Clock,
{
    /// Opens a store, restoring persisted state when available.
    ///
    /// A missing, unreadable or invalid snapshot is discarded. The store then
    /// generates state with no track when `initialize_on_open` is set and
    /// otherwise stays uninitialised.
    ///
    /// `config.seed_gate_first_task` replaces any seeding flag already set on
    /// `generator`.
    pub fn open(
        slot: Arc<S>,
        generator: TaskGenerator<B>,
        clock: Arc<C>,
        config: ProgressionConfig,
    ) -> Self {
        let mut store = Self {
            slot,
            generator: generator.with_gate_seed(config.seed_gate_first_task),
            clock,
            config,
            state: None,
        };
        if config.persist {
            store.state = store.restore();
        }
        if store.state.is_none() && config.initialize_on_open {
            store.initialize(None);
        }
        store
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ProgressionConfig {
        &self.config
    }

    /// Returns whether state is available.
    #[must_use]
    pub const fn status(&self) -> StoreStatus {
        if self.state.is_some() {
            StoreStatus::Ready
        } else {
            StoreStatus::Uninitialized
        }
    }

    /// Returns the current progression, if initialised.
    #[must_use]
    pub const fn progression(&self) -> Option<&Progression> {
        self.state.as_ref()
    }

    /// Replaces all state with a fresh generation for `track`.
    ///
    /// Unknown tracks generate the gate and fixed categories only.
    pub fn initialize(&mut self, track: Option<&TrackKey>) {
        let progression = self.generator.generate(track);
        info!(
            track = progression.track().map(TrackKey::as_str),
            tasks = progression.all_tasks().len(),
            "initialised progression"
        );
        self.state = Some(progression);
        self.persist();
    }

    /// Marks the task with `id` completed.
    ///
    /// Completing an unknown or already completed task is a no-op. Returns
    /// `true` only when a completion flag changed.
    pub fn complete_task(&mut self, id: TaskId) -> bool {
        let Some(state) = self.ready_state() else {
            debug!(task_id = %id, "ignoring completion before initialisation");
            return false;
        };
        let changed = state.complete_task(id);
        if changed {
            info!(task_id = %id, "completed task");
            self.persist();
        } else {
            debug!(task_id = %id, "completion left state unchanged");
        }
        changed
    }

    /// Regenerates one category, or every category when `category` is `None`.
    ///
    /// Regenerating a single category replaces its tasks with fresh, incomplete
    /// ones and leaves the other categories untouched. Unknown categories are a
    /// no-op. Returns `true` when state was replaced.
    pub fn reset_category(&mut self, category: Option<&CategoryKey>) -> bool {
        let Some(state) = self.ready_state() else {
            return false;
        };
        let track = state.track().cloned();
        let Some(key) = category else {
            self.initialize(track.as_ref());
            return true;
        };
        let Some(tasks) = self.generator.generate_category(key, track.as_ref()) else {
            debug!(category = %key, "ignoring reset of unknown category");
            return false;
        };
        let replaced = self
            .state
            .as_mut()
            .is_some_and(|current| current.replace_category(key, tasks));
        if replaced {
            info!(category = %key, "reset category");
            self.persist();
        } else {
            debug!(category = %key, "category not present in current progression");
        }
        replaced
    }

    /// Clears every completion flag while keeping the generated tasks.
    ///
    /// The gate's first task is re-seeded when seeding is enabled. Returns
    /// `false` when the store is uninitialised and stays that way.
    pub fn reset_progress(&mut self) -> bool {
        let seed = self.config.seed_gate_first_task;
        let Some(state) = self.ready_state() else {
            return false;
        };
        state.clear_completion(seed);
        info!("cleared progression completion");
        self.persist();
        true
    }

    /// Writes the current state to the slot, reporting failures.
    ///
    /// Does nothing when persistence is disabled or the store is
    /// uninitialised.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError`] when encoding or writing fails.
    pub fn flush(&self) -> SlotResult<()> {
        if !self.config.persist {
            return Ok(());
        }
        let Some(state) = self.state.as_ref() else {
            return Ok(());
        };
        let payload = SavedProgress::new(state.clone(), self.clock.as_ref())
            .encode()
            .map_err(|err| SlotError::Encode {
                key: SlotKey::Progress,
                message: err.to_string(),
            })?;
        self.slot.save(SlotKey::Progress, &payload)
    }

    /// Returns the tasks of `category`, empty when unknown or uninitialised.
    #[must_use]
    pub fn tasks_for(&self, category: &CategoryKey) -> &[Task] {
        self.state
            .as_ref()
            .map(|state| state.tasks_for(category))
            .unwrap_or_default()
    }

    /// Returns every task across all categories.
    #[must_use]
    pub fn all_tasks(&self) -> Vec<&Task> {
        self.state
            .as_ref()
            .map(Progression::all_tasks)
            .unwrap_or_default()
    }

    /// Finds a task by id.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.state.as_ref()?.task(id)
    }

    /// Evaluates whether the task with `id` is actionable.
    #[must_use]
    pub fn is_unlocked(&self, id: TaskId) -> bool {
        self.state
            .as_ref()
            .is_some_and(|state| state.is_unlocked(id))
    }

    /// Builds the display tree of `category`.
    #[must_use]
    pub fn tree_for(&self, category: &CategoryKey) -> Vec<TreeNode> {
        self.state
            .as_ref()
            .map(|state| state.tree_for(category))
            .unwrap_or_default()
    }

    /// Counts completed and total tasks of `category`.
    #[must_use]
    pub fn category_progress(&self, category: &CategoryKey) -> CategoryProgress {
        self.state
            .as_ref()
            .map(|state| state.category_progress(category))
            .unwrap_or_default()
    }

    /// Counts completed and total tasks across all categories.
    #[must_use]
    pub fn overall_progress(&self) -> CategoryProgress {
        self.state
            .as_ref()
            .map(Progression::overall_progress)
            .unwrap_or_default()
    }

    /// Returns whether the gating category is complete.
    ///
    /// An uninitialised store reports `false`.
    #[must_use]
    pub fn is_gate_complete(&self) -> bool {
        self.state
            .as_ref()
            .is_some_and(Progression::is_gate_complete)
    }

    fn ready_state(&mut self) -> Option<&mut Progression> {
        if self.state.is_none() && self.config.uninitialized == UninitializedPolicy::LazyInitialize
        {
            self.initialize(None);
        }
        self.state.as_mut()
    }

    fn persist(&self) {
        if let Err(err) = self.flush() {
            warn!(error = %err, "failed to persist progression; continuing in memory");
        }
    }

    fn restore(&self) -> Option<Progression> {
        let payload = match self.slot.load(SlotKey::Progress) {
            Ok(Some(payload)) => payload,
            Ok(None) => return None,
            Err(err) => {
                warn!(error = %err, "failed to read persisted progression");
                return None;
            }
        };
        match SavedProgress::decode(&payload) {
            Ok(snapshot) => {
                let progression = snapshot.into_progression();
                if self.is_restorable(&progression) {
                    info!(
                        track = progression.track().map(TrackKey::as_str),
                        "restored persisted progression"
                    );
                    Some(progression)
                } else {
                    self.discard(&SnapshotError::Inconsistent(
                        "snapshot does not match the catalog".to_owned(),
                    ));
                    None
                }
            }
            Err(err) => {
                self.discard(&err);
                None
            }
        }
    }

    fn is_restorable(&self, progression: &Progression) -> bool {
        let catalog = self.generator.catalog();
        let gate = catalog.gate().map(|template| template.key());
        if progression.gate_category() != gate {
            return false;
        }
        progression
            .track()
            .is_none_or(|track| catalog.track(track).is_some())
    }

    fn discard(&self, err: &SnapshotError) {
        warn!(error = %err, "discarding persisted progression");
        if let Err(clear_err) = self.slot.clear(SlotKey::Progress) {
            warn!(error = %clear_err, "failed to clear persisted progression");
        }
    }
}
