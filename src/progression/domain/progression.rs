//! Progression state: every category's tasks for the selected track.

use super::{
    CategoryKey, CategoryProgress, GateState, Task, TaskId, TrackKey, TreeNode, build_tree,
    is_category_complete, is_unlocked_with,
};
use serde::{Deserialize, Serialize};

/// Ordered tasks of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTasks {
    /// Category key.
    pub key: CategoryKey,
    /// Tasks in template order.
    pub tasks: Vec<Task>,
}

impl CategoryTasks {
    /// Creates a category collection.
    #[must_use]
    pub const fn new(key: CategoryKey, tasks: Vec<Task>) -> Self {
        Self { key, tasks }
    }
}

/// Root state object owned by the progression store.
///
/// Categories keep a fixed order: the gating category first, then fixed
/// categories, then the selected track's categories. Lookups by task id scan
/// in that order and stop at the first match.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Progression {
    #[serde(default)]
    track: Option<TrackKey>,
    #[serde(default)]
    gate: Option<CategoryKey>,
    categories: Vec<CategoryTasks>,
}

impl Progression {
    /// Creates a progression from generated categories.
    #[must_use]
    pub const fn new(
        track: Option<TrackKey>,
        gate: Option<CategoryKey>,
        categories: Vec<CategoryTasks>,
    ) -> Self {
        Self {
            track,
            gate,
            categories,
        }
    }

    /// Returns the selected track, if any.
    #[must_use]
    pub const fn track(&self) -> Option<&TrackKey> {
        self.track.as_ref()
    }

    /// Returns the gating category key, if any.
    #[must_use]
    pub const fn gate_category(&self) -> Option<&CategoryKey> {
        self.gate.as_ref()
    }

    /// Returns the categories in lookup order.
    #[must_use]
    pub fn categories(&self) -> &[CategoryTasks] {
        &self.categories
    }

    /// Returns the category keys in lookup order.
    pub fn category_keys(&self) -> impl Iterator<Item = &CategoryKey> {
        self.categories.iter().map(|category| &category.key)
    }

    /// Returns the tasks of `key`, or an empty slice for unknown categories.
    #[must_use]
    pub fn tasks_for(&self, key: &CategoryKey) -> &[Task] {
        self.categories
            .iter()
            .find(|category| category.key == *key)
            .map(|category| category.tasks.as_slice())
            .unwrap_or_default()
    }

    /// Returns every task across all categories in lookup order.
    #[must_use]
    pub fn all_tasks(&self) -> Vec<&Task> {
        self.categories
            .iter()
            .flat_map(|category| category.tasks.iter())
            .collect()
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.categories
            .iter()
            .flat_map(|category| category.tasks.iter())
            .find(|task| task.id() == id)
    }

    /// Returns the current gate state, or `None` when no gate is configured.
    #[must_use]
    pub fn gate_state(&self) -> Option<GateState> {
        self.gate
            .as_ref()
            .map(|key| GateState::evaluate(key.clone(), self.tasks_for(key)))
    }

    /// Returns `true` when the gating category is complete or absent.
    #[must_use]
    pub fn is_gate_complete(&self) -> bool {
        self.gate
            .as_ref()
            .is_none_or(|key| is_category_complete(self.tasks_for(key)))
    }

    /// Evaluates the gated unlock rule for the task with `id`.
    ///
    /// Dependencies are resolved across every category. Unknown ids are
    /// reported as locked.
    #[must_use]
    pub fn is_unlocked(&self, id: TaskId) -> bool {
        let Some(task) = self.task(id) else {
            return false;
        };
        is_unlocked_with(task, self.gate_state().as_ref(), |dependency| {
            self.task(dependency).is_some_and(Task::is_completed)
        })
    }

    /// Builds the display tree of one category.
    #[must_use]
    pub fn tree_for(&self, key: &CategoryKey) -> Vec<TreeNode> {
        build_tree(self.tasks_for(key))
    }

    /// Counts completed and total tasks of one category.
    #[must_use]
    pub fn category_progress(&self, key: &CategoryKey) -> CategoryProgress {
        CategoryProgress::of(self.tasks_for(key))
    }

    /// Counts completed and total tasks across all categories.
    #[must_use]
    pub fn overall_progress(&self) -> CategoryProgress {
        self.categories
            .iter()
            .map(|category| CategoryProgress::of(&category.tasks))
            .fold(CategoryProgress::default(), |total, next| total + next)
    }

    /// Marks the first task with `id` completed.
    ///
    /// Returns `true` only when a task was found and its flag changed.
    pub(crate) fn complete_task(&mut self, id: TaskId) -> bool {
        self.categories
            .iter_mut()
            .flat_map(|category| category.tasks.iter_mut())
            .find(|task| task.id() == id)
            .is_some_and(Task::mark_completed)
    }

    /// Replaces the tasks of `key`, returning whether the category existed.
    pub(crate) fn replace_category(&mut self, key: &CategoryKey, tasks: Vec<Task>) -> bool {
        let Some(category) = self
            .categories
            .iter_mut()
            .find(|category| category.key == *key)
        else {
            return false;
        };
        category.tasks = tasks;
        true
    }

    /// Clears every completion flag, re-seeding the gate's first task when
    /// `seed_gate` is set.
    pub(crate) fn clear_completion(&mut self, seed_gate: bool) {
        for category in &mut self.categories {
            let is_gate = self.gate.as_ref() == Some(&category.key);
            for (position, task) in category.tasks.iter_mut().enumerate() {
                task.reset_completion(seed_gate && is_gate && position == 0);
            }
        }
    }
}
