//! Rules deciding whether a task is currently actionable.
//!
//! Evaluation is two-tier: a gate, when present, is checked before the
//! task's own dependencies. Dependency ids that cannot be resolved in scope
//! count as incomplete.

use super::{CategoryKey, Task, TaskId, gate::is_category_complete};

/// Completion status of the designated gating category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateState {
    category: CategoryKey,
    complete: bool,
}

impl GateState {
    /// Creates a gate state from a known completion flag.
    #[must_use]
    pub const fn new(category: CategoryKey, complete: bool) -> Self {
        Self { category, complete }
    }

    /// Derives the gate state from the gating category's tasks.
    #[must_use]
    pub fn evaluate(category: CategoryKey, tasks: &[Task]) -> Self {
        let complete = is_category_complete(tasks);
        Self { category, complete }
    }

    /// Returns the gating category.
    #[must_use]
    pub const fn category(&self) -> &CategoryKey {
        &self.category
    }

    /// Returns whether every gating task is completed.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    /// Returns `true` when tasks of `category` are held back by this gate.
    #[must_use]
    pub fn blocks(&self, category: &CategoryKey) -> bool {
        !self.complete && *category != self.category
    }
}

/// Core two-tier rule over an arbitrary completion lookup.
///
/// `is_completed` must return `false` for ids it cannot resolve.
#[must_use]
pub fn is_unlocked_with(
    task: &Task,
    gate: Option<&GateState>,
    is_completed: impl Fn(TaskId) -> bool,
) -> bool {
    if gate.is_some_and(|state| state.blocks(task.category())) {
        return false;
    }
    task.dependencies()
        .iter()
        .all(|dependency| is_completed(*dependency))
}

/// Returns `true` when the task with `id` exists in `scope` and is completed.
fn is_completed_in(scope: &[Task], id: TaskId) -> bool {
    scope
        .iter()
        .find(|candidate| candidate.id() == id)
        .is_some_and(Task::is_completed)
}

/// Returns `true` when every dependency of `task` is completed in `scope`.
///
/// A task without dependencies is always unlocked with respect to its own
/// prerequisites.
#[must_use]
pub fn is_unlocked(task: &Task, scope: &[Task]) -> bool {
    is_unlocked_with(task, None, |id| is_completed_in(scope, id))
}

/// Gated variant of [`is_unlocked`].
///
/// When `gate` blocks the task's category the result is `false` regardless
/// of the task's own dependency state.
#[must_use]
pub fn is_unlocked_gated(task: &Task, scope: &[Task], gate: Option<&GateState>) -> bool {
    is_unlocked_with(task, gate, |id| is_completed_in(scope, id))
}
