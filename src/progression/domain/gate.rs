//! Category-level completion checks and counters.

use super::Task;
use serde::{Deserialize, Serialize};

/// Returns `true` when every task in the collection is completed.
///
/// An empty collection is vacuously complete.
#[must_use]
pub fn is_category_complete(tasks: &[Task]) -> bool {
    tasks.iter().all(Task::is_completed)
}

/// Number of completed tasks in the collection.
#[must_use]
pub fn completed_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|task| task.is_completed()).count()
}

/// Number of tasks in the collection.
#[must_use]
pub const fn total_count(tasks: &[Task]) -> usize {
    tasks.len()
}

/// Completed and total counts for a collection of tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryProgress {
    /// Number of completed tasks.
    pub completed: usize,
    /// Number of tasks.
    pub total: usize,
}

impl CategoryProgress {
    /// Counts the given tasks.
    #[must_use]
    pub fn of(tasks: &[Task]) -> Self {
        Self {
            completed: completed_count(tasks),
            total: total_count(tasks),
        }
    }

    /// Returns `true` when there are no tasks to count.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.total == 0
    }

    /// Returns `true` when all counted tasks are completed.
    #[must_use]
    pub const fn is_complete(self) -> bool {
        self.completed == self.total
    }

    /// Completion percentage rounded down; `0` when there are no tasks.
    #[must_use]
    pub fn percent(self) -> u8 {
        let scaled = self.completed.saturating_mul(100);
        scaled
            .checked_div(self.total)
            .and_then(|value| u8::try_from(value.min(100)).ok())
            .unwrap_or(0)
    }
}

impl std::ops::Add for CategoryProgress {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            completed: self.completed.saturating_add(rhs.completed),
            total: self.total.saturating_add(rhs.total),
        }
    }
}
