//! Domain model for skill-tree progression.
//!
//! Tasks form a dependency graph inside categories. The rules here are pure:
//! unlock evaluation, display tree construction and category completion never
//! mutate tasks. Mutation goes through the progression store service.

mod error;
mod gate;
mod ids;
mod progression;
mod task;
mod tree;
mod unlock;

pub use error::{ParseFundTrackError, ProgressionDomainError};
pub use gate::{CategoryProgress, completed_count, is_category_complete, total_count};
pub use ids::{CategoryKey, TaskId, TrackKey};
pub use progression::{CategoryTasks, Progression};
pub use task::{FieldKind, FormField, FormSchema, Task, TaskAction};
pub use tree::{TreeNode, build_tree, build_tree_under};
pub use unlock::{GateState, is_unlocked, is_unlocked_gated, is_unlocked_with};
