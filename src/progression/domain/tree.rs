//! Display hierarchy built from the single-valued `parent_id` relation.
//!
//! The hierarchy is for layout only. Unlock decisions always go through the
//! multi-valued `dependencies` relation in [`super::unlock`].

use super::{Task, TaskId};
use serde::{Deserialize, Serialize};

/// Node of the display hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Task placed at this node.
    pub task: TaskId,
    /// Child nodes, highest urgency first.
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Number of nodes in this subtree, including this one.
    #[must_use]
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(Self::len).sum::<usize>()
    }

    /// Returns `false`; a node always contains itself.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Depth of this subtree, where a leaf has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Self::depth).max().unwrap_or(0)
    }

    /// Visits the subtree depth-first, yielding each task with its depth.
    pub fn walk(&self, depth: usize, visit: &mut impl FnMut(TaskId, usize)) {
        visit(self.task, depth);
        for child in &self.children {
            child.walk(depth + 1, visit);
        }
    }
}

/// Builds the forest of tasks rooted at tasks without a display parent.
#[must_use]
pub fn build_tree(tasks: &[Task]) -> Vec<TreeNode> {
    build_tree_under(tasks, None)
}

/// Builds the subtrees whose roots have `parent_id == parent`.
///
/// Siblings are ordered by descending urgency; the sort is stable, so equal
/// urgencies keep their input order. Tasks whose parent chain never reaches
/// `parent` are not included, and a task already on the current path is not
/// descended into again.
#[must_use]
pub fn build_tree_under(tasks: &[Task], parent: Option<TaskId>) -> Vec<TreeNode> {
    let mut path = Vec::new();
    build_level(tasks, parent, &mut path)
}

fn build_level(tasks: &[Task], parent: Option<TaskId>, path: &mut Vec<TaskId>) -> Vec<TreeNode> {
    let mut siblings: Vec<&Task> = tasks
        .iter()
        .filter(|task| task.parent_id() == parent && !path.contains(&task.id()))
        .collect();
    siblings.sort_by(|left, right| right.urgency().cmp(&left.urgency()));

    siblings
        .into_iter()
        .map(|task| {
            path.push(task.id());
            let children = build_level(tasks, Some(task.id()), path);
            path.pop();
            TreeNode {
                task: task.id(),
                children,
            }
        })
        .collect()
}
