//! Tests for display tree construction.

use super::fixtures::{depending, task};
use crate::progression::domain::{Task, TaskId, TreeNode, build_tree, build_tree_under};
use rstest::rstest;

fn child(id: u32, parent: u32, urgency: u32) -> Task {
    task(id, "main")
        .with_parent(Some(TaskId::new(parent)))
        .with_urgency(urgency)
}

fn ids(nodes: &[TreeNode]) -> Vec<u32> {
    nodes.iter().map(|node| node.task.value()).collect()
}

#[rstest]
fn roots_are_tasks_without_parent() {
    let tasks = vec![task(1, "main"), child(2, 1, 1), task(3, "main")];

    let forest = build_tree(&tasks);

    assert_eq!(ids(&forest), vec![1, 3]);
    assert_eq!(forest.iter().map(TreeNode::len).sum::<usize>(), 3);
}

#[rstest]
fn siblings_sort_by_descending_urgency() {
    let tasks = vec![
        task(1, "main"),
        child(2, 1, 1),
        child(3, 1, 5),
        child(4, 1, 3),
    ];

    let forest = build_tree(&tasks);
    let root = forest.first().expect("one root");

    assert_eq!(ids(&root.children), vec![3, 4, 2]);
}

#[rstest]
fn equal_urgency_keeps_input_order() {
    let tasks = vec![
        task(1, "main"),
        child(4, 1, 2),
        child(2, 1, 2),
        child(3, 1, 2),
    ];

    let forest = build_tree(&tasks);
    let root = forest.first().expect("one root");

    assert_eq!(ids(&root.children), vec![4, 2, 3]);
}

#[rstest]
fn linear_chain_nests_each_task_under_the_previous() {
    let tasks = vec![task(101, "main"), child(102, 101, 2), child(103, 102, 3)];

    let forest = build_tree(&tasks);

    assert_eq!(forest.len(), 1);
    let root = forest.first().expect("one root");
    assert_eq!(root.depth(), 3);
    let mut visited = Vec::new();
    root.walk(0, &mut |id, depth| visited.push((id.value(), depth)));
    assert_eq!(visited, vec![(101, 0), (102, 1), (103, 2)]);
}

#[rstest]
fn tree_ignores_dependencies() {
    let tasks = vec![
        task(1, "main"),
        depending(2, "main", &[1]),
        depending(3, "main", &[1, 2]),
    ];

    let forest = build_tree(&tasks);

    assert_eq!(ids(&forest), vec![1, 2, 3]);
    assert!(forest.iter().all(|node| node.children.is_empty()));
}

#[rstest]
fn orphans_with_missing_parent_are_omitted() {
    let tasks = vec![task(1, "main"), child(2, 50, 1)];

    assert_eq!(ids(&build_tree(&tasks)), vec![1]);
}

#[rstest]
fn parent_cycles_terminate() {
    let tasks = vec![child(1, 2, 1), child(2, 1, 1)];

    assert!(build_tree(&tasks).is_empty());

    let under_one = build_tree_under(&tasks, Some(TaskId::new(1)));
    let node = under_one.first().expect("task 2 is a child of 1");
    assert_eq!(node.task, TaskId::new(2));
    assert_eq!(ids(&node.children), vec![1]);
    assert!(
        node.children
            .first()
            .is_some_and(|inner| inner.children.is_empty())
    );
}

#[rstest]
fn empty_input_builds_empty_forest() {
    assert!(build_tree(&[]).is_empty());
}
