//! Tests for the two-tier unlock rule.

use super::fixtures::{category, depending, done, task};
use crate::progression::domain::{
    CategoryTasks, GateState, Progression, TaskId, is_unlocked, is_unlocked_gated,
};
use rstest::rstest;

#[rstest]
fn task_without_dependencies_is_unlocked() {
    let root = task(1, "main");
    assert!(is_unlocked(&root, std::slice::from_ref(&root)));
}

#[rstest]
#[case(&[false, false], false)]
#[case(&[true, false], false)]
#[case(&[false, true], false)]
#[case(&[true, true], true)]
fn task_unlocks_only_when_every_dependency_completes(
    #[case] completion: &[bool],
    #[case] expected: bool,
) {
    let mut scope: Vec<_> = completion
        .iter()
        .zip(1_u32..)
        .map(|(completed, id)| task(id, "main").with_completed(*completed))
        .collect();
    let dependent = depending(3, "main", &[1, 2]);
    scope.push(dependent.clone());

    assert_eq!(is_unlocked(&dependent, &scope), expected);
}

#[rstest]
fn missing_dependency_counts_as_incomplete() {
    let dependent = depending(2, "main", &[99]);
    let scope = vec![done(1, "main"), dependent.clone()];

    assert!(!is_unlocked(&dependent, &scope));
}

#[rstest]
fn incomplete_gate_locks_other_categories() {
    let gate = GateState::new(category("gate"), false);
    let root = task(101, "main");

    assert!(!is_unlocked_gated(&root, std::slice::from_ref(&root), Some(&gate)));
}

#[rstest]
fn incomplete_gate_leaves_its_own_tasks_to_dependencies() {
    let gate = GateState::new(category("gate"), false);
    let scope = vec![done(1, "gate"), depending(2, "gate", &[1])];
    let second = depending(2, "gate", &[1]);

    assert!(is_unlocked_gated(&second, &scope, Some(&gate)));
}

#[rstest]
fn complete_gate_defers_to_dependencies() {
    let gate = GateState::new(category("gate"), true);
    let root = task(101, "main");
    let blocked = depending(102, "main", &[101]);
    let scope = vec![root.clone(), blocked.clone()];

    assert!(is_unlocked_gated(&root, &scope, Some(&gate)));
    assert!(!is_unlocked_gated(&blocked, &scope, Some(&gate)));
}

#[rstest]
fn gate_state_evaluates_from_tasks() {
    let pending = GateState::evaluate(category("gate"), &[done(1, "gate"), task(2, "gate")]);
    let finished = GateState::evaluate(category("gate"), &[done(1, "gate")]);

    assert!(!pending.is_complete());
    assert!(pending.blocks(&category("main")));
    assert!(!pending.blocks(&category("gate")));
    assert!(finished.is_complete());
    assert!(!finished.blocks(&category("main")));
}

#[rstest]
fn progression_resolves_dependencies_across_categories() {
    let progression = Progression::new(
        None,
        None,
        vec![
            CategoryTasks::new(category("first"), vec![done(1, "first")]),
            CategoryTasks::new(category("second"), vec![depending(101, "second", &[1])]),
        ],
    );

    assert!(progression.is_unlocked(TaskId::new(101)));
}

#[rstest]
fn progression_applies_gate_before_dependencies() {
    let mut progression = Progression::new(
        None,
        Some(category("gate")),
        vec![
            CategoryTasks::new(category("gate"), vec![done(1, "gate"), depending(2, "gate", &[1])]),
            CategoryTasks::new(category("main"), vec![task(101, "main")]),
        ],
    );

    assert!(progression.is_unlocked(TaskId::new(2)));
    assert!(!progression.is_unlocked(TaskId::new(101)));

    assert!(progression.complete_task(TaskId::new(2)));
    assert!(progression.is_unlocked(TaskId::new(101)));
}
