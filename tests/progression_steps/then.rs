//! Then steps for skill tree progression BDD scenarios.

use super::world::ProgressionWorld;
use fundlaunch::progression::domain::{CategoryKey, TaskId};
use rstest_bdd_macros::then;

#[then("task {id:u32} is unlocked")]
fn task_is_unlocked(world: &ProgressionWorld, id: u32) -> Result<(), eyre::Report> {
    if !world.store()?.is_unlocked(TaskId::new(id)) {
        return Err(eyre::eyre!("expected task {id} to be unlocked"));
    }
    Ok(())
}

#[then("task {id:u32} is locked")]
fn task_is_locked(world: &ProgressionWorld, id: u32) -> Result<(), eyre::Report> {
    if world.store()?.is_unlocked(TaskId::new(id)) {
        return Err(eyre::eyre!("expected task {id} to be locked"));
    }
    Ok(())
}

#[then("task {id:u32} is done")]
fn task_is_done(world: &ProgressionWorld, id: u32) -> Result<(), eyre::Report> {
    let task = world
        .store()?
        .task(TaskId::new(id))
        .ok_or_else(|| eyre::eyre!("task {id} does not exist"))?;
    if !task.is_completed() {
        return Err(eyre::eyre!("expected task {id} to be completed"));
    }
    Ok(())
}

#[then("task {id:u32} depends on task {dependency:u32}")]
fn task_depends_on(world: &ProgressionWorld, id: u32, dependency: u32) -> Result<(), eyre::Report> {
    let task = world
        .store()?
        .task(TaskId::new(id))
        .ok_or_else(|| eyre::eyre!("task {id} does not exist"))?;
    if task.dependencies() != [TaskId::new(dependency)] {
        return Err(eyre::eyre!(
            "expected task {id} to depend only on {dependency}, found {:?}",
            task.dependencies()
        ));
    }
    Ok(())
}

#[then(r#"category "{key}" is complete"#)]
fn category_is_complete(world: &ProgressionWorld, key: String) -> Result<(), eyre::Report> {
    let category = CategoryKey::new(key)?;
    let progress = world.store()?.category_progress(&category);
    if !progress.is_complete() {
        return Err(eyre::eyre!(
            "expected category {category} to be complete, found {}/{}",
            progress.completed,
            progress.total
        ));
    }
    Ok(())
}

#[then(r#"category "{key}" has {completed:usize} of {total:usize} tasks completed"#)]
fn category_has_progress(
    world: &ProgressionWorld,
    key: String,
    completed: usize,
    total: usize,
) -> Result<(), eyre::Report> {
    let category = CategoryKey::new(key)?;
    let progress = world.store()?.category_progress(&category);
    if progress.completed != completed || progress.total != total {
        return Err(eyre::eyre!(
            "expected {completed}/{total} in category {category}, found {}/{}",
            progress.completed,
            progress.total
        ));
    }
    Ok(())
}

#[then("the last completion left state unchanged")]
fn last_completion_unchanged(world: &ProgressionWorld) -> Result<(), eyre::Report> {
    match world.last_change {
        Some(false) => Ok(()),
        Some(true) => Err(eyre::eyre!("expected the last mutation to be a no-op")),
        None => Err(eyre::eyre!("no mutation has been recorded")),
    }
}

#[then(r#"the display tree of "{key}" has depth {depth:usize}"#)]
fn display_tree_depth(
    world: &ProgressionWorld,
    key: String,
    depth: usize,
) -> Result<(), eyre::Report> {
    let category = CategoryKey::new(key)?;
    let forest = world.store()?.tree_for(&category);
    let [root] = forest.as_slice() else {
        return Err(eyre::eyre!(
            "expected a single root in {category}, found {}",
            forest.len()
        ));
    };
    if root.depth() != depth {
        return Err(eyre::eyre!(
            "expected tree depth {depth}, found {}",
            root.depth()
        ));
    }
    Ok(())
}
