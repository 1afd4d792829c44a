//! When steps for skill tree progression BDD scenarios.

use super::world::ProgressionWorld;
use fundlaunch::progression::domain::{CategoryKey, TaskId};
use rstest_bdd_macros::when;

#[when("task {id:u32} is completed")]
fn complete_task(world: &mut ProgressionWorld, id: u32) -> Result<(), eyre::Report> {
    let changed = world.store_mut()?.complete_task(TaskId::new(id));
    world.last_change = Some(changed);
    Ok(())
}

#[when(r#"category "{key}" is reset"#)]
fn reset_category(world: &mut ProgressionWorld, key: String) -> Result<(), eyre::Report> {
    let category = CategoryKey::new(key)?;
    let changed = world.store_mut()?.reset_category(Some(&category));
    world.last_change = Some(changed);
    Ok(())
}

#[when("the progression store is reopened")]
fn reopen_store(world: &mut ProgressionWorld) -> Result<(), eyre::Report> {
    let catalog = world
        .catalog
        .clone()
        .ok_or_else(|| eyre::eyre!("no catalog to reopen the store with"))?;
    world.store = None;
    world.open(catalog);
    Ok(())
}
