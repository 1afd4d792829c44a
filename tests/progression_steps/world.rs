//! Shared world state for skill tree progression BDD scenarios.

use std::sync::Arc;

use fundlaunch::progression::{
    adapters::{bonus::FixedPointBonus, memory::InMemorySlot},
    catalog::{Catalog, CategoryTemplate, TaskTemplate},
    config::ProgressionConfig,
    domain::CategoryKey,
    services::{ProgressionStore, TaskGenerator},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Store type used by the BDD world.
pub type TestStore = ProgressionStore<InMemorySlot, FixedPointBonus, DefaultClock>;

/// Scenario world for progression behaviour tests.
pub struct ProgressionWorld {
    pub slot: Arc<InMemorySlot>,
    pub gate: Option<CategoryTemplate>,
    pub fixed: Vec<CategoryTemplate>,
    pub catalog: Option<Catalog>,
    pub store: Option<TestStore>,
    pub last_change: Option<bool>,
}

impl ProgressionWorld {
    /// Creates a world with an empty slot and no categories.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: Arc::new(InMemorySlot::new()),
            gate: None,
            fixed: Vec::new(),
            catalog: None,
            store: None,
            last_change: None,
        }
    }

    /// Opens a store over the shared slot using `catalog`.
    pub fn open(&mut self, catalog: Catalog) {
        let generator = TaskGenerator::new(catalog.clone(), FixedPointBonus(0));
        self.store = Some(ProgressionStore::open(
            Arc::clone(&self.slot),
            generator,
            Arc::new(DefaultClock),
            ProgressionConfig::default(),
        ));
        self.catalog = Some(catalog);
    }

    /// Returns the open store.
    pub fn store(&self) -> Result<&TestStore, eyre::Report> {
        self.store
            .as_ref()
            .ok_or_else(|| eyre::eyre!("progression store has not been opened"))
    }

    /// Returns the open store mutably.
    pub fn store_mut(&mut self) -> Result<&mut TestStore, eyre::Report> {
        self.store
            .as_mut()
            .ok_or_else(|| eyre::eyre!("progression store has not been opened"))
    }
}

impl Default for ProgressionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a category of `count` chained tasks whose first id is `base`.
pub fn chained_category(
    key: &str,
    count: usize,
    base: u32,
) -> Result<CategoryTemplate, eyre::Report> {
    let category = CategoryKey::new(key)?;
    let tasks = (1..=count)
        .map(|index| TaskTemplate::new(format!("{key} step {index}"), ""))
        .collect();
    Ok(CategoryTemplate::new(category, base, tasks))
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ProgressionWorld {
    ProgressionWorld::default()
}
