//! Materialises catalog templates into concrete tasks.

use crate::progression::{
    catalog::{Catalog, CategoryTemplate},
    domain::{CategoryKey, CategoryTasks, Progression, Task, TaskId, TrackKey},
    ports::{MAX_POINT_BONUS, PointBonus},
};
use tracing::warn;

/// Points awarded to the first task of a category before any bonus.
pub const BASE_POINTS: u32 = 10;

/// Points added per position within a category.
pub const POINTS_PER_POSITION: u32 = 5;

/// Builds progression state from a validated [`Catalog`].
///
/// Generated tasks follow fixed rules: ids count up from the category's base
/// id, each task depends on and is parented by the previous entry unless the
/// template overrides dependencies, urgency is the 1-based position, and points
/// grow with position plus a bounded bonus.
#[derive(Debug, Clone)]
pub struct TaskGenerator<B> {
    catalog: Catalog,
    bonus: B,
    seed_gate_first_task: bool,
}

impl<B: PointBonus> TaskGenerator<B> {
    /// Creates a generator that seeds the gate's first task as completed.
    #[must_use]
    pub const fn new(catalog: Catalog, bonus: B) -> Self {
        Self {
            catalog,
            bonus,
            seed_gate_first_task: true,
        }
    }

    /// Sets whether the gating category's first task starts completed.
    ///
    /// [`ProgressionStore::open`](super::ProgressionStore::open) overrides
    /// this with its configuration.
    #[must_use]
    pub const fn with_gate_seed(mut self, seed: bool) -> Self {
        self.seed_gate_first_task = seed;
        self
    }

    /// Returns the catalog backing this generator.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns whether the gate's first task is seeded as completed.
    #[must_use]
    pub const fn seeds_gate(&self) -> bool {
        self.seed_gate_first_task
    }

    /// Resolves `track` against the catalog, dropping unknown keys.
    #[must_use]
    pub fn known_track(&self, track: Option<&TrackKey>) -> Option<TrackKey> {
        let key = track?;
        if self.catalog.track(key).is_some() {
            return Some(key.clone());
        }
        warn!(track = %key, "unknown track; generating without a track");
        None
    }

    /// Generates a complete progression for `track`.
    ///
    /// Every task starts incomplete except, when seeding is enabled, the first
    /// task of the gating category. An unknown track generates the gate and
    /// fixed categories only.
    pub fn generate(&mut self, track: Option<&TrackKey>) -> Progression {
        let selected = self.known_track(track);
        let gate = self.catalog.gate().map(|category| category.key().clone());
        let templates: Vec<CategoryTemplate> = self
            .catalog
            .categories_for(selected.as_ref())
            .into_iter()
            .cloned()
            .collect();
        let categories = templates
            .iter()
            .map(|template| {
                let tasks = self.materialise(template);
                CategoryTasks::new(template.key().clone(), tasks)
            })
            .collect();
        Progression::new(selected, gate, categories)
    }

    /// Generates fresh tasks for one category under `track`.
    ///
    /// Returns `None` when the category is not generated for that track.
    pub fn generate_category(
        &mut self,
        key: &CategoryKey,
        track: Option<&TrackKey>,
    ) -> Option<Vec<Task>> {
        let template = self
            .catalog
            .categories_for(track)
            .into_iter()
            .find(|template| template.key() == key)
            .cloned()?;
        Some(self.materialise(&template))
    }

    fn materialise(&mut self, template: &CategoryTemplate) -> Vec<Task> {
        let is_gate = self
            .catalog
            .gate()
            .is_some_and(|gate| gate.key() == template.key());
        let base = template.base_id();
        (0_u32..)
            .zip(template.tasks())
            .filter_map(|(offset, entry)| {
                let id = TaskId::new(base.saturating_add(offset));
                let previous = offset
                    .checked_sub(1)
                    .map(|prior| TaskId::new(base.saturating_add(prior)));
                let dependencies: Vec<TaskId> = entry.explicit_dependencies().map_or_else(
                    || previous.into_iter().collect(),
                    |positions| {
                        positions
                            .iter()
                            .filter_map(|position| u32::try_from(*position).ok())
                            .map(|position| TaskId::new(base.saturating_add(position)))
                            .collect()
                    },
                );
                let bonus = self.bonus.next_bonus().min(MAX_POINT_BONUS);
                let points = BASE_POINTS
                    .saturating_add(POINTS_PER_POSITION.saturating_mul(offset))
                    .saturating_add(bonus);
                let completed = is_gate && self.seed_gate_first_task && offset == 0;

                let blank = match Task::new(id, template.key().clone(), entry.name()) {
                    Ok(task) => task,
                    Err(err) => {
                        warn!(task_id = %id, error = %err, "skipping invalid task template");
                        return None;
                    }
                };
                let task = blank
                    .with_description(entry.description())
                    .with_points(points)
                    .with_urgency(offset.saturating_add(1))
                    .with_dependencies(dependencies)
                    .with_parent(previous)
                    .with_completed(completed)
                    .with_action(entry.action().clone());
                Some(
                    entry
                        .hint_text()
                        .into_iter()
                        .fold(task, |hinted, hint| hinted.with_hint(hint)),
                )
            })
            .collect()
    }
}
