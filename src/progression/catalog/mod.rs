//! Static task templates and their validated catalog.
//!
//! A catalog holds one optional gating category, zero or more fixed
//! categories that are always generated, and mutually exclusive tracks whose
//! categories are generated only when that track is selected.

pub mod fund;

use crate::progression::domain::{
    CategoryKey, FormSchema, ProgressionDomainError, TaskAction, TrackKey,
};
use std::collections::HashSet;
use thiserror::Error;

/// Template for one task of a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskTemplate {
    name: String,
    description: String,
    action: TaskAction,
    hint: Option<String>,
    depends_on: Option<Vec<usize>>,
}

impl TaskTemplate {
    /// Creates a template with default interaction and implicit dependencies.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            action: TaskAction::Default,
            hint: None,
            depends_on: None,
        }
    }

    /// Completes the task through a form dialog.
    #[must_use]
    pub fn dialog(mut self, form: FormSchema) -> Self {
        self.action = TaskAction::Dialog { form };
        self
    }

    /// Completes the task by visiting `route`.
    #[must_use]
    pub fn navigation(mut self, route: impl Into<String>) -> Self {
        self.action = TaskAction::Navigation {
            route: route.into(),
        };
        self
    }

    /// Sets the hint text.
    #[must_use]
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Overrides the implicit "previous entry" dependency with explicit
    /// 0-based positions within the same category.
    #[must_use]
    pub fn depends_on(mut self, positions: impl IntoIterator<Item = usize>) -> Self {
        self.depends_on = Some(positions.into_iter().collect());
        self
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the interaction metadata.
    #[must_use]
    pub const fn action(&self) -> &TaskAction {
        &self.action
    }

    /// Returns the hint text, if any.
    #[must_use]
    pub fn hint_text(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Returns the explicit dependency positions, if overridden.
    #[must_use]
    pub fn explicit_dependencies(&self) -> Option<&[usize]> {
        self.depends_on.as_deref()
    }
}

/// Ordered template of one category and the start of its id range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTemplate {
    key: CategoryKey,
    base_id: u32,
    tasks: Vec<TaskTemplate>,
}

impl CategoryTemplate {
    /// Creates a category template whose first task gets id `base_id`.
    #[must_use]
    pub const fn new(key: CategoryKey, base_id: u32, tasks: Vec<TaskTemplate>) -> Self {
        Self {
            key,
            base_id,
            tasks,
        }
    }

    /// Returns the category key.
    #[must_use]
    pub const fn key(&self) -> &CategoryKey {
        &self.key
    }

    /// Returns the id assigned to the first task.
    #[must_use]
    pub const fn base_id(&self) -> u32 {
        self.base_id
    }

    /// Returns the task templates in order.
    #[must_use]
    pub fn tasks(&self) -> &[TaskTemplate] {
        &self.tasks
    }

    fn id_range_end(&self) -> Option<u32> {
        self.base_id.checked_add(Catalog::RANGE_WIDTH)
    }
}

/// Selectable set of categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackTemplate {
    key: TrackKey,
    categories: Vec<CategoryTemplate>,
}

impl TrackTemplate {
    /// Creates a track template.
    #[must_use]
    pub const fn new(key: TrackKey, categories: Vec<CategoryTemplate>) -> Self {
        Self { key, categories }
    }

    /// Returns the track key.
    #[must_use]
    pub const fn key(&self) -> &TrackKey {
        &self.key
    }

    /// Returns the categories generated for this track.
    #[must_use]
    pub fn categories(&self) -> &[CategoryTemplate] {
        &self.categories
    }
}

/// Errors returned while validating a catalog.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A category or track key failed validation.
    #[error(transparent)]
    Domain(#[from] ProgressionDomainError),

    /// Two categories share a key.
    #[error("duplicate category key: {0}")]
    DuplicateCategory(CategoryKey),

    /// Two tracks share a key.
    #[error("duplicate track key: {0}")]
    DuplicateTrack(TrackKey),

    /// Two categories claim overlapping id ranges.
    #[error("id ranges of categories '{first}' and '{second}' overlap")]
    OverlappingIdRange {
        /// First category.
        first: CategoryKey,
        /// Second category.
        second: CategoryKey,
    },

    /// The id range would exceed `u32::MAX`.
    #[error("id range of category '{0}' overflows")]
    IdRangeOverflow(CategoryKey),

    /// A category holds more templates than its id range can number.
    #[error("category '{category}' has {len} tasks, more than the id range width")]
    CategoryTooLarge {
        /// Offending category.
        category: CategoryKey,
        /// Number of templates.
        len: usize,
    },

    /// An explicit dependency points past the end of its category.
    #[error("task {position} of category '{category}' depends on missing position {dependency}")]
    DependencyOutOfBounds {
        /// Owning category.
        category: CategoryKey,
        /// Position of the dependent task.
        position: usize,
        /// Referenced position.
        dependency: usize,
    },

    /// An explicit dependency points at the task itself.
    #[error("task {position} of category '{category}' depends on itself")]
    SelfDependency {
        /// Owning category.
        category: CategoryKey,
        /// Position of the task.
        position: usize,
    },
}

/// Validated collection of category and track templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    gate: Option<CategoryTemplate>,
    fixed: Vec<CategoryTemplate>,
    tracks: Vec<TrackTemplate>,
}

impl Catalog {
    /// Width of the id range reserved for each category.
    pub const RANGE_WIDTH: u32 = 100;

    /// Creates a validated catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when category or track keys repeat, id ranges
    /// overlap or overflow, a category outgrows its id range, or an explicit
    /// dependency does not point at another task of the same category.
    pub fn new(
        gate: Option<CategoryTemplate>,
        fixed: Vec<CategoryTemplate>,
        tracks: Vec<TrackTemplate>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            gate,
            fixed,
            tracks,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Returns the gating category template, if any.
    #[must_use]
    pub const fn gate(&self) -> Option<&CategoryTemplate> {
        self.gate.as_ref()
    }

    /// Returns the always-generated categories.
    #[must_use]
    pub fn fixed(&self) -> &[CategoryTemplate] {
        &self.fixed
    }

    /// Returns the selectable tracks.
    #[must_use]
    pub fn tracks(&self) -> &[TrackTemplate] {
        &self.tracks
    }

    /// Finds a track by key.
    #[must_use]
    pub fn track(&self, key: &TrackKey) -> Option<&TrackTemplate> {
        self.tracks.iter().find(|track| track.key() == key)
    }

    /// Returns the categories generated for `track`, in lookup order.
    ///
    /// Unknown tracks contribute no categories.
    #[must_use]
    pub fn categories_for(&self, track: Option<&TrackKey>) -> Vec<&CategoryTemplate> {
        let selected = track
            .and_then(|key| self.track(key))
            .map(TrackTemplate::categories)
            .unwrap_or_default();
        self.gate
            .iter()
            .chain(self.fixed.iter())
            .chain(selected.iter())
            .collect()
    }

    fn all_categories(&self) -> impl Iterator<Item = &CategoryTemplate> {
        self.gate
            .iter()
            .chain(self.fixed.iter())
            .chain(self.tracks.iter().flat_map(|track| track.categories.iter()))
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut track_keys = HashSet::new();
        for track in &self.tracks {
            if !track_keys.insert(track.key()) {
                return Err(CatalogError::DuplicateTrack(track.key().clone()));
            }
        }

        let mut category_keys = HashSet::new();
        let mut ranges: Vec<(&CategoryKey, u32, u32)> = Vec::new();
        for category in self.all_categories() {
            if !category_keys.insert(category.key()) {
                return Err(CatalogError::DuplicateCategory(category.key().clone()));
            }
            let end = category
                .id_range_end()
                .ok_or_else(|| CatalogError::IdRangeOverflow(category.key().clone()))?;
            if let Some((other, _, _)) = ranges
                .iter()
                .find(|(_, start, stop)| category.base_id() < *stop && *start < end)
            {
                return Err(CatalogError::OverlappingIdRange {
                    first: (*other).clone(),
                    second: category.key().clone(),
                });
            }
            ranges.push((category.key(), category.base_id(), end));
            validate_category(category)?;
        }
        Ok(())
    }
}

fn validate_category(category: &CategoryTemplate) -> Result<(), CatalogError> {
    let len = category.tasks().len();
    if !u32::try_from(len).is_ok_and(|count| count <= Catalog::RANGE_WIDTH) {
        return Err(CatalogError::CategoryTooLarge {
            category: category.key().clone(),
            len,
        });
    }

    for (position, template) in category.tasks().iter().enumerate() {
        if template.name().trim().is_empty() {
            return Err(ProgressionDomainError::EmptyTaskName.into());
        }
        let Some(dependencies) = template.explicit_dependencies() else {
            continue;
        };
        for &dependency in dependencies {
            if dependency == position {
                return Err(CatalogError::SelfDependency {
                    category: category.key().clone(),
                    position,
                });
            }
            if dependency >= len {
                return Err(CatalogError::DependencyOutOfBounds {
                    category: category.key().clone(),
                    position,
                    dependency,
                });
            }
        }
    }
    Ok(())
}
