//! Task entity and its pass-through interaction metadata.

use super::{CategoryKey, ProgressionDomainError, TaskId};
use serde::{Deserialize, Serialize};

/// Input kind of a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free-form single-line text.
    Text,
    /// Numeric input.
    Number,
    /// Email address input.
    Email,
    /// Phone number input.
    Phone,
    /// Choice among [`FormField::options`].
    Select,
    /// Multi-line text.
    Textarea,
}

/// One input of a dialog form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    /// Machine name the submitted value is keyed by.
    pub name: String,
    /// Human-readable prompt.
    pub label: String,
    /// Input kind.
    pub kind: FieldKind,
    /// Whether the UI must require a value.
    pub required: bool,
    /// Allowed values for [`FieldKind::Select`] fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl FormField {
    /// Creates a required field of the given kind without options.
    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: true,
            options: Vec::new(),
        }
    }

    /// Creates a required select field with the given options.
    #[must_use]
    pub fn select<I, S>(name: impl Into<String>, label: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            ..Self::new(name, label, FieldKind::Select)
        }
    }
}

/// Form schema shown by the UI before it completes a dialog task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSchema {
    /// Dialog title.
    pub title: String,
    /// Ordered input fields.
    pub fields: Vec<FormField>,
    /// Label for the submit button.
    pub submit_label: String,
}

impl FormSchema {
    /// Creates a form schema.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        fields: Vec<FormField>,
        submit_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            fields,
            submit_label: submit_label.into(),
        }
    }
}

/// How the UI lets the user complete a task.
///
/// The progression core carries this value through unchanged and never gates
/// completion on it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaskAction {
    /// Completion follows a submitted form.
    Dialog {
        /// Form to render.
        form: FormSchema,
    },
    /// Completion follows a visit to another screen.
    Navigation {
        /// Target route.
        route: String,
    },
    /// Plain completion button.
    #[default]
    Default,
}

impl TaskAction {
    /// Returns the discriminator used by the UI layer.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Dialog { .. } => "dialog",
            Self::Navigation { .. } => "navigation",
            Self::Default => "default",
        }
    }
}

/// Unit of progression.
///
/// `dependencies` decide unlock state; `parent_id` only places the task in the
/// display hierarchy. `completed` is the only field the store mutates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    #[serde(alias = "label")]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    points: u32,
    #[serde(default)]
    urgency: u32,
    #[serde(default)]
    dependencies: Vec<TaskId>,
    #[serde(default)]
    parent_id: Option<TaskId>,
    #[serde(default)]
    completed: bool,
    category: CategoryKey,
    #[serde(default)]
    action: TaskAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hint: Option<String>,
}

impl Task {
    /// Creates an incomplete root task with no metadata.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressionDomainError::EmptyTaskName`] when the name is
    /// blank.
    pub fn new(
        id: TaskId,
        category: CategoryKey,
        name: impl Into<String>,
    ) -> Result<Self, ProgressionDomainError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ProgressionDomainError::EmptyTaskName);
        }

        Ok(Self {
            id,
            name: trimmed.to_owned(),
            description: String::new(),
            points: 0,
            urgency: 0,
            dependencies: Vec::new(),
            parent_id: None,
            completed: false,
            category,
            action: TaskAction::Default,
            hint: None,
        })
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the reward points.
    #[must_use]
    pub const fn with_points(mut self, points: u32) -> Self {
        self.points = points;
        self
    }

    /// Sets the display urgency.
    #[must_use]
    pub const fn with_urgency(mut self, urgency: u32) -> Self {
        self.urgency = urgency;
        self
    }

    /// Sets the prerequisite task identifiers.
    #[must_use]
    pub fn with_dependencies(mut self, dependencies: impl IntoIterator<Item = TaskId>) -> Self {
        self.dependencies = dependencies.into_iter().collect();
        self
    }

    /// Sets the display parent.
    #[must_use]
    pub const fn with_parent(mut self, parent_id: Option<TaskId>) -> Self {
        self.parent_id = parent_id;
        self
    }

    /// Sets the initial completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Sets the interaction metadata.
    #[must_use]
    pub fn with_action(mut self, action: TaskAction) -> Self {
        self.action = action;
        self
    }

    /// Sets the hint text.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the explanatory text.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the informational reward value.
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// Returns the display urgency; higher sorts first among siblings.
    #[must_use]
    pub const fn urgency(&self) -> u32 {
        self.urgency
    }

    /// Returns the prerequisite task identifiers.
    #[must_use]
    pub fn dependencies(&self) -> &[TaskId] {
        &self.dependencies
    }

    /// Returns the display parent, if any.
    #[must_use]
    pub const fn parent_id(&self) -> Option<TaskId> {
        self.parent_id
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the owning category.
    #[must_use]
    pub const fn category(&self) -> &CategoryKey {
        &self.category
    }

    /// Returns the interaction metadata.
    #[must_use]
    pub const fn action(&self) -> &TaskAction {
        &self.action
    }

    /// Returns the hint text, if any.
    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Returns `true` when the task has no prerequisites.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.dependencies.is_empty()
    }

    /// Marks the task completed, returning whether the flag changed.
    pub(crate) const fn mark_completed(&mut self) -> bool {
        let changed = !self.completed;
        self.completed = true;
        changed
    }

    /// Sets the completion flag during an explicit reset.
    pub(crate) const fn reset_completion(&mut self, completed: bool) {
        self.completed = completed;
    }
}
