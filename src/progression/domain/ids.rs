//! Identifier and validated key types for the progression domain.

use super::ProgressionDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a category or track key.
const MAX_KEY_LENGTH: usize = 64;

/// Integer task identifier, unique across one generated task universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u32);

impl TaskId {
    /// Creates a task identifier from its numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for TaskId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns `true` when `value` is a well-formed kebab-case key.
fn is_valid_key(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= MAX_KEY_LENGTH
        && !value.starts_with('-')
        && !value.ends_with('-')
        && value
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}

/// Validated name of a task category.
///
/// Keys are lowercase ASCII letters, digits and inner hyphens, for example
/// `initial-tasks` or `sfr`.
///
/// # Examples
///
///     use fundlaunch::progression::domain::CategoryKey;
///
///     let key = CategoryKey::new("initial-tasks").expect("valid");
///     assert_eq!(key.as_str(), "initial-tasks");
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryKey(String);

impl CategoryKey {
    /// Creates a validated category key.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressionDomainError::InvalidCategoryKey`] when the trimmed
    /// value is empty, too long, or contains characters outside
    /// `[a-z0-9-]`.
    pub fn new(value: impl Into<String>) -> Result<Self, ProgressionDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if !is_valid_key(normalized) {
            return Err(ProgressionDomainError::InvalidCategoryKey(raw));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CategoryKey {
    type Error = ProgressionDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategoryKey> for String {
    fn from(key: CategoryKey) -> Self {
        key.0
    }
}

impl AsRef<str> for CategoryKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated name of a selectable track.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TrackKey(String);

impl TrackKey {
    /// Creates a validated track key.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressionDomainError::InvalidTrackKey`] under the same
    /// rules as [`CategoryKey::new`].
    pub fn new(value: impl Into<String>) -> Result<Self, ProgressionDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if !is_valid_key(normalized) {
            return Err(ProgressionDomainError::InvalidTrackKey(raw));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TrackKey {
    type Error = ProgressionDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TrackKey> for String {
    fn from(key: TrackKey) -> Self {
        key.0
    }
}

impl AsRef<str> for TrackKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TrackKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
