//! Error types for progression domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing progression domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProgressionDomainError {
    /// The category key is empty or malformed.
    #[error("invalid category key '{0}', expected lowercase letters, digits and hyphens")]
    InvalidCategoryKey(String),

    /// The track key is empty or malformed.
    #[error("invalid track key '{0}', expected lowercase letters, digits and hyphens")]
    InvalidTrackKey(String),

    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,
}

/// Error returned while parsing a fund track from user input or storage.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown fund track: {0}")]
pub struct ParseFundTrackError(pub String);
