//! Error types for task domain validation and parsing.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is outside the permitted length range after trimming.
    #[error("task title must be between 3 and 100 characters after trimming, got {0}")]
    InvalidTitleLength(usize),

    /// The description exceeds the permitted length.
    #[error("task description must not exceed 500 characters, got {0}")]
    DescriptionTooLong(usize),

    /// The due date lies before the current time.
    #[error("due date {0} is in the past")]
    DueDateInPast(DateTime<Utc>),
}

/// Error returned while parsing task statuses from strings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities from strings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);
