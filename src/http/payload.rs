//! Request payload types and their conversion into validated domain inputs.

use crate::task::domain::{
    NewTask, TaskDescription, TaskDomainError, TaskPatch, TaskPriority, TaskStatus, TaskTitle,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// JSON body for `POST /tasks`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskBody {
    /// Raw title, validated during conversion.
    pub title: String,
    /// Raw description, validated during conversion.
    pub description: Option<String>,
    /// Priority; defaults to medium when absent.
    pub priority: Option<TaskPriority>,
    /// Status; defaults to pending when absent.
    pub status: Option<TaskStatus>,
    /// Free-text assignee.
    pub assigned_to: Option<String>,
    /// Due date.
    pub due_date: Option<DateTime<Utc>>,
}

impl TryFrom<CreateTaskBody> for NewTask {
    type Error = TaskDomainError;

    fn try_from(body: CreateTaskBody) -> Result<Self, Self::Error> {
        let mut new_task = Self::new(TaskTitle::new(body.title)?)
            .with_priority(body.priority.unwrap_or_default())
            .with_status(body.status.unwrap_or_default());
        if let Some(description) = body.description {
            new_task = new_task.with_description(TaskDescription::new(description)?);
        }
        if let Some(assigned_to) = body.assigned_to {
            new_task = new_task.with_assigned_to(assigned_to);
        }
        if let Some(due_date) = body.due_date {
            new_task = new_task.with_due_date(due_date);
        }
        Ok(new_task)
    }
}

/// JSON body for `PUT /tasks/{id}`.
///
/// Absent fields leave the stored value unchanged. For the clearable fields
/// an explicit `null` clears the stored value, which is why those fields use
/// the double-option pattern. An explicit `null` title is treated as absent;
/// a stored title cannot be cleared.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTaskBody {
    /// Replacement title, validated during conversion.
    pub title: Option<String>,
    /// Replacement or cleared description.
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    /// Replacement priority.
    pub priority: Option<TaskPriority>,
    /// Replacement status.
    pub status: Option<TaskStatus>,
    /// Replacement or cleared assignee.
    #[serde(default, deserialize_with = "double_option")]
    pub assigned_to: Option<Option<String>>,
    /// Replacement or cleared due date.
    #[serde(default, deserialize_with = "double_option")]
    pub due_date: Option<Option<DateTime<Utc>>>,
}

impl TryFrom<UpdateTaskBody> for TaskPatch {
    type Error = TaskDomainError;

    fn try_from(body: UpdateTaskBody) -> Result<Self, Self::Error> {
        let mut patch = Self::new();
        if let Some(title) = body.title {
            patch = patch.with_title(TaskTitle::new(title)?);
        }
        if let Some(description) = body.description {
            patch = patch.with_description(description.map(TaskDescription::new).transpose()?);
        }
        if let Some(priority) = body.priority {
            patch = patch.with_priority(priority);
        }
        if let Some(status) = body.status {
            patch = patch.with_status(status);
        }
        if let Some(assigned_to) = body.assigned_to {
            patch = patch.with_assigned_to(assigned_to);
        }
        if let Some(due_date) = body.due_date {
            patch = patch.with_due_date(due_date);
        }
        Ok(patch)
    }
}

/// Query parameters for `GET /tasks`.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListTasksQuery {
    /// Equality filter on status.
    pub status: Option<TaskStatus>,
    /// Equality filter on priority.
    pub priority: Option<TaskPriority>,
}

/// Marks a field as explicitly present, keeping `null` distinct from absent.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
