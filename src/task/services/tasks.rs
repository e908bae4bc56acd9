//! Service layer for task CRUD, filtering, and business rules.

use crate::task::{
    domain::{NewTask, Task, TaskDomainError, TaskId, TaskPatch, TaskPriority, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// A business rule rejected the input.
    #[error("validation failed: {0}")]
    Validation(#[source] TaskDomainError),

    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Storage operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Acknowledgement returned after a successful delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskDeletion {
    id: TaskId,
}

impl TaskDeletion {
    /// Returns the identifier of the removed task.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }
}

impl fmt::Display for TaskDeletion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Task {} deleted successfully", self.id)
    }
}

/// Task orchestration service.
///
/// Wraps a repository with business rules and query semantics, and elevates
/// repository absence into [`TaskServiceError::NotFound`].
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a task service over the given repository and clock.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a new task.
    ///
    /// The due date, when present, must not lie strictly before the current
    /// time. This rule is checked at creation only; updates deliberately
    /// skip it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] for a past due date, or
    /// [`TaskServiceError::Repository`] when storage fails.
    pub async fn create_task(&self, new_task: NewTask) -> TaskServiceResult<Task> {
        if let Some(due_date) = new_task.due_date() {
            if due_date < self.clock.utc() {
                return Err(TaskServiceError::Validation(TaskDomainError::DueDateInPast(
                    due_date,
                )));
            }
        }
        Ok(self.repository.create(new_task).await?)
    }

    /// Lists tasks, most recently created first.
    ///
    /// The status and priority filters are independent equality filters and
    /// compose when both are given. The sort is stable, so tasks sharing a
    /// creation timestamp keep their insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when storage fails.
    pub async fn list_tasks(
        &self,
        status: Option<TaskStatus>,
        priority: Option<TaskPriority>,
    ) -> TaskServiceResult<Vec<Task>> {
        let mut tasks = self.repository.get_all().await?;
        if let Some(status) = status {
            tasks.retain(|task| task.status() == status);
        }
        if let Some(priority) = priority {
            tasks.retain(|task| task.priority() == priority);
        }
        tasks.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(tasks)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] for an unknown identifier, or
    /// [`TaskServiceError::Repository`] when storage fails.
    pub async fn get_task(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
    }

    /// Applies a partial update to an existing task.
    ///
    /// Fields absent from the patch are preserved; present fields overwrite.
    /// The due-date rule from creation is not re-checked here.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] for an unknown identifier, or
    /// [`TaskServiceError::Repository`] when storage fails.
    pub async fn update_task(&self, id: TaskId, patch: TaskPatch) -> TaskServiceResult<Task> {
        self.repository
            .update(id, patch)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
    }

    /// Deletes a task and acknowledges with the removed identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] for an unknown identifier, or
    /// [`TaskServiceError::Repository`] when storage fails.
    pub async fn delete_task(&self, id: TaskId) -> TaskServiceResult<TaskDeletion> {
        if self.repository.delete(id).await? {
            Ok(TaskDeletion { id })
        } else {
            Err(TaskServiceError::NotFound(id))
        }
    }
}
