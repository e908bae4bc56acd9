//! Repository port for task persistence and lookup.

use crate::task::domain::{NewTask, Task, TaskId, TaskPatch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Absence is a value at this layer: lookups and mutations on unknown
/// identifiers report `None`/`false` rather than an error. Only the service
/// elevates absence into a not-found failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// Generates a fresh unique identifier and stamps creation and update
    /// timestamps before storing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the backing store
    /// fails.
    async fn create(&self, new_task: NewTask) -> TaskRepositoryResult<Task>;

    /// Returns every stored task in insertion order.
    ///
    /// Presentation ordering is the service's responsibility.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the backing store
    /// fails.
    async fn get_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the backing store
    /// fails.
    async fn get_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Merges present patch fields onto an existing task.
    ///
    /// Refreshes the update timestamp and returns the merged task, or `None`
    /// when the identifier is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the backing store
    /// fails.
    async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskRepositoryResult<Option<Task>>;

    /// Removes a task.
    ///
    /// Returns `true` when a record existed and was removed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the backing store
    /// fails.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
