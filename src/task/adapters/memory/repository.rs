//! Thread-safe in-memory task repository.

use async_trait::async_trait;
use mockable::Clock;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{NewTask, Task, TaskId, TaskPatch},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Volatile task repository keyed on [`TaskId`].
///
/// All mutations serialize behind a single write lock; reads share a read
/// lock. Nothing survives process exit. The adapter owns the clock so the
/// repository, as sole writer, stamps `created_at` and `updated_at`.
#[derive(Debug, Clone)]
pub struct InMemoryTaskRepository<C> {
    state: Arc<RwLock<InMemoryTaskState>>,
    clock: Arc<C>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    // Insertion log; `get_all` follows it so equal-timestamp tasks keep a
    // deterministic relative order under the service's stable sort.
    insertion_order: Vec<TaskId>,
}

impl<C> InMemoryTaskRepository<C>
where
    C: Clock,
{
    /// Creates an empty repository stamping timestamps from `clock`.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryTaskState::default())),
            clock,
        }
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl<C> TaskRepository for InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    async fn create(&self, new_task: NewTask) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let task = Task::create(new_task, &*self.clock);
        state.insertion_order.push(task.id());
        state.tasks.insert(task.id(), task.clone());
        Ok(task)
    }

    async fn get_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let tasks = state
            .insertion_order
            .iter()
            .filter_map(|id| state.tasks.get(id).cloned())
            .collect();
        Ok(tasks)
    }

    async fn get_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskRepositoryResult<Option<Task>> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let Some(task) = state.tasks.get_mut(&id) else {
            return Ok(None);
        };
        task.apply_patch(patch, &*self.clock);
        Ok(Some(task.clone()))
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let removed = state.tasks.remove(&id).is_some();
        if removed {
            state.insertion_order.retain(|stored| *stored != id);
        }
        Ok(removed)
    }
}
