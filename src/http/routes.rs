//! Route handlers for the task resource.

use super::error::{payload_error, service_error};
use super::payload::{CreateTaskBody, ListTasksQuery, UpdateTaskBody};
use crate::task::{
    domain::{NewTask, Task, TaskId, TaskPatch},
    ports::TaskRepository,
    services::TaskService,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use mockable::Clock;
use serde_json::{Value, json};
use std::sync::Arc;
use uuid::Uuid;

type ErrorResponse = (StatusCode, Json<Value>);

/// `GET /` service banner.
pub async fn root() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// `GET /health` liveness probe.
pub async fn health<R, C>(
    State(service): State<Arc<TaskService<R, C>>>,
) -> Result<Json<Value>, ErrorResponse>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let tasks = service
        .list_tasks(None, None)
        .await
        .map_err(|err| service_error(&err))?;
    Ok(Json(json!({
        "status": "ok",
        "timestamp": Utc::now(),
        "total_tasks": tasks.len(),
    })))
}

/// `POST /tasks` creates a task.
pub async fn create_task<R, C>(
    State(service): State<Arc<TaskService<R, C>>>,
    Json(body): Json<CreateTaskBody>,
) -> Result<(StatusCode, Json<Task>), ErrorResponse>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let new_task = NewTask::try_from(body).map_err(|err| payload_error(&err))?;
    let task = service
        .create_task(new_task)
        .await
        .map_err(|err| service_error(&err))?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// `GET /tasks` lists tasks with optional filters.
pub async fn list_tasks<R, C>(
    State(service): State<Arc<TaskService<R, C>>>,
    Query(query): Query<ListTasksQuery>,
) -> Result<Json<Vec<Task>>, ErrorResponse>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let tasks = service
        .list_tasks(query.status, query.priority)
        .await
        .map_err(|err| service_error(&err))?;
    Ok(Json(tasks))
}

/// `GET /tasks/{id}` fetches one task.
pub async fn get_task<R, C>(
    State(service): State<Arc<TaskService<R, C>>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Task>, ErrorResponse>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let task = service
        .get_task(TaskId::from_uuid(id))
        .await
        .map_err(|err| service_error(&err))?;
    Ok(Json(task))
}

/// `PUT /tasks/{id}` merges present fields onto an existing task.
pub async fn update_task<R, C>(
    State(service): State<Arc<TaskService<R, C>>>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateTaskBody>,
) -> Result<Json<Task>, ErrorResponse>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let patch = TaskPatch::try_from(body).map_err(|err| payload_error(&err))?;
    let task = service
        .update_task(TaskId::from_uuid(id), patch)
        .await
        .map_err(|err| service_error(&err))?;
    Ok(Json(task))
}

/// `DELETE /tasks/{id}` removes a task and acknowledges with its id.
pub async fn delete_task<R, C>(
    State(service): State<Arc<TaskService<R, C>>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ErrorResponse>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let deletion = service
        .delete_task(TaskId::from_uuid(id))
        .await
        .map_err(|err| service_error(&err))?;
    Ok(Json(json!({
        "id": deletion.id(),
        "message": deletion.to_string(),
    })))
}
