//! HTTP boundary for the task service.
//!
//! Parses requests, invokes the service, and maps results and typed failures
//! to status codes. Endpoints:
//!
//! ```text
//! GET    /              service banner
//! GET    /health        liveness probe with task count
//! POST   /tasks         create a task (201)
//! GET    /tasks         list tasks, ?status= and ?priority= filters
//! GET    /tasks/{id}    fetch one task
//! PUT    /tasks/{id}    partial update
//! DELETE /tasks/{id}    delete with acknowledgement
//! ```
//!
//! Payload shape and field constraints are enforced here, before the service
//! is reached; the permissive CORS layer mirrors the deployment targets of
//! the service (browser frontends on other origins).

pub mod error;
pub mod payload;
pub mod routes;

use crate::task::{ports::TaskRepository, services::TaskService};
use axum::{Router, routing::get};
use mockable::Clock;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Builds the application router over any repository backend.
pub fn build_router<R, C>(service: Arc<TaskService<R, C>>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(routes::root))
        .route("/health", get(routes::health::<R, C>))
        .route(
            "/tasks",
            get(routes::list_tasks::<R, C>).post(routes::create_task::<R, C>),
        )
        .route(
            "/tasks/{id}",
            get(routes::get_task::<R, C>)
                .put(routes::update_task::<R, C>)
                .delete(routes::delete_task::<R, C>),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(service)
}

/// Binds `addr` and serves the task API until the process exits.
///
/// # Errors
///
/// Returns an error when the listener cannot bind or the server loop fails.
pub async fn serve<R, C>(addr: SocketAddr, service: Arc<TaskService<R, C>>) -> std::io::Result<()>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let router = build_router(service);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("task API listening on http://{addr}");
    axum::serve(listener, router).await
}
