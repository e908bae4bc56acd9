//! Shared test helpers for in-memory task service integration tests.

use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;
use taskdesk::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{NewTask, TaskTitle},
    services::TaskService,
};

/// Service wired to a fresh in-memory repository.
pub type TestService = TaskService<InMemoryTaskRepository<DefaultClock>, DefaultClock>;

/// Provides a fresh service for each test.
#[fixture]
pub fn service() -> TestService {
    let clock = Arc::new(DefaultClock);
    TaskService::new(
        Arc::new(InMemoryTaskRepository::new(Arc::clone(&clock))),
        clock,
    )
}

/// Builds a minimal creation input with the given title.
pub fn new_task(title: &str) -> NewTask {
    NewTask::new(TaskTitle::new(title).expect("valid title"))
}
