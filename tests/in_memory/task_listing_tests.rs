//! Integration tests for listing semantics: filters and ordering.

use super::helpers::{TestService, new_task, service};
use rstest::rstest;
use std::thread;
use std::time::Duration;
use taskdesk::task::domain::{Task, TaskId, TaskPriority, TaskStatus};

/// Asserts exactly one task is found with the expected ID.
///
/// # Errors
///
/// Returns an error if the result set does not contain exactly one task
/// matching `expected_id`.
fn assert_single_task_found(found: &[Task], expected_id: TaskId) -> Result<(), eyre::Report> {
    eyre::ensure!(
        found.len() == 1,
        "expected exactly one task, found {}",
        found.len()
    );
    let task = found
        .first()
        .ok_or_else(|| eyre::eyre!("expected at least one task"))?;
    eyre::ensure!(task.id() == expected_id, "task ID mismatch");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_returns_most_recent_first(service: TestService) {
    let mut ids = Vec::new();
    for title in ["Oldest entry", "Middle entry", "Newest entry"] {
        let created = service
            .create_task(new_task(title))
            .await
            .expect("creation should succeed");
        ids.push(created.id());
        thread::sleep(Duration::from_millis(2));
    }
    ids.reverse();

    let listed = service
        .list_tasks(None, None)
        .await
        .expect("listing should succeed");
    let listed_ids: Vec<TaskId> = listed.iter().map(Task::id).collect();
    assert_eq!(listed_ids, ids);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn both_filters_must_match(service: TestService) -> Result<(), eyre::Report> {
    let target = service
        .create_task(
            new_task("Urgent and in progress")
                .with_priority(TaskPriority::Urgent)
                .with_status(TaskStatus::InProgress),
        )
        .await
        .expect("creation should succeed");
    service
        .create_task(new_task("Urgent but pending").with_priority(TaskPriority::Urgent))
        .await
        .expect("creation should succeed");
    service
        .create_task(
            new_task("In progress but medium").with_status(TaskStatus::InProgress),
        )
        .await
        .expect("creation should succeed");

    let listed = service
        .list_tasks(Some(TaskStatus::InProgress), Some(TaskPriority::Urgent))
        .await
        .expect("listing should succeed");

    assert_single_task_found(&listed, target.id())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unfiltered_listing_returns_everything(service: TestService) {
    for title in ["Entry one", "Entry two"] {
        service
            .create_task(new_task(title))
            .await
            .expect("creation should succeed");
    }

    let listed = service
        .list_tasks(None, None)
        .await
        .expect("listing should succeed");
    assert_eq!(listed.len(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn filters_on_empty_store_return_empty(service: TestService) {
    let listed = service
        .list_tasks(Some(TaskStatus::Cancelled), Some(TaskPriority::Low))
        .await
        .expect("listing should succeed");
    assert!(listed.is_empty());
}
