//! Integration tests for task CRUD through the public service API.

use super::helpers::{TestService, new_task, service};
use rstest::rstest;
use std::thread;
use std::time::Duration;
use taskdesk::task::{
    domain::{TaskDescription, TaskId, TaskPatch, TaskPriority, TaskStatus, TaskTitle},
    services::TaskServiceError,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_is_immediately_retrievable(service: TestService) {
    let created = service
        .create_task(new_task("Prepare launch checklist"))
        .await
        .expect("creation should succeed");
    let fetched = service
        .get_task(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn titles_are_stored_trimmed(service: TestService) {
    let input = new_task("  Valid Task  ");
    let created = service
        .create_task(input)
        .await
        .expect("creation should succeed");
    assert_eq!(created.title().as_str(), "Valid Task");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_ids_are_unique(service: TestService) {
    let mut ids = Vec::new();
    for index in 0..5 {
        let created = service
            .create_task(new_task(&format!("Task number {index}")))
            .await
            .expect("creation should succeed");
        ids.push(created.id());
    }
    ids.sort_by_key(|id| *id.as_ref());
    ids.dedup();
    assert_eq!(ids.len(), 5);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_merges_and_clears_fields(service: TestService) {
    let created = service
        .create_task(
            new_task("Original")
                .with_description(
                    TaskDescription::new("initial description").expect("valid description"),
                )
                .with_priority(TaskPriority::Low),
        )
        .await
        .expect("creation should succeed");
    thread::sleep(Duration::from_millis(2));

    let updated = service
        .update_task(
            created.id(),
            TaskPatch::new()
                .with_status(TaskStatus::Completed)
                .with_description(None),
        )
        .await
        .expect("update should succeed");

    assert_eq!(updated.title().as_str(), "Original");
    assert_eq!(updated.priority(), TaskPriority::Low);
    assert_eq!(updated.status(), TaskStatus::Completed);
    assert!(updated.description().is_none());
    assert!(updated.updated_at() > updated.created_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn replacing_title_revalidates_it(service: TestService) {
    let created = service
        .create_task(new_task("Replace my title"))
        .await
        .expect("creation should succeed");

    let patch = TaskPatch::new()
        .with_title(TaskTitle::new("  Renamed Task  ").expect("valid title"));
    let updated = service
        .update_task(created.id(), patch)
        .await
        .expect("update should succeed");
    assert_eq!(updated.title().as_str(), "Renamed Task");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn operations_on_unknown_ids_report_not_found(service: TestService) {
    let id = TaskId::new();

    assert!(matches!(
        service.get_task(id).await,
        Err(TaskServiceError::NotFound(_))
    ));
    assert!(matches!(
        service.update_task(id, TaskPatch::new()).await,
        Err(TaskServiceError::NotFound(_))
    ));
    assert!(matches!(
        service.delete_task(id).await,
        Err(TaskServiceError::NotFound(_))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_acknowledgement_carries_the_id(service: TestService) {
    let created = service
        .create_task(new_task("Short lived"))
        .await
        .expect("creation should succeed");

    let deletion = service
        .delete_task(created.id())
        .await
        .expect("delete should succeed");
    assert_eq!(deletion.id(), created.id());

    let repeat = service.delete_task(created.id()).await;
    assert!(matches!(repeat, Err(TaskServiceError::NotFound(_))));
}
