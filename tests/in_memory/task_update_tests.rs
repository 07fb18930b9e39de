//! In-memory integration tests for partial task updates.

use super::helpers::{Harness, harness};
use rstest::rstest;
use task_filter::task::{
    domain::{DelegationState, Field, InvalidArgument, Task, UpdateRequest},
    ports::TaskStore,
    services::TaskQueryError,
};

async fn stored(harness: &Harness, task: &Task) -> Result<Task, eyre::Report> {
    harness
        .store
        .find_by_id(task.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task {} missing from store", task.id()))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn priority_only_update_changes_nothing_else(harness: Harness) -> Result<(), eyre::Report> {
    let before = harness.tasks.invoice.clone();
    let request = UpdateRequest {
        priority: Field::value(5),
        ..UpdateRequest::default()
    };

    harness.service.update_task(before.id(), &request).await?;
    let after = stored(&harness, &before).await?;

    let mut expected = before;
    expected.set_priority(Some(5));
    assert_eq!(after, expected);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn json_update_clears_and_sets_fields(harness: Harness) -> Result<(), eyre::Report> {
    let task = harness.tasks.contract.clone();
    let request: UpdateRequest = serde_json::from_str(
        r#"{"owner": null, "assignee": "piggy", "delegationState": "resolved"}"#,
    )?;

    harness.service.update_task(task.id(), &request).await?;
    let after = stored(&harness, &task).await?;

    eyre::ensure!(after.owner().is_none(), "owner should be cleared");
    assert_eq!(after.assignee(), Some("piggy"));
    assert_eq!(after.delegation_state(), Some(DelegationState::Resolved));
    assert_eq!(after.name(), task.name());
    assert_eq!(after.due_date(), task.due_date());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_update_leaves_stored_task_untouched(
    harness: Harness,
) -> Result<(), eyre::Report> {
    let task = harness.tasks.sub_task.clone();
    let request = UpdateRequest {
        name: Field::value("Renamed".to_owned()),
        delegation_state: Field::value("RESOLVED".to_owned()),
        ..UpdateRequest::default()
    };

    let result = harness.service.update_task(task.id(), &request).await;

    assert!(matches!(
        result,
        Err(TaskQueryError::InvalidArgument(
            InvalidArgument::InvalidDelegationState(_)
        ))
    ));
    assert_eq!(stored(&harness, &task).await?, task);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn parent_can_be_detached(harness: Harness) -> Result<(), eyre::Report> {
    let task = harness.tasks.sub_task.clone();
    let request = UpdateRequest {
        parent_task_id: Field::null(),
        ..UpdateRequest::default()
    };

    let updated = harness.service.update_task(task.id(), &request).await?;

    eyre::ensure!(
        updated.parent_task_id().is_none(),
        "parent should be detached"
    );
    assert_eq!(stored(&harness, &task).await?, updated);
    Ok(())
}
