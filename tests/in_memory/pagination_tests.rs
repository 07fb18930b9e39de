//! In-memory integration tests for sorting and paging of query results.

use super::helpers::{Harness, harness, names};
use rstest::rstest;
use task_filter::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{FilterRequest, InvalidArgument, PaginationConfig, PaginationParams, SortOrder},
    ports::TaskStoreError,
    services::{TaskQueryError, TaskQueryService},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sorts_by_registered_property(harness: Harness) -> Result<(), eyre::Report> {
    let params = PaginationParams::default()
        .with_sort("priority")
        .with_order("desc");
    let page = harness
        .service
        .query_tasks(&FilterRequest::default(), &params)
        .await?;

    assert_eq!(
        names(&page.data),
        vec![
            "Approve invoice",
            "Approve expenses",
            "Review contract",
            "Attach receipts"
        ]
    );
    assert_eq!(page.sort, "priority");
    assert_eq!(page.order, SortOrder::Desc);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn windows_results_with_start_and_size(harness: Harness) -> Result<(), eyre::Report> {
    let params = PaginationParams::default()
        .with_sort("createTime")
        .with_start(1)
        .with_size(2);
    let page = harness
        .service
        .query_tasks(&FilterRequest::default(), &params)
        .await?;

    assert_eq!(names(&page.data), vec!["Review contract", "Approve expenses"]);
    assert_eq!(page.total, 4);
    assert_eq!(page.start, 1);
    assert_eq!(page.size, 2);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn start_past_the_end_yields_an_empty_page(harness: Harness) -> Result<(), eyre::Report> {
    let params = PaginationParams::default().with_start(10);
    let page = harness
        .service
        .query_tasks(&FilterRequest::default(), &params)
        .await?;

    assert!(page.data.is_empty());
    assert_eq!(page.total, 4);
    assert_eq!(page.size, 0);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn configured_default_page_size_applies(harness: Harness) -> Result<(), eyre::Report> {
    let store = InMemoryTaskStore::with_config(PaginationConfig {
        default_page_size: 2,
    });
    for task in [
        &harness.tasks.invoice,
        &harness.tasks.contract,
        &harness.tasks.expenses,
    ] {
        store.insert(task.clone())?;
    }
    let service = TaskQueryService::new(std::sync::Arc::new(store));

    let page = service
        .query_tasks(&FilterRequest::default(), &PaginationParams::default())
        .await?;

    assert_eq!(page.data.len(), 2);
    assert_eq!(page.total, 3);
    Ok(())
}

#[rstest]
#[case(PaginationParams::default().with_sort("assignee"))]
#[case(PaginationParams::default().with_sort("ID"))]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_sort_keys_are_rejected(harness: Harness, #[case] params: PaginationParams) {
    let result = harness
        .service
        .query_tasks(&FilterRequest::default(), &params)
        .await;

    assert!(matches!(
        result,
        Err(TaskQueryError::Store(TaskStoreError::InvalidPagination(
            InvalidArgument::InvalidSortProperty(_)
        )))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_sort_order_is_rejected(harness: Harness) {
    let params = PaginationParams::default().with_order("sideways");
    let result = harness
        .service
        .query_tasks(&FilterRequest::default(), &params)
        .await;

    assert!(matches!(
        result,
        Err(TaskQueryError::Store(TaskStoreError::InvalidPagination(
            InvalidArgument::InvalidSortOrder(order)
        ))) if order == "sideways"
    ));
}
