//! Store port for query execution, pagination, and task persistence.

use crate::task::domain::{DataPage, PaginationParams, SortablePropertyRegistry, Task, TaskId};
use crate::task::ports::TaskQuery;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task store contract.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Query builder produced by this store.
    type Query: TaskQuery + Send;

    /// Creates an unconstrained query.
    fn create_query(&self) -> Self::Query;

    /// Executes `query` and assembles one page of results.
    ///
    /// The store owns sort-key validation against `properties`, falling back
    /// to `default_sort` when the caller did not choose a key.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::InvalidPagination`] when the pagination
    /// parameters are rejected, or [`TaskStoreError::Persistence`] when the
    /// query cannot be executed.
    async fn paginate(
        &self,
        params: &PaginationParams,
        query: Self::Query,
        default_sort: &str,
        properties: &SortablePropertyRegistry,
    ) -> TaskStoreResult<DataPage<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskStoreResult<Option<Task>>;

    /// Persists changes to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist.
    async fn update(&self, task: &Task) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The pagination parameters were rejected.
    #[error(transparent)]
    InvalidPagination(#[from] crate::task::domain::InvalidArgument),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
