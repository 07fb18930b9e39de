//! Service layer for filtered task listings and partial task updates.

use super::{filter::translate_filter, update::apply_update};
use crate::task::{
    domain::{
        DataPage, FilterRequest, InvalidArgument, PaginationParams, Task, TaskId, UpdateRequest,
        task_properties,
    },
    ports::{TaskStore, TaskStoreError},
};
use std::sync::Arc;
use thiserror::Error;

/// Sort key applied when the caller does not choose one.
pub const DEFAULT_SORT_KEY: &str = "id";

/// Service-level errors for task query and update operations.
#[derive(Debug, Error)]
pub enum TaskQueryError {
    /// The request was rejected.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
    /// The task to update does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for task query service operations.
pub type TaskQueryResult<T> = Result<T, TaskQueryError>;

/// Task query and update orchestration service.
#[derive(Clone)]
pub struct TaskQueryService<S>
where
    S: TaskStore,
{
    store: Arc<S>,
}

impl<S> TaskQueryService<S>
where
    S: TaskStore,
{
    /// Creates a new task query service.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Translates `request` into a store query and returns one page of
    /// matching tasks.
    ///
    /// The store receives the query only once translation has succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`TaskQueryError::InvalidArgument`] when the request is
    /// invalid, or [`TaskQueryError::Store`] when pagination or execution
    /// fails.
    pub async fn query_tasks(
        &self,
        request: &FilterRequest,
        params: &PaginationParams,
    ) -> TaskQueryResult<DataPage<Task>> {
        let mut query = self.store.create_query();
        if let Err(err) = translate_filter(request, &mut query) {
            tracing::debug!(error = %err, "rejected task filter request");
            return Err(err.into());
        }
        tracing::debug!(
            task_variables = request.task_variables.as_ref().map_or(0, Vec::len),
            process_variables = request.process_variables.as_ref().map_or(0, Vec::len),
            sort = params.sort.as_deref().unwrap_or(DEFAULT_SORT_KEY),
            "translated task filter request"
        );

        let page = self
            .store
            .paginate(params, query, DEFAULT_SORT_KEY, task_properties())
            .await?;
        Ok(page)
    }

    /// Applies the supplied fields of `request` to the task `id` and
    /// persists it.
    ///
    /// Nothing is persisted when the request is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`TaskQueryError::NotFound`] when the task does not exist,
    /// [`TaskQueryError::InvalidArgument`] when the request is invalid, or
    /// [`TaskQueryError::Store`] when persistence fails.
    pub async fn update_task(&self, id: TaskId, request: &UpdateRequest) -> TaskQueryResult<Task> {
        let mut task = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(TaskQueryError::NotFound(id))?;
        if let Err(err) = apply_update(&mut task, request) {
            tracing::debug!(task_id = %id, error = %err, "rejected task update request");
            return Err(err.into());
        }

        self.store.update(&task).await?;
        tracing::debug!(task_id = %id, "applied task update");
        Ok(task)
    }
}
