//! In-memory task store for tests and embedding.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::TaskCriteria;
use crate::task::{
    domain::{
        DataPage, PaginationConfig, PaginationParams, SortOrder, SortablePropertyRegistry, Task,
        TaskId,
    },
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Queries are [`TaskCriteria`] evaluated against every stored task.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    tasks: Arc<RwLock<HashMap<TaskId, Task>>>,
    config: PaginationConfig,
}

impl InMemoryTaskStore {
    /// Creates an empty store with the default pagination configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with the given pagination configuration.
    #[must_use]
    pub fn with_config(config: PaginationConfig) -> Self {
        Self {
            tasks: Arc::default(),
            config,
        }
    }

    /// Inserts `task`, replacing any task with the same identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the store lock is
    /// poisoned.
    pub fn insert(&self, task: Task) -> TaskStoreResult<()> {
        self.write()?.insert(task.id(), task);
        Ok(())
    }

    fn read(&self) -> TaskStoreResult<RwLockReadGuard<'_, HashMap<TaskId, Task>>> {
        self.tasks
            .read()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> TaskStoreResult<RwLockWriteGuard<'_, HashMap<TaskId, Task>>> {
        self.tasks
            .write()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    type Query = TaskCriteria;

    fn create_query(&self) -> Self::Query {
        TaskCriteria::new()
    }

    async fn paginate(
        &self,
        params: &PaginationParams,
        query: Self::Query,
        default_sort: &str,
        properties: &SortablePropertyRegistry,
    ) -> TaskStoreResult<DataPage<Task>> {
        let page = params.resolve(default_sort, properties, &self.config)?;

        let snapshot: Vec<Task> = self.read()?.values().cloned().collect();
        let mut matching: Vec<Task> = snapshot
            .into_iter()
            .filter(|task| query.matches(task))
            .collect();
        matching.sort_by(|left, right| {
            let ordering = page
                .property
                .compare(left, right)
                .then_with(|| left.id().cmp(&right.id()));
            match page.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        let total = matching.len();
        let data: Vec<Task> = matching
            .into_iter()
            .skip(page.start)
            .take(page.size)
            .collect();

        Ok(DataPage {
            size: data.len(),
            data,
            total,
            start: page.start,
            sort: page.sort,
            order: page.order,
        })
    }

    async fn find_by_id(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        Ok(self.read()?.get(&id).cloned())
    }

    async fn update(&self, task: &Task) -> TaskStoreResult<()> {
        let mut tasks = self.write()?;
        let stored = tasks
            .get_mut(&task.id())
            .ok_or(TaskStoreError::NotFound(task.id()))?;
        *stored = task.clone();
        Ok(())
    }
}
