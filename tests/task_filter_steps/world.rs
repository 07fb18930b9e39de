//! Shared world state for task filtering BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use rstest::fixture;
use task_filter::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{DataPage, Task},
    services::{TaskQueryError, TaskQueryService},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskQueryService<InMemoryTaskStore>;

/// Scenario world for task filtering behaviour tests.
pub struct TaskFilterWorld {
    pub store: Arc<InMemoryTaskStore>,
    pub service: TestTaskService,
    pub seeded: HashMap<String, Task>,
    pub last_query_result: Option<Result<DataPage<Task>, TaskQueryError>>,
    pub last_updated_task: Option<Task>,
}

impl TaskFilterWorld {
    /// Creates a world with an empty store.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemoryTaskStore::new());
        Self {
            service: TaskQueryService::new(Arc::clone(&store)),
            store,
            seeded: HashMap::new(),
            last_query_result: None,
            last_updated_task: None,
        }
    }

    /// Returns the seeded task with the given name.
    ///
    /// # Errors
    ///
    /// Returns an error when no task with that name was seeded.
    pub fn seeded_task(&self, name: &str) -> Result<&Task, eyre::Report> {
        self.seeded
            .get(name)
            .ok_or_else(|| eyre::eyre!("no seeded task named {name}"))
    }
}

impl Default for TaskFilterWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskFilterWorld {
    TaskFilterWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
