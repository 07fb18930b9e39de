//! Shared fixtures for in-memory integration tests.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use mockable::DefaultClock;
use rstest::fixture;
use task_filter::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{DelegationState, Task},
    services::TaskQueryService,
};

/// Service type used by the in-memory integration tests.
pub type TestService = TaskQueryService<InMemoryTaskStore>;

/// Seeded tasks, exposed so tests can compare identifiers.
pub struct SeededTasks {
    pub invoice: Task,
    pub contract: Task,
    pub expenses: Task,
    pub sub_task: Task,
}

/// Store populated with a small, varied task set and a service over it.
pub struct Harness {
    pub service: TestService,
    pub store: Arc<InMemoryTaskStore>,
    pub tasks: SeededTasks,
}

/// Reference timestamp the seeded tasks are created relative to.
#[must_use]
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

#[fixture]
pub fn harness() -> Harness {
    let base = base_time();
    let invoice = Task::new(&DefaultClock)
        .with_name("Approve invoice")
        .with_description("Check invoice totals")
        .with_priority(80)
        .with_assignee("kermit")
        .with_created_at(base)
        .with_due_date(base + Duration::days(2))
        .with_task_definition_key("approveInvoice")
        .with_process_instance("proc-1", Some("order-1".to_owned()))
        .with_task_variable("amount", 1500_i64)
        .with_process_variable("region", "EMEA");
    let contract = Task::new(&DefaultClock)
        .with_name("Review contract")
        .with_priority(40)
        .with_owner("gonzo")
        .with_delegation_state(DelegationState::Pending)
        .with_candidate_group("legal")
        .with_created_at(base + Duration::hours(1))
        .with_due_date(base + Duration::days(7))
        .with_task_definition_key("reviewContract")
        .with_process_instance("proc-2", Some("order-2".to_owned()))
        .with_task_variable("status", "Open")
        .with_process_variable("region", "APAC");
    let expenses = Task::new(&DefaultClock)
        .with_name("Approve expenses")
        .with_priority(60)
        .with_candidate_user("fozzie")
        .with_created_at(base + Duration::hours(2))
        .with_task_definition_key("approveExpenses")
        .with_task_variable("amount", 90_i64)
        .suspended();
    let sub_task = Task::new(&DefaultClock)
        .with_name("Attach receipts")
        .with_priority(20)
        .with_assignee("kermit")
        .with_parent_task_id(expenses.id())
        .with_created_at(base + Duration::hours(3));

    let store = Arc::new(InMemoryTaskStore::new());
    for task in [&invoice, &contract, &expenses, &sub_task] {
        store
            .insert(task.clone())
            .unwrap_or_else(|err| panic!("seed task: {err}"));
    }

    Harness {
        service: TaskQueryService::new(Arc::clone(&store)),
        store,
        tasks: SeededTasks {
            invoice,
            contract,
            expenses,
            sub_task,
        },
    }
}

/// Returns the names of `tasks` in order.
#[must_use]
pub fn names(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().filter_map(Task::name).collect()
}
