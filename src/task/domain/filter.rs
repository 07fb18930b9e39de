//! Filter request describing a task search.

use super::VariablePredicate;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Optional-field task search request.
///
/// Every field is independently optional and an absent field means "no
/// constraint". Deserializes from the camelCase JSON body of a task query.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterRequest {
    /// Exact task name.
    pub name: Option<String>,
    /// Task name `LIKE` pattern.
    pub name_like: Option<String>,
    /// Exact task description.
    pub description: Option<String>,
    /// Task description `LIKE` pattern.
    pub description_like: Option<String>,
    /// Exact priority.
    pub priority: Option<i32>,
    /// Inclusive lower priority bound.
    pub minimum_priority: Option<i32>,
    /// Inclusive upper priority bound.
    pub maximum_priority: Option<i32>,
    /// Assignee user id.
    pub assignee: Option<String>,
    /// Owner user id.
    pub owner: Option<String>,
    /// Only `Some(true)` constrains the query, to unassigned tasks.
    pub unassigned: Option<bool>,
    /// Delegation state, `resolved` or `pending`.
    pub delegation_state: Option<String>,
    /// User that is a candidate for the task.
    pub candidate_user: Option<String>,
    /// User involved with the task in any role.
    pub involved_user: Option<String>,
    /// Group that is a candidate for the task.
    pub candidate_group: Option<String>,
    /// Owning process instance.
    pub process_instance_id: Option<String>,
    /// Business key of the owning process instance.
    pub process_instance_business_key: Option<String>,
    /// Owning execution.
    pub execution_id: Option<String>,
    /// Exact creation time.
    pub created_on: Option<DateTime<Utc>>,
    /// Created strictly before.
    pub created_before: Option<DateTime<Utc>>,
    /// Created strictly after.
    pub created_after: Option<DateTime<Utc>>,
    /// Only `Some(true)` constrains the query, to top-level tasks.
    pub exclude_sub_tasks: Option<bool>,
    /// Exact task definition key.
    pub task_definition_key: Option<String>,
    /// Task definition key `LIKE` pattern.
    pub task_definition_key_like: Option<String>,
    /// Exact due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Due strictly before.
    pub due_before: Option<DateTime<Utc>>,
    /// Due strictly after.
    pub due_after: Option<DateTime<Utc>>,
    /// `Some(true)` for active tasks only, `Some(false)` for suspended only.
    pub active: Option<bool>,
    /// Predicates on task-scoped variables.
    pub task_variables: Option<Vec<VariablePredicate>>,
    /// Predicates on process-scoped variables.
    pub process_variables: Option<Vec<VariablePredicate>>,
}
