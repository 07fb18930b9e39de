//! Partial update request for an existing task.

use super::{Field, TaskId};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Partial task update where each field records whether it was supplied.
///
/// Only fields in the [`Field::Set`] state are applied; `Field::Set(None)`
/// clears the corresponding task attribute.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateRequest {
    /// New task name.
    pub name: Field<String>,
    /// New assignee.
    pub assignee: Field<String>,
    /// New description.
    pub description: Field<String>,
    /// New due date.
    pub due_date: Field<DateTime<Utc>>,
    /// New owner.
    pub owner: Field<String>,
    /// New parent task.
    ///
    /// Task identifiers are UUIDs, so a non-UUID string such as `"42"` is
    /// rejected when the request is deserialized.
    pub parent_task_id: Field<TaskId>,
    /// New priority.
    pub priority: Field<i32>,
    /// New delegation state as its request string.
    pub delegation_state: Field<String>,
}
