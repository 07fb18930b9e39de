//! Task entity targeted by filter queries and partial updates.

use super::{DelegationState, TaskId, VariableValue};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Task entity as exposed by the task store.
///
/// Query-facing attributes are set while the task is assembled with the
/// `with_*` builders; request-mutable attributes additionally have setters
/// used by partial updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    name: Option<String>,
    description: Option<String>,
    priority: i32,
    assignee: Option<String>,
    owner: Option<String>,
    delegation_state: Option<DelegationState>,
    parent_task_id: Option<TaskId>,
    due_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    execution_id: Option<String>,
    process_instance_id: Option<String>,
    process_instance_business_key: Option<String>,
    task_definition_key: Option<String>,
    suspended: bool,
    candidate_users: Vec<String>,
    candidate_groups: Vec<String>,
    task_variables: BTreeMap<String, VariableValue>,
    process_variables: BTreeMap<String, VariableValue>,
}

impl Task {
    /// Priority assigned to new tasks and restored when a request clears it.
    pub const DEFAULT_PRIORITY: i32 = 50;

    /// Creates an empty, active task stamped with the clock's current time.
    #[must_use]
    pub fn new(clock: &impl Clock) -> Self {
        Self {
            id: TaskId::new(),
            name: None,
            description: None,
            priority: Self::DEFAULT_PRIORITY,
            assignee: None,
            owner: None,
            delegation_state: None,
            parent_task_id: None,
            due_date: None,
            created_at: clock.utc(),
            execution_id: None,
            process_instance_id: None,
            process_instance_business_key: None,
            task_definition_key: None,
            suspended: false,
            candidate_users: Vec::new(),
            candidate_groups: Vec::new(),
            task_variables: BTreeMap::new(),
            process_variables: BTreeMap::new(),
        }
    }

    /// Sets the task name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Sets the owner.
    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Sets the delegation state.
    #[must_use]
    pub const fn with_delegation_state(mut self, state: DelegationState) -> Self {
        self.delegation_state = Some(state);
        self
    }

    /// Marks the task as a sub-task of `parent`.
    #[must_use]
    pub const fn with_parent_task_id(mut self, parent: TaskId) -> Self {
        self.parent_task_id = Some(parent);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Overrides the creation timestamp.
    #[must_use]
    pub const fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Sets the owning execution.
    #[must_use]
    pub fn with_execution_id(mut self, execution_id: impl Into<String>) -> Self {
        self.execution_id = Some(execution_id.into());
        self
    }

    /// Sets the owning process instance.
    #[must_use]
    pub fn with_process_instance(
        mut self,
        process_instance_id: impl Into<String>,
        business_key: Option<String>,
    ) -> Self {
        self.process_instance_id = Some(process_instance_id.into());
        self.process_instance_business_key = business_key;
        self
    }

    /// Sets the task definition key.
    #[must_use]
    pub fn with_task_definition_key(mut self, key: impl Into<String>) -> Self {
        self.task_definition_key = Some(key.into());
        self
    }

    /// Marks the task as suspended.
    #[must_use]
    pub const fn suspended(mut self) -> Self {
        self.suspended = true;
        self
    }

    /// Adds a candidate user.
    #[must_use]
    pub fn with_candidate_user(mut self, user: impl Into<String>) -> Self {
        self.candidate_users.push(user.into());
        self
    }

    /// Adds a candidate group.
    #[must_use]
    pub fn with_candidate_group(mut self, group: impl Into<String>) -> Self {
        self.candidate_groups.push(group.into());
        self
    }

    /// Sets a task-scoped variable.
    #[must_use]
    pub fn with_task_variable(
        mut self,
        name: impl Into<String>,
        value: impl Into<VariableValue>,
    ) -> Self {
        self.task_variables.insert(name.into(), value.into());
        self
    }

    /// Sets a process-scoped variable.
    #[must_use]
    pub fn with_process_variable(
        mut self,
        name: impl Into<String>,
        value: impl Into<VariableValue>,
    ) -> Self {
        self.process_variables.insert(name.into(), value.into());
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> i32 {
        self.priority
    }

    /// Returns the assignee.
    #[must_use]
    pub fn assignee(&self) -> Option<&str> {
        self.assignee.as_deref()
    }

    /// Returns the owner.
    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Returns the delegation state.
    #[must_use]
    pub const fn delegation_state(&self) -> Option<DelegationState> {
        self.delegation_state
    }

    /// Returns the parent task, if this is a sub-task.
    #[must_use]
    pub const fn parent_task_id(&self) -> Option<TaskId> {
        self.parent_task_id
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the owning execution.
    #[must_use]
    pub fn execution_id(&self) -> Option<&str> {
        self.execution_id.as_deref()
    }

    /// Returns the owning process instance.
    #[must_use]
    pub fn process_instance_id(&self) -> Option<&str> {
        self.process_instance_id.as_deref()
    }

    /// Returns the business key of the owning process instance.
    #[must_use]
    pub fn process_instance_business_key(&self) -> Option<&str> {
        self.process_instance_business_key.as_deref()
    }

    /// Returns the task definition key.
    #[must_use]
    pub fn task_definition_key(&self) -> Option<&str> {
        self.task_definition_key.as_deref()
    }

    /// Returns `true` when the task is suspended.
    #[must_use]
    pub const fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Returns the candidate users.
    #[must_use]
    pub fn candidate_users(&self) -> &[String] {
        &self.candidate_users
    }

    /// Returns the candidate groups.
    #[must_use]
    pub fn candidate_groups(&self) -> &[String] {
        &self.candidate_groups
    }

    /// Returns the task-scoped variables.
    #[must_use]
    pub const fn task_variables(&self) -> &BTreeMap<String, VariableValue> {
        &self.task_variables
    }

    /// Returns the process-scoped variables.
    #[must_use]
    pub const fn process_variables(&self) -> &BTreeMap<String, VariableValue> {
        &self.process_variables
    }

    /// Replaces the task name.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Replaces the assignee.
    pub fn set_assignee(&mut self, assignee: Option<String>) {
        self.assignee = assignee;
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    /// Replaces the due date.
    pub const fn set_due_date(&mut self, due_date: Option<DateTime<Utc>>) {
        self.due_date = due_date;
    }

    /// Replaces the owner.
    pub fn set_owner(&mut self, owner: Option<String>) {
        self.owner = owner;
    }

    /// Replaces the parent task.
    pub const fn set_parent_task_id(&mut self, parent_task_id: Option<TaskId>) {
        self.parent_task_id = parent_task_id;
    }

    /// Replaces the priority; `None` restores [`Task::DEFAULT_PRIORITY`].
    pub fn set_priority(&mut self, priority: Option<i32>) {
        self.priority = priority.unwrap_or(Self::DEFAULT_PRIORITY);
    }

    /// Replaces the delegation state.
    pub const fn set_delegation_state(&mut self, state: Option<DelegationState>) {
        self.delegation_state = state;
    }
}
