//! Recorded query constraints and their evaluation against tasks.

use super::like::like_matches;
use crate::task::{
    domain::{DelegationState, Task, VariableValue},
    ports::TaskQuery,
};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Variable namespace a predicate applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableScope {
    /// Variables local to the task.
    Task,
    /// Variables of the owning process instance.
    Process,
}

/// Comparison on a single variable namespace.
#[derive(Debug, Clone, PartialEq)]
pub enum VariableMatch {
    /// Some variable holds the value.
    AnyEquals(VariableValue),
    /// The named variable holds the value.
    Equals {
        /// Variable name.
        name: String,
        /// Expected value.
        value: VariableValue,
    },
    /// The named variable holds the string, ignoring case.
    EqualsIgnoreCase {
        /// Variable name.
        name: String,
        /// Expected text.
        value: String,
    },
    /// The named variable exists and holds a different value.
    NotEquals {
        /// Variable name.
        name: String,
        /// Rejected value.
        value: VariableValue,
    },
    /// The named variable exists and holds a different string, ignoring
    /// case.
    NotEqualsIgnoreCase {
        /// Variable name.
        name: String,
        /// Rejected text.
        value: String,
    },
}

impl VariableMatch {
    fn matches(&self, variables: &BTreeMap<String, VariableValue>) -> bool {
        match self {
            Self::AnyEquals(value) => variables.values().any(|candidate| candidate == value),
            Self::Equals { name, value } => variables.get(name) == Some(value),
            Self::EqualsIgnoreCase { name, value } => variables
                .get(name)
                .and_then(VariableValue::as_str)
                .is_some_and(|text| text.to_lowercase() == value.to_lowercase()),
            Self::NotEquals { name, value } => {
                variables.get(name).is_some_and(|candidate| candidate != value)
            }
            Self::NotEqualsIgnoreCase { name, value } => variables
                .get(name)
                .and_then(VariableValue::as_str)
                .is_some_and(|text| text.to_lowercase() != value.to_lowercase()),
        }
    }
}

/// A single constraint recorded on a [`TaskCriteria`].
#[derive(Debug, Clone, PartialEq)]
pub enum TaskConstraint {
    /// Exact name.
    Name(String),
    /// Name `LIKE` pattern.
    NameLike(String),
    /// Exact description.
    Description(String),
    /// Description `LIKE` pattern.
    DescriptionLike(String),
    /// Exact priority.
    Priority(i32),
    /// Inclusive lower priority bound.
    MinPriority(i32),
    /// Inclusive upper priority bound.
    MaxPriority(i32),
    /// Assignee.
    Assignee(String),
    /// Owner.
    Owner(String),
    /// No assignee.
    Unassigned,
    /// Delegation state.
    DelegationState(DelegationState),
    /// Unassigned task offered to the user.
    CandidateUser(String),
    /// User is assignee, owner, or candidate.
    InvolvedUser(String),
    /// Unassigned task offered to the group.
    CandidateGroup(String),
    /// Owning process instance.
    ProcessInstanceId(String),
    /// Business key of the owning process instance.
    ProcessInstanceBusinessKey(String),
    /// Owning execution.
    ExecutionId(String),
    /// Exact creation time.
    CreatedOn(DateTime<Utc>),
    /// Created strictly before.
    CreatedBefore(DateTime<Utc>),
    /// Created strictly after.
    CreatedAfter(DateTime<Utc>),
    /// Top-level tasks only.
    ExcludeSubtasks,
    /// Exact task definition key.
    TaskDefinitionKey(String),
    /// Task definition key `LIKE` pattern.
    TaskDefinitionKeyLike(String),
    /// Exact due date.
    DueDate(DateTime<Utc>),
    /// Due strictly before.
    DueBefore(DateTime<Utc>),
    /// Due strictly after.
    DueAfter(DateTime<Utc>),
    /// Active tasks only.
    Active,
    /// Suspended tasks only.
    Suspended,
    /// Variable predicate.
    Variable {
        /// Namespace the predicate applies to.
        scope: VariableScope,
        /// Comparison to apply.
        predicate: VariableMatch,
    },
}

impl TaskConstraint {
    /// Returns `true` when `task` satisfies this constraint.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::Name(name) => task.name() == Some(name.as_str()),
            Self::NameLike(pattern) => like(pattern, task.name()),
            Self::Description(description) => task.description() == Some(description.as_str()),
            Self::DescriptionLike(pattern) => like(pattern, task.description()),
            Self::Priority(priority) => task.priority() == *priority,
            Self::MinPriority(priority) => task.priority() >= *priority,
            Self::MaxPriority(priority) => task.priority() <= *priority,
            Self::Assignee(assignee) => task.assignee() == Some(assignee.as_str()),
            Self::Owner(owner) => task.owner() == Some(owner.as_str()),
            Self::Unassigned => task.assignee().is_none(),
            Self::DelegationState(state) => task.delegation_state() == Some(*state),
            Self::CandidateUser(user) => {
                task.assignee().is_none() && task.candidate_users().contains(user)
            }
            Self::InvolvedUser(user) => {
                task.assignee() == Some(user.as_str())
                    || task.owner() == Some(user.as_str())
                    || task.candidate_users().contains(user)
            }
            Self::CandidateGroup(group) => {
                task.assignee().is_none() && task.candidate_groups().contains(group)
            }
            Self::ProcessInstanceId(id) => task.process_instance_id() == Some(id.as_str()),
            Self::ProcessInstanceBusinessKey(key) => {
                task.process_instance_business_key() == Some(key.as_str())
            }
            Self::ExecutionId(id) => task.execution_id() == Some(id.as_str()),
            Self::CreatedOn(at) => task.created_at() == *at,
            Self::CreatedBefore(at) => task.created_at() < *at,
            Self::CreatedAfter(at) => task.created_at() > *at,
            Self::ExcludeSubtasks => task.parent_task_id().is_none(),
            Self::TaskDefinitionKey(key) => task.task_definition_key() == Some(key.as_str()),
            Self::TaskDefinitionKeyLike(pattern) => like(pattern, task.task_definition_key()),
            Self::DueDate(at) => task.due_date() == Some(*at),
            Self::DueBefore(at) => task.due_date().is_some_and(|due| due < *at),
            Self::DueAfter(at) => task.due_date().is_some_and(|due| due > *at),
            Self::Active => !task.is_suspended(),
            Self::Suspended => task.is_suspended(),
            Self::Variable { scope, predicate } => predicate.matches(match scope {
                VariableScope::Task => task.task_variables(),
                VariableScope::Process => task.process_variables(),
            }),
        }
    }
}

fn like(pattern: &str, value: Option<&str>) -> bool {
    value.is_some_and(|text| like_matches(pattern, text))
}

/// Query builder that records constraints and evaluates them in memory.
///
/// Constraints combine conjunctively; criteria without constraints match
/// every task.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskCriteria {
    constraints: Vec<TaskConstraint>,
}

impl TaskCriteria {
    /// Creates criteria without constraints.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded constraints in the order they were added.
    #[must_use]
    pub fn constraints(&self) -> &[TaskConstraint] {
        &self.constraints
    }

    /// Returns `true` when no constraint has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Returns `true` when `task` satisfies every constraint.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.constraints
            .iter()
            .all(|constraint| constraint.matches(task))
    }

    fn push(&mut self, constraint: TaskConstraint) {
        self.constraints.push(constraint);
    }

    fn push_variable(&mut self, scope: VariableScope, predicate: VariableMatch) {
        self.push(TaskConstraint::Variable { scope, predicate });
    }
}

impl TaskQuery for TaskCriteria {
    fn task_name(&mut self, name: &str) {
        self.push(TaskConstraint::Name(name.to_owned()));
    }

    fn task_name_like(&mut self, pattern: &str) {
        self.push(TaskConstraint::NameLike(pattern.to_owned()));
    }

    fn task_description(&mut self, description: &str) {
        self.push(TaskConstraint::Description(description.to_owned()));
    }

    fn task_description_like(&mut self, pattern: &str) {
        self.push(TaskConstraint::DescriptionLike(pattern.to_owned()));
    }

    fn task_priority(&mut self, priority: i32) {
        self.push(TaskConstraint::Priority(priority));
    }

    fn task_min_priority(&mut self, priority: i32) {
        self.push(TaskConstraint::MinPriority(priority));
    }

    fn task_max_priority(&mut self, priority: i32) {
        self.push(TaskConstraint::MaxPriority(priority));
    }

    fn task_assignee(&mut self, assignee: &str) {
        self.push(TaskConstraint::Assignee(assignee.to_owned()));
    }

    fn task_owner(&mut self, owner: &str) {
        self.push(TaskConstraint::Owner(owner.to_owned()));
    }

    fn task_unassigned(&mut self) {
        self.push(TaskConstraint::Unassigned);
    }

    fn task_delegation_state(&mut self, state: DelegationState) {
        self.push(TaskConstraint::DelegationState(state));
    }

    fn task_candidate_user(&mut self, user: &str) {
        self.push(TaskConstraint::CandidateUser(user.to_owned()));
    }

    fn task_involved_user(&mut self, user: &str) {
        self.push(TaskConstraint::InvolvedUser(user.to_owned()));
    }

    fn task_candidate_group(&mut self, group: &str) {
        self.push(TaskConstraint::CandidateGroup(group.to_owned()));
    }

    fn process_instance_id(&mut self, id: &str) {
        self.push(TaskConstraint::ProcessInstanceId(id.to_owned()));
    }

    fn process_instance_business_key(&mut self, key: &str) {
        self.push(TaskConstraint::ProcessInstanceBusinessKey(key.to_owned()));
    }

    fn execution_id(&mut self, id: &str) {
        self.push(TaskConstraint::ExecutionId(id.to_owned()));
    }

    fn task_created_on(&mut self, at: DateTime<Utc>) {
        self.push(TaskConstraint::CreatedOn(at));
    }

    fn task_created_before(&mut self, at: DateTime<Utc>) {
        self.push(TaskConstraint::CreatedBefore(at));
    }

    fn task_created_after(&mut self, at: DateTime<Utc>) {
        self.push(TaskConstraint::CreatedAfter(at));
    }

    fn exclude_subtasks(&mut self) {
        self.push(TaskConstraint::ExcludeSubtasks);
    }

    fn task_definition_key(&mut self, key: Option<&str>) {
        if let Some(expected) = key {
            self.push(TaskConstraint::TaskDefinitionKey(expected.to_owned()));
        }
    }

    fn task_definition_key_like(&mut self, pattern: Option<&str>) {
        if let Some(like) = pattern {
            self.push(TaskConstraint::TaskDefinitionKeyLike(like.to_owned()));
        }
    }

    fn due_date(&mut self, at: Option<DateTime<Utc>>) {
        if let Some(instant) = at {
            self.push(TaskConstraint::DueDate(instant));
        }
    }

    fn due_before(&mut self, at: Option<DateTime<Utc>>) {
        if let Some(instant) = at {
            self.push(TaskConstraint::DueBefore(instant));
        }
    }

    fn due_after(&mut self, at: Option<DateTime<Utc>>) {
        if let Some(instant) = at {
            self.push(TaskConstraint::DueAfter(instant));
        }
    }

    fn active(&mut self) {
        self.push(TaskConstraint::Active);
    }

    fn suspended(&mut self) {
        self.push(TaskConstraint::Suspended);
    }

    fn task_variable_any_value_equals(&mut self, value: &VariableValue) {
        self.push_variable(VariableScope::Task, VariableMatch::AnyEquals(value.clone()));
    }

    fn task_variable_value_equals(&mut self, name: &str, value: &VariableValue) {
        self.push_variable(VariableScope::Task, equals(name, value));
    }

    fn task_variable_value_equals_ignore_case(&mut self, name: &str, value: &str) {
        self.push_variable(VariableScope::Task, equals_ignore_case(name, value));
    }

    fn task_variable_value_not_equals(&mut self, name: &str, value: &VariableValue) {
        self.push_variable(VariableScope::Task, not_equals(name, value));
    }

    fn task_variable_value_not_equals_ignore_case(&mut self, name: &str, value: &str) {
        self.push_variable(VariableScope::Task, not_equals_ignore_case(name, value));
    }

    fn process_variable_any_value_equals(&mut self, value: &VariableValue) {
        self.push_variable(
            VariableScope::Process,
            VariableMatch::AnyEquals(value.clone()),
        );
    }

    fn process_variable_value_equals(&mut self, name: &str, value: &VariableValue) {
        self.push_variable(VariableScope::Process, equals(name, value));
    }

    fn process_variable_value_equals_ignore_case(&mut self, name: &str, value: &str) {
        self.push_variable(VariableScope::Process, equals_ignore_case(name, value));
    }

    fn process_variable_value_not_equals(&mut self, name: &str, value: &VariableValue) {
        self.push_variable(VariableScope::Process, not_equals(name, value));
    }

    fn process_variable_value_not_equals_ignore_case(&mut self, name: &str, value: &str) {
        self.push_variable(VariableScope::Process, not_equals_ignore_case(name, value));
    }
}

fn equals(name: &str, value: &VariableValue) -> VariableMatch {
    VariableMatch::Equals {
        name: name.to_owned(),
        value: value.clone(),
    }
}

fn equals_ignore_case(name: &str, value: &str) -> VariableMatch {
    VariableMatch::EqualsIgnoreCase {
        name: name.to_owned(),
        value: value.to_owned(),
    }
}

fn not_equals(name: &str, value: &VariableValue) -> VariableMatch {
    VariableMatch::NotEquals {
        name: name.to_owned(),
        value: value.clone(),
    }
}

fn not_equals_ignore_case(name: &str, value: &str) -> VariableMatch {
    VariableMatch::NotEqualsIgnoreCase {
        name: name.to_owned(),
        value: value.to_owned(),
    }
}
