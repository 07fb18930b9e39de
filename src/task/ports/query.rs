//! Query builder port and the variable predicate sink abstraction.

use crate::task::domain::{DelegationState, VariableValue};
use chrono::{DateTime, Utc};

/// Builder for a task query.
///
/// Every call adds a conjunctive constraint. Methods taking an `Option`
/// treat `None` as "no constraint" and must not fail on it.
pub trait TaskQuery {
    /// Exact task name.
    fn task_name(&mut self, name: &str);
    /// Task name `LIKE` pattern.
    fn task_name_like(&mut self, pattern: &str);
    /// Exact description.
    fn task_description(&mut self, description: &str);
    /// Description `LIKE` pattern.
    fn task_description_like(&mut self, pattern: &str);
    /// Exact priority.
    fn task_priority(&mut self, priority: i32);
    /// Inclusive lower priority bound.
    fn task_min_priority(&mut self, priority: i32);
    /// Inclusive upper priority bound.
    fn task_max_priority(&mut self, priority: i32);
    /// Assignee.
    fn task_assignee(&mut self, assignee: &str);
    /// Owner.
    fn task_owner(&mut self, owner: &str);
    /// Tasks without an assignee.
    fn task_unassigned(&mut self);
    /// Delegation state.
    fn task_delegation_state(&mut self, state: DelegationState);
    /// Candidate user.
    fn task_candidate_user(&mut self, user: &str);
    /// User involved in any role.
    fn task_involved_user(&mut self, user: &str);
    /// Candidate group.
    fn task_candidate_group(&mut self, group: &str);
    /// Owning process instance.
    fn process_instance_id(&mut self, id: &str);
    /// Business key of the owning process instance.
    fn process_instance_business_key(&mut self, key: &str);
    /// Owning execution.
    fn execution_id(&mut self, id: &str);
    /// Exact creation time.
    fn task_created_on(&mut self, at: DateTime<Utc>);
    /// Created strictly before.
    fn task_created_before(&mut self, at: DateTime<Utc>);
    /// Created strictly after.
    fn task_created_after(&mut self, at: DateTime<Utc>);
    /// Top-level tasks only.
    fn exclude_subtasks(&mut self);
    /// Exact task definition key; `None` is a no-op.
    fn task_definition_key(&mut self, key: Option<&str>);
    /// Task definition key `LIKE` pattern; `None` is a no-op.
    fn task_definition_key_like(&mut self, pattern: Option<&str>);
    /// Exact due date; `None` is a no-op.
    fn due_date(&mut self, at: Option<DateTime<Utc>>);
    /// Due strictly before; `None` is a no-op.
    fn due_before(&mut self, at: Option<DateTime<Utc>>);
    /// Due strictly after; `None` is a no-op.
    fn due_after(&mut self, at: Option<DateTime<Utc>>);
    /// Active tasks only.
    fn active(&mut self);
    /// Suspended tasks only.
    fn suspended(&mut self);

    /// Any task variable equals `value`.
    fn task_variable_any_value_equals(&mut self, value: &VariableValue);
    /// Task variable `name` equals `value`.
    fn task_variable_value_equals(&mut self, name: &str, value: &VariableValue);
    /// Task variable `name` equals `value`, ignoring case.
    fn task_variable_value_equals_ignore_case(&mut self, name: &str, value: &str);
    /// Task variable `name` exists and differs from `value`.
    fn task_variable_value_not_equals(&mut self, name: &str, value: &VariableValue);
    /// Task variable `name` exists and differs from `value`, ignoring case.
    fn task_variable_value_not_equals_ignore_case(&mut self, name: &str, value: &str);

    /// Any process variable equals `value`.
    fn process_variable_any_value_equals(&mut self, value: &VariableValue);
    /// Process variable `name` equals `value`.
    fn process_variable_value_equals(&mut self, name: &str, value: &VariableValue);
    /// Process variable `name` equals `value`, ignoring case.
    fn process_variable_value_equals_ignore_case(&mut self, name: &str, value: &str);
    /// Process variable `name` exists and differs from `value`.
    fn process_variable_value_not_equals(&mut self, name: &str, value: &VariableValue);
    /// Process variable `name` exists and differs from `value`, ignoring case.
    fn process_variable_value_not_equals_ignore_case(&mut self, name: &str, value: &str);
}

/// Namespace-independent receiver for validated variable predicates.
///
/// Lets one validation routine drive both the task and the process variable
/// namespaces of a [`TaskQuery`].
#[cfg_attr(test, mockall::automock)]
pub trait PredicateSink {
    /// Any variable in the namespace equals `value`.
    fn any_value_equals(&mut self, value: &VariableValue);
    /// Variable `name` equals `value`.
    fn value_equals(&mut self, name: &str, value: &VariableValue);
    /// Variable `name` equals `value`, ignoring case.
    fn value_equals_ignore_case(&mut self, name: &str, value: &str);
    /// Variable `name` differs from `value`.
    fn value_not_equals(&mut self, name: &str, value: &VariableValue);
    /// Variable `name` differs from `value`, ignoring case.
    fn value_not_equals_ignore_case(&mut self, name: &str, value: &str);
}

/// Routes predicates to the task-variable methods of a query.
#[derive(Debug)]
pub struct TaskVariableSink<'a, Q: ?Sized>(pub &'a mut Q);

impl<Q: TaskQuery + ?Sized> PredicateSink for TaskVariableSink<'_, Q> {
    fn any_value_equals(&mut self, value: &VariableValue) {
        self.0.task_variable_any_value_equals(value);
    }

    fn value_equals(&mut self, name: &str, value: &VariableValue) {
        self.0.task_variable_value_equals(name, value);
    }

    fn value_equals_ignore_case(&mut self, name: &str, value: &str) {
        self.0.task_variable_value_equals_ignore_case(name, value);
    }

    fn value_not_equals(&mut self, name: &str, value: &VariableValue) {
        self.0.task_variable_value_not_equals(name, value);
    }

    fn value_not_equals_ignore_case(&mut self, name: &str, value: &str) {
        self.0.task_variable_value_not_equals_ignore_case(name, value);
    }
}

/// Routes predicates to the process-variable methods of a query.
#[derive(Debug)]
pub struct ProcessVariableSink<'a, Q: ?Sized>(pub &'a mut Q);

impl<Q: TaskQuery + ?Sized> PredicateSink for ProcessVariableSink<'_, Q> {
    fn any_value_equals(&mut self, value: &VariableValue) {
        self.0.process_variable_any_value_equals(value);
    }

    fn value_equals(&mut self, name: &str, value: &VariableValue) {
        self.0.process_variable_value_equals(name, value);
    }

    fn value_equals_ignore_case(&mut self, name: &str, value: &str) {
        self.0.process_variable_value_equals_ignore_case(name, value);
    }

    fn value_not_equals(&mut self, name: &str, value: &VariableValue) {
        self.0.process_variable_value_not_equals(name, value);
    }

    fn value_not_equals_ignore_case(&mut self, name: &str, value: &str) {
        self.0.process_variable_value_not_equals_ignore_case(name, value);
    }
}
