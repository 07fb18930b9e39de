//! Presence-aware application of update requests onto tasks.

use crate::task::domain::{InvalidArgument, Task, UpdateRequest, parse_delegation_state};

/// Copies every supplied field of `request` onto `task`.
///
/// Fields left [`Unset`](crate::task::domain::Field::Unset) are not touched;
/// a supplied null clears the attribute. Fields are applied in declaration
/// order and the delegation state is applied last.
///
/// # Errors
///
/// Returns [`InvalidArgument::InvalidDelegationState`] when the supplied
/// delegation state is not a known state. Fields applied before it keep
/// their new values.
pub fn apply_update(task: &mut Task, request: &UpdateRequest) -> Result<(), InvalidArgument> {
    if let Some(name) = request.name.as_set() {
        task.set_name(name.clone());
    }
    if let Some(assignee) = request.assignee.as_set() {
        task.set_assignee(assignee.clone());
    }
    if let Some(description) = request.description.as_set() {
        task.set_description(description.clone());
    }
    if let Some(due_date) = request.due_date.as_set() {
        task.set_due_date(*due_date);
    }
    if let Some(owner) = request.owner.as_set() {
        task.set_owner(owner.clone());
    }
    if let Some(parent_task_id) = request.parent_task_id.as_set() {
        task.set_parent_task_id(*parent_task_id);
    }
    if let Some(priority) = request.priority.as_set() {
        task.set_priority(*priority);
    }
    if let Some(state) = request.delegation_state.as_set() {
        task.set_delegation_state(parse_delegation_state(state.as_deref())?);
    }
    Ok(())
}
