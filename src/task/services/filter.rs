//! Translation of filter requests into task query constraints.

use super::variables::translate_variables;
use crate::task::{
    domain::{FilterRequest, InvalidArgument, parse_delegation_state},
    ports::{ProcessVariableSink, TaskQuery, TaskVariableSink},
};

/// Applies every constraint described by `request` to `query`.
///
/// Absent fields leave the query unconstrained. `taskDefinitionKey`,
/// `taskDefinitionKeyLike`, `dueDate`, `dueBefore` and `dueAfter` are always
/// forwarded, absent or not, and the builder treats `None` as a no-op.
/// `unassigned=false` and `excludeSubTasks=false` add nothing.
///
/// # Errors
///
/// Returns [`InvalidArgument`] when the delegation state or a variable
/// predicate is invalid. The query must then be discarded: constraints
/// added before the failure remain on it.
pub fn translate_filter<Q>(request: &FilterRequest, query: &mut Q) -> Result<(), InvalidArgument>
where
    Q: TaskQuery + ?Sized,
{
    apply_attribute_filters(request, query);

    if request.unassigned == Some(true) {
        query.task_unassigned();
    }
    if let Some(state) = parse_delegation_state(request.delegation_state.as_deref())? {
        query.task_delegation_state(state);
    }

    apply_involvement_filters(request, query);
    apply_time_filters(request, query);

    if request.exclude_sub_tasks == Some(true) {
        query.exclude_subtasks();
    }

    query.task_definition_key(request.task_definition_key.as_deref());
    query.task_definition_key_like(request.task_definition_key_like.as_deref());
    query.due_date(request.due_date);
    query.due_before(request.due_before);
    query.due_after(request.due_after);

    match request.active {
        Some(true) => query.active(),
        Some(false) => query.suspended(),
        None => {}
    }

    if let Some(predicates) = request.task_variables.as_deref() {
        translate_variables(predicates, &mut TaskVariableSink(&mut *query))?;
    }
    if let Some(predicates) = request.process_variables.as_deref() {
        translate_variables(predicates, &mut ProcessVariableSink(&mut *query))?;
    }
    Ok(())
}

fn apply_attribute_filters<Q>(request: &FilterRequest, query: &mut Q)
where
    Q: TaskQuery + ?Sized,
{
    if let Some(name) = request.name.as_deref() {
        query.task_name(name);
    }
    if let Some(pattern) = request.name_like.as_deref() {
        query.task_name_like(pattern);
    }
    if let Some(description) = request.description.as_deref() {
        query.task_description(description);
    }
    if let Some(pattern) = request.description_like.as_deref() {
        query.task_description_like(pattern);
    }
    if let Some(priority) = request.priority {
        query.task_priority(priority);
    }
    if let Some(priority) = request.minimum_priority {
        query.task_min_priority(priority);
    }
    if let Some(priority) = request.maximum_priority {
        query.task_max_priority(priority);
    }
    if let Some(assignee) = request.assignee.as_deref() {
        query.task_assignee(assignee);
    }
    if let Some(owner) = request.owner.as_deref() {
        query.task_owner(owner);
    }
}

fn apply_involvement_filters<Q>(request: &FilterRequest, query: &mut Q)
where
    Q: TaskQuery + ?Sized,
{
    if let Some(user) = request.candidate_user.as_deref() {
        query.task_candidate_user(user);
    }
    if let Some(user) = request.involved_user.as_deref() {
        query.task_involved_user(user);
    }
    if let Some(group) = request.candidate_group.as_deref() {
        query.task_candidate_group(group);
    }
    if let Some(id) = request.process_instance_id.as_deref() {
        query.process_instance_id(id);
    }
    if let Some(key) = request.process_instance_business_key.as_deref() {
        query.process_instance_business_key(key);
    }
    if let Some(id) = request.execution_id.as_deref() {
        query.execution_id(id);
    }
}

fn apply_time_filters<Q>(request: &FilterRequest, query: &mut Q)
where
    Q: TaskQuery + ?Sized,
{
    if let Some(at) = request.created_on {
        query.task_created_on(at);
    }
    if let Some(at) = request.created_before {
        query.task_created_before(at);
    }
    if let Some(at) = request.created_after {
        query.task_created_after(at);
    }
}
