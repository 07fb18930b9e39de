//! When steps for task filtering BDD scenarios.

use super::world::{TaskFilterWorld, run_async};
use rstest_bdd_macros::when;
use task_filter::task::domain::{
    Field, FilterRequest, PaginationParams, UpdateRequest, VariableOperation, VariablePredicate,
};

fn run_query(world: &mut TaskFilterWorld, request: &FilterRequest) {
    let result = run_async(
        world
            .service
            .query_tasks(request, &PaginationParams::default()),
    );
    world.last_query_result = Some(result);
}

#[when(r#"tasks are queried where task variable "{variable}" equals {value:i64}"#)]
fn query_by_task_variable(world: &mut TaskFilterWorld, variable: String, value: i64) {
    let request = FilterRequest {
        task_variables: Some(vec![VariablePredicate::named(
            variable,
            VariableOperation::Equals,
            value,
        )]),
        ..FilterRequest::default()
    };
    run_query(world, &request);
}

#[when("tasks are queried where any task variable differs from {value:i64}")]
fn query_by_value_only_inequality(world: &mut TaskFilterWorld, value: i64) {
    let request = FilterRequest {
        task_variables: Some(vec![VariablePredicate::nameless(
            VariableOperation::NotEquals,
            value,
        )]),
        ..FilterRequest::default()
    };
    run_query(world, &request);
}

#[when(r#"tasks are queried with delegation state "{state}""#)]
fn query_by_delegation_state(world: &mut TaskFilterWorld, state: String) {
    let request = FilterRequest {
        delegation_state: Some(state),
        ..FilterRequest::default()
    };
    run_query(world, &request);
}

#[when(r#"the priority of "{name}" is updated to {priority:i32}"#)]
fn update_priority(
    world: &mut TaskFilterWorld,
    name: String,
    priority: i32,
) -> Result<(), eyre::Report> {
    let id = world.seeded_task(&name)?.id();
    let request = UpdateRequest {
        priority: Field::value(priority),
        ..UpdateRequest::default()
    };
    let updated = run_async(world.service.update_task(id, &request))?;
    world.last_updated_task = Some(updated);
    Ok(())
}
