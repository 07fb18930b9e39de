//! Then steps for task filtering BDD scenarios.

use super::world::TaskFilterWorld;
use rstest_bdd_macros::then;
use task_filter::task::services::TaskQueryError;

#[then(r#"the result contains only "{name}""#)]
fn result_contains_only(world: &TaskFilterWorld, name: String) -> Result<(), eyre::Report> {
    let result = world
        .last_query_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing query result"))?;
    let page = result
        .as_ref()
        .map_err(|err| eyre::eyre!("query failed: {err}"))?;

    let names: Vec<&str> = page.data.iter().filter_map(|task| task.name()).collect();
    if names != [name.as_str()] {
        return Err(eyre::eyre!("expected only {name}, found {names:?}"));
    }
    Ok(())
}

#[then("the query fails with an invalid argument error")]
fn query_fails_with_invalid_argument(world: &TaskFilterWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_query_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing query result"))?;

    if !matches!(result, Err(TaskQueryError::InvalidArgument(_))) {
        return Err(eyre::eyre!(
            "expected InvalidArgument error, got {result:?}"
        ));
    }
    Ok(())
}

#[then(r#"the task "{name}" has priority {priority:i32}"#)]
fn task_has_priority(
    world: &TaskFilterWorld,
    name: String,
    priority: i32,
) -> Result<(), eyre::Report> {
    let task = world
        .last_updated_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing updated task"))?;

    if task.name() != Some(name.as_str()) || task.priority() != priority {
        return Err(eyre::eyre!(
            "expected {name} with priority {priority}, found {:?} with priority {}",
            task.name(),
            task.priority()
        ));
    }
    Ok(())
}

#[then(r#"the task "{name}" is otherwise unchanged"#)]
fn task_otherwise_unchanged(world: &TaskFilterWorld, name: String) -> Result<(), eyre::Report> {
    let before = world.seeded_task(&name)?;
    let after = world
        .last_updated_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing updated task"))?;

    let mut expected = before.clone();
    expected.set_priority(Some(after.priority()));
    if *after != expected {
        return Err(eyre::eyre!("expected {expected:?}, found {after:?}"));
    }
    Ok(())
}
