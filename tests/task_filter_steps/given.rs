//! Given steps for task filtering BDD scenarios.

use super::world::TaskFilterWorld;
use mockable::DefaultClock;
use rstest_bdd_macros::given;
use task_filter::task::domain::Task;

#[given(r#"a task named "{name}" with task variable "{variable}" set to {value:i64}"#)]
fn task_with_variable(
    world: &mut TaskFilterWorld,
    name: String,
    variable: String,
    value: i64,
) -> Result<(), eyre::Report> {
    let task = Task::new(&DefaultClock)
        .with_name(name.clone())
        .with_task_variable(variable, value);
    world.store.insert(task.clone())?;
    world.seeded.insert(name, task);
    Ok(())
}
