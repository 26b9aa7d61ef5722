//! When steps for task board BDD scenarios.

use super::world::{BoardWorld, run_async, upcoming_date};
use rstest_bdd_macros::when;

#[when(r#"the user saves a task titled "{title}" with status "{status}" and budget "{budget}""#)]
fn save_task(
    world: &mut BoardWorld,
    title: String,
    status: String,
    budget: String,
) -> Result<(), eyre::Report> {
    let values = world.board.form_mut().values_mut();
    values.title = title;
    values.status = status;
    values.budget = budget;
    values.start_date = upcoming_date()?;

    world.last_failure = run_async(world.board.save()).err();
    Ok(())
}

#[when(r#"the user marks task {index:u64} as "{status}""#)]
fn mark_task(world: &mut BoardWorld, index: u64, status: String) -> Result<(), eyre::Report> {
    let position = usize::try_from(index)?;
    world
        .board
        .begin_edit(position)
        .map_err(|err| eyre::eyre!("cannot edit task {position}: {err}"))?;
    world.board.form_mut().values_mut().status = status;

    run_async(world.board.save()).map_err(|err| eyre::eyre!("status update failed: {err}"))?;
    Ok(())
}

#[when("the user hides completed tasks")]
fn hide_completed(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    if !world.board.toggle_completed_filter() {
        return Err(eyre::eyre!("completed filter should now be enabled"));
    }
    Ok(())
}

#[when("the user deletes task {index:u64}")]
fn delete_task(world: &mut BoardWorld, index: u64) -> Result<(), eyre::Report> {
    let position = usize::try_from(index)?;
    world.last_failure = run_async(world.board.remove(position)).err();
    Ok(())
}

#[when("the user deletes every task")]
fn delete_every_task(world: &mut BoardWorld) {
    world.last_failure = run_async(world.board.remove_all()).err();
}
