//! Given steps for task board BDD scenarios.

use super::world::{BoardWorld, run_async, stored_record};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::task::domain::TaskId;

#[given("an empty task server")]
fn empty_task_server(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    run_async(world.board.load_all()).wrap_err("load empty board")?;
    Ok(())
}

#[given(r#"a task server holding "{first}" and "{second}""#)]
fn task_server_holding(
    world: &mut BoardWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    for (id, title) in [("1", first), ("2", second)] {
        world
            .gateway
            .insert(stored_record(id, &title)?)
            .wrap_err("seed stored record")?;
    }
    run_async(world.board.load_all()).wrap_err("load seeded board")?;
    Ok(())
}

#[given(r#"the server rejects deleting "{title}""#)]
fn server_rejects_deleting(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let records = world.gateway.records().wrap_err("read stored records")?;
    let key: TaskId = records
        .into_iter()
        .find(|record| record.title.as_deref() == Some(title.as_str()))
        .and_then(|record| record.server_id.or(record.id))
        .ok_or_else(|| eyre::eyre!("no stored record titled {title}"))?;
    world
        .gateway
        .reject_delete(key)
        .wrap_err("script delete rejection")?;
    Ok(())
}
