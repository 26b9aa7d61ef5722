//! Then steps for task board BDD scenarios.

use super::world::{BoardWorld, run_async};
use rstest_bdd_macros::then;
use taskboard::task::{
    ports::GatewayOperation, services::BoardError, validation::FormField,
};

fn expect_count(label: &str, actual: usize, expected: u64) -> Result<(), eyre::Report> {
    if u64::try_from(actual)? != expected {
        return Err(eyre::eyre!("expected {expected} {label}, found {actual}"));
    }
    Ok(())
}

#[then("the board task count is {count:u64}")]
fn board_task_count(world: &BoardWorld, count: u64) -> Result<(), eyre::Report> {
    expect_count("tasks", world.board.tasks().len(), count)
}

#[then(r#"reloading the board shows a task titled "{title}""#)]
fn reload_shows_title(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    run_async(world.board.refresh()).map_err(|err| eyre::eyre!("reload failed: {err}"))?;
    if !world.board.tasks().iter().any(|task| task.title() == title) {
        return Err(eyre::eyre!("no task titled {title} after reload"));
    }
    Ok(())
}

#[then(r#"the title field shows "{message}""#)]
fn title_field_shows(world: &BoardWorld, message: String) -> Result<(), eyre::Report> {
    let shown = world
        .board
        .form()
        .errors()
        .get(FormField::Title)
        .map(|error| error.to_string());
    if shown.as_deref() != Some(message.as_str()) {
        return Err(eyre::eyre!("expected title marker {message}, found {shown:?}"));
    }
    Ok(())
}

#[then("the server received {count:u64} create requests")]
fn create_requests(world: &BoardWorld, count: u64) -> Result<(), eyre::Report> {
    let calls = world.gateway.call_count(GatewayOperation::Create)?;
    expect_count("create requests", calls, count)
}

#[then("the server received {count:u64} list requests")]
fn list_requests(world: &BoardWorld, count: u64) -> Result<(), eyre::Report> {
    let calls = world.gateway.call_count(GatewayOperation::List)?;
    expect_count("list requests", calls, count)
}

#[then("the view shows {count:u64} cards")]
fn view_cards(world: &BoardWorld, count: u64) -> Result<(), eyre::Report> {
    expect_count("cards", world.board.view().cards().len(), count)
}

#[then(r#"the notice reads "{message}""#)]
fn notice_reads(world: &BoardWorld, message: String) -> Result<(), eyre::Report> {
    let shown = world.board.notice().map(|notice| notice.message().to_owned());
    if shown.as_deref() != Some(message.as_str()) {
        return Err(eyre::eyre!("expected notice {message}, found {shown:?}"));
    }
    Ok(())
}

#[then("the bulk deletion reports {count:u64} failures")]
fn bulk_failures(world: &BoardWorld, count: u64) -> Result<(), eyre::Report> {
    match &world.last_failure {
        Some(BoardError::PartialBatch { failed, .. }) => {
            expect_count("failed deletions", *failed, count)
        }
        other => Err(eyre::eyre!("expected partial batch failure, found {other:?}")),
    }
}
