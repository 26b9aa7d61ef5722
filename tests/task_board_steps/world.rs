//! Shared world state for task board BDD scenarios.

use std::sync::Arc;

use chrono::{Days, Local};
use mockable::DefaultClock;
use rstest::fixture;
use taskboard::config::BoardConfig;
use taskboard::task::{
    adapters::memory::InMemoryTaskGateway,
    domain::TaskId,
    ports::TaskPayload,
    services::{BoardError, TaskBoard},
};

/// Board type used by the BDD world.
pub type TestBoard = TaskBoard<InMemoryTaskGateway, DefaultClock>;

/// Scenario world for task board behaviour tests.
pub struct BoardWorld {
    pub gateway: Arc<InMemoryTaskGateway>,
    pub board: TestBoard,
    pub last_failure: Option<BoardError>,
}

impl BoardWorld {
    /// Creates a world backed by an empty in-memory server.
    #[must_use]
    pub fn new() -> Self {
        let gateway = Arc::new(InMemoryTaskGateway::new());
        let board = TaskBoard::new(
            Arc::clone(&gateway),
            Arc::new(DefaultClock),
            &BoardConfig::default(),
        );
        Self {
            gateway,
            board,
            last_failure: None,
        }
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Returns a start date a few days ahead as `YYYY-MM-DD`.
pub fn upcoming_date() -> Result<String, eyre::Report> {
    Local::now()
        .date_naive()
        .checked_add_days(Days::new(3))
        .map(|date| date.format("%Y-%m-%d").to_string())
        .ok_or_else(|| eyre::eyre!("start date out of range"))
}

/// Builds a stored record as another client would have created it.
pub fn stored_record(id: &str, title: &str) -> Result<TaskPayload, eyre::Report> {
    Ok(TaskPayload {
        id: Some(TaskId::new(id)?),
        user_id: Some("local-user".to_owned()),
        title: Some(title.to_owned()),
        color: Some("#563d7c".to_owned()),
        start_date: Some(upcoming_date()?),
        status: Some("New".to_owned()),
        ..TaskPayload::default()
    })
}
