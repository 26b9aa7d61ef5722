//! Terminal client for a remote task board.
//!
//! Usage:
//!
//! ```text
//! taskboard [--api-url URL] [--owner ID] [--filter-by-owner] [--hide-completed] <command>
//! ```
//!
//! Every command first loads the board from the server, then applies the
//! requested change and prints the notice and the rendered task list.
//! Settings not given as flags come from `TASKBOARD_*` environment variables.
//! Run `taskboard --help` for the full list.

use clap::{Args, Parser, Subcommand};
use mockable::DefaultClock;
use std::error::Error;
use std::io::{self, Write};
use std::sync::Arc;
use tracing::warn;

use taskboard::config::{BoardConfig, ConfigArgs};
use taskboard::task::adapters::http::HttpTaskGateway;
use taskboard::task::services::TaskBoard;
use taskboard::task::validation::FormValues;
use taskboard::telemetry::init_tracing;

type CliResult<T> = Result<T, Box<dyn Error + Send + Sync>>;
type Board = TaskBoard<HttpTaskGateway, DefaultClock>;

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "Track tasks stored on a remote task API", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    settings: ConfigArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Show the task list
    List,

    /// Create a task
    Add(TaskArgs),

    /// Edit the task at a list position
    Edit {
        /// Position shown in the list
        index: usize,

        #[command(flatten)]
        changes: EditArgs,
    },

    /// Delete the task at a list position
    Delete {
        /// Position shown in the list
        index: usize,
    },

    /// Delete every task
    Clear,
}

#[derive(Args)]
struct TaskArgs {
    /// Task title
    #[arg(short, long)]
    title: String,

    /// Task description
    #[arg(short, long)]
    description: Option<String>,

    /// Start date (YYYY-MM-DD)
    #[arg(short, long)]
    start_date: String,

    /// Status: New, In Progress, Completed or Cancelled
    #[arg(long, default_value = "New")]
    status: String,

    /// Budget in US dollars
    #[arg(short, long)]
    budget: Option<String>,

    /// Display color
    #[arg(short, long)]
    color: Option<String>,
}

#[derive(Args)]
struct EditArgs {
    /// New title
    #[arg(short, long)]
    title: Option<String>,

    /// New description
    #[arg(short, long)]
    description: Option<String>,

    /// New start date (YYYY-MM-DD)
    #[arg(short, long)]
    start_date: Option<String>,

    /// New status
    #[arg(long)]
    status: Option<String>,

    /// New budget
    #[arg(short, long)]
    budget: Option<String>,

    /// New display color
    #[arg(short, long)]
    color: Option<String>,
}

impl EditArgs {
    fn apply(self, values: &mut FormValues) {
        let Self {
            title,
            description,
            start_date,
            status,
            budget,
            color,
        } = self;
        let slots = [
            (title, &mut values.title),
            (description, &mut values.description),
            (start_date, &mut values.start_date),
            (status, &mut values.status),
            (budget, &mut values.budget),
            (color, &mut values.color),
        ];
        for (change, slot) in slots {
            if let Some(value) = change {
                *slot = value;
            }
        }
    }
}

async fn execute(board: &mut Board, command: Command) -> CliResult<()> {
    match command {
        Command::List => Ok(()),
        Command::Add(args) => {
            let values = board.form_mut().values_mut();
            values.title = args.title;
            values.description = args.description.unwrap_or_default();
            values.start_date = args.start_date;
            values.status = args.status;
            values.budget = args.budget.unwrap_or_default();
            if let Some(color) = args.color {
                values.color = color;
            }
            board.save().await?;
            Ok(())
        }
        Command::Edit { index, changes } => {
            board.begin_edit(index)?;
            changes.apply(board.form_mut().values_mut());
            board.save().await?;
            Ok(())
        }
        Command::Delete { index } => {
            board.remove(index).await?;
            Ok(())
        }
        Command::Clear => {
            board.remove_all().await?;
            Ok(())
        }
    }
}

fn render(board: &mut Board) -> io::Result<()> {
    let mut out = io::stdout().lock();
    if let Some(notice) = board.take_notice() {
        writeln!(out, "{notice}")?;
    }
    write!(out, "{}", board.view())
}

#[tokio::main]
async fn main() -> CliResult<()> {
    init_tracing("info")?;
    let Cli { command, settings } = Cli::parse();
    let config = BoardConfig::from(settings);

    let gateway = Arc::new(HttpTaskGateway::new(&config)?);
    let mut board = TaskBoard::new(gateway, Arc::new(DefaultClock), &config);

    if let Err(err) = board.load_all().await {
        warn!(error = %err, "starting without server data");
    }
    let outcome = execute(&mut board, command).await;
    render(&mut board)?;
    outcome
}
