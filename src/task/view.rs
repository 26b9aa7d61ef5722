//! Display projection of the task board.
//!
//! [`BoardView`] is a snapshot of what a presentation layer shows: one card
//! per visible task plus the labels around them. It carries no business rules;
//! the [`fmt::Display`] implementation is the plain-text rendering used by the
//! terminal client.

use std::fmt;

use crate::task::domain::{Budget, Task, TaskStatus};
use crate::task::services::EditCursor;

/// Heading shown above a non-empty list.
pub const LIST_HEADING: &str = "Your Tasks";

/// Heading shown when there are no tasks.
pub const EMPTY_HEADING: &str = "No Tasks Yet";

/// Hint shown below the empty heading.
pub const EMPTY_HINT: &str = "Create your first task using the form!";

/// Submit label while no task is being edited.
pub const SAVE_LABEL: &str = "Save Task";

/// Submit label while a task is being edited.
pub const UPDATE_LABEL: &str = "Update Task";

/// One visible task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCard {
    /// Position of the task in the board's collection.
    pub index: usize,
    /// Task title.
    pub title: String,
    /// Status label.
    pub status: TaskStatus,
    /// Style class derived from the status, such as `status-in-progress`.
    pub status_class: String,
    /// Description, when present.
    pub description: Option<String>,
    /// Start date formatted as `M/D/YYYY`.
    pub start_date: String,
    /// Budget formatted as US dollars, present only when above zero.
    pub budget: Option<String>,
    /// Display color.
    pub color: String,
    /// Whether the task is loaded into the form.
    pub editing: bool,
}

impl TaskCard {
    fn from_task(index: usize, task: &Task, cursor: EditCursor) -> Self {
        Self {
            index,
            title: task.title().to_owned(),
            status: task.status(),
            status_class: status_class(task.status()),
            description: task.description().map(str::to_owned),
            start_date: task.start_date().format("%-m/%-d/%Y").to_string(),
            budget: (!task.budget().is_zero()).then(|| format_usd(task.budget())),
            color: task.color().to_owned(),
            editing: cursor.points_at(index),
        }
    }
}

/// Snapshot of the board for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    cards: Vec<TaskCard>,
    total: usize,
    hide_completed: bool,
    editing: bool,
}

impl BoardView {
    /// Projects `tasks` into cards, skipping completed tasks when
    /// `hide_completed` is set.
    #[must_use]
    pub fn project(tasks: &[Task], hide_completed: bool, cursor: EditCursor) -> Self {
        let cards = tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| !(hide_completed && task.status().is_completed()))
            .map(|(index, task)| TaskCard::from_task(index, task, cursor))
            .collect();
        Self {
            cards,
            total: tasks.len(),
            hide_completed,
            editing: !cursor.is_idle(),
        }
    }

    /// Returns the visible cards in collection order.
    #[must_use]
    pub fn cards(&self) -> &[TaskCard] {
        &self.cards
    }

    /// Returns whether the collection itself is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Returns the number of tasks in the collection.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Returns how many tasks the completed filter hides.
    #[must_use]
    pub const fn hidden(&self) -> usize {
        self.total.saturating_sub(self.cards.len())
    }

    /// Returns whether completed tasks are hidden.
    #[must_use]
    pub const fn hide_completed(&self) -> bool {
        self.hide_completed
    }

    /// Returns the heading for the list area.
    #[must_use]
    pub const fn heading(&self) -> &'static str {
        if self.is_empty() {
            EMPTY_HEADING
        } else {
            LIST_HEADING
        }
    }

    /// Returns the label of the form's submit action.
    #[must_use]
    pub const fn submit_label(&self) -> &'static str {
        if self.editing { UPDATE_LABEL } else { SAVE_LABEL }
    }
}

impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading())?;
        if self.is_empty() {
            return writeln!(f, "{EMPTY_HINT}");
        }
        for card in &self.cards {
            let marker = if card.editing { "*" } else { " " };
            writeln!(
                f,
                "{marker}[{}] {} ({}) {}",
                card.index, card.title, card.status, card.color
            )?;
            if let Some(description) = &card.description {
                writeln!(f, "      {description}")?;
            }
            write!(f, "      Start: {}", card.start_date)?;
            if let Some(budget) = &card.budget {
                write!(f, "  Budget: {budget}")?;
            }
            writeln!(f)?;
        }
        if self.hidden() > 0 {
            writeln!(f, "({} completed hidden)", self.hidden())?;
        }
        Ok(())
    }
}

/// Returns the style class for a status, such as `status-in-progress`.
#[must_use]
pub fn status_class(status: TaskStatus) -> String {
    format!("status-{}", status.as_str().to_lowercase().replace(' ', "-"))
}

/// Formats an amount as US dollars with thousands separators.
///
/// ```
/// use taskboard::task::domain::Budget;
/// use taskboard::task::view::format_usd;
///
/// let budget = Budget::new(1234.5).expect("valid budget");
/// assert_eq!(format_usd(budget), "$1,234.50");
/// ```
#[must_use]
pub fn format_usd(budget: Budget) -> String {
    let fixed = format!("{:.2}", budget.amount());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = Vec::with_capacity(whole.len().saturating_mul(2));
    let mut run = 0_u8;
    for digit in whole.chars().rev() {
        if run == 3 {
            grouped.push(',');
            run = 0;
        }
        grouped.push(digit);
        run += 1;
    }
    let whole_grouped: String = grouped.into_iter().rev().collect();
    format!("${whole_grouped}.{cents}")
}
