//! Application services for task board orchestration.

mod board;
mod cursor;
mod notice;

pub use board::{BoardError, BoardResult, SaveOutcome, SyncMode, TaskBoard};
pub use cursor::EditCursor;
pub use notice::{Notice, NoticeKind};
