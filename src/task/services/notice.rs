//! Transient outcome messages shown to the user.

use std::fmt;
use std::time::Duration;

/// Tone of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    /// An operation succeeded.
    Success,
    /// An operation failed; local state was left unchanged.
    Error,
}

impl NoticeKind {
    /// Returns how long the presentation layer should display the notice.
    #[must_use]
    pub const fn display_for(self) -> Duration {
        match self {
            Self::Success => Duration::from_secs(3),
            Self::Error => Duration::from_secs(5),
        }
    }
}

/// Message describing the outcome of the latest board operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    kind: NoticeKind,
    message: String,
}

impl Notice {
    /// Creates a success notice.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    /// Creates an error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    /// Returns the tone.
    #[must_use]
    pub const fn kind(&self) -> NoticeKind {
        self.kind
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` for error notices.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.kind, NoticeKind::Error)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NoticeKind::Success => write!(f, "[ok] {}", self.message),
            NoticeKind::Error => write!(f, "[error] {}", self.message),
        }
    }
}
