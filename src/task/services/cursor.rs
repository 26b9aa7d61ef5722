//! Edit cursor tracking which task is loaded into the form.

/// Position of the task currently loaded into the form, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditCursor(Option<usize>);

impl EditCursor {
    /// No task is being edited.
    pub const IDLE: Self = Self(None);

    /// Points at the task at `index`.
    #[must_use]
    pub const fn at(index: usize) -> Self {
        Self(Some(index))
    }

    /// Returns the edited position, if any.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        self.0
    }

    /// Returns `true` when no task is being edited.
    #[must_use]
    pub const fn is_idle(self) -> bool {
        self.0.is_none()
    }

    /// Returns `true` when the task at `index` is being edited.
    #[must_use]
    pub const fn points_at(self, index: usize) -> bool {
        matches!(self.0, Some(current) if current == index)
    }

    /// Returns the cursor after the entry at `removed` left the collection.
    ///
    /// The cursor keeps pointing at the same task: it moves down by one when
    /// an earlier entry was removed and becomes idle when its own entry was.
    #[must_use]
    pub const fn after_removal(self, removed: usize) -> Self {
        match self.0 {
            Some(current) if current == removed => Self::IDLE,
            Some(current) if current > removed => Self(Some(current - 1)),
            other => Self(other),
        }
    }
}
