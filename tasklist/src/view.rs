//! Derived view-model for the rendering layer.
//!
//! The view is never stored. [`TaskView::of`] recomputes it from the current
//! state on every read, so it cannot go stale.

use crate::types::{Filter, Task, TaskListState};
use serde::{Deserialize, Serialize};

/// What the rendering layer draws: the visible rows and the footer data
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskView {
    /// Tasks matching the active filter, in insertion order
    pub visible_tasks: Vec<Task>,
    /// Tasks not yet completed, regardless of filter
    pub remaining_count: usize,
    /// Active filter, for highlighting the selected footer button
    pub filter: Filter,
}

impl TaskView {
    /// Derives the view from state
    #[must_use]
    pub fn of(state: &TaskListState) -> Self {
        let filter = state.filter;
        Self {
            visible_tasks: state
                .tasks
                .iter()
                .filter(|task| filter.matches(task))
                .cloned()
                .collect(),
            remaining_count: state.remaining_count(),
            filter,
        }
    }

    /// Returns true if no task is visible under the active filter
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible_tasks.is_empty()
    }

    /// Footer counter, e.g. `"2 left"`
    #[must_use]
    pub fn remaining_label(&self) -> String {
        format!("{} left", self.remaining_count)
    }

    /// Placeholder shown instead of the list when nothing is visible
    #[must_use]
    pub const fn empty_message(&self) -> &'static str {
        match self.filter {
            Filter::All => "No todos :(",
            Filter::Active => "No active todos :(",
            Filter::Completed => "No completed todos :(",
        }
    }
}

impl From<&TaskListState> for TaskView {
    fn from(state: &TaskListState) -> Self {
        Self::of(state)
    }
}
