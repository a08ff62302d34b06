//! Domain types for the task list.
//!
//! A task list is an ordered collection of tasks plus the UI state that
//! decides which of them are shown: the active [`Filter`] and the draft text
//! of the add form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Unique identifier for a task
///
/// Allocated from a monotonic counter, so ids also encode creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a `TaskId` from its raw value
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single task
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,
    /// Trimmed, non-empty title
    pub title: String,
    /// Whether the task is done
    pub completed: bool,
}

impl Task {
    /// Creates a new, not yet completed task
    #[must_use]
    pub const fn new(id: TaskId, title: String) -> Self {
        Self {
            id,
            title,
            completed: false,
        }
    }

    /// Flips the completion flag
    pub const fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Which tasks the view shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Every task
    #[default]
    All,
    /// Tasks not yet completed
    Active,
    /// Completed tasks
    Completed,
}

impl Filter {
    /// Every filter, in the order the footer shows them
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Completed];

    /// Returns true if `task` is visible under this filter
    #[must_use]
    pub const fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Button caption
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string that names no filter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown filter `{0}` (expected all, active or completed)")]
pub struct ParseFilterError(String);

impl FromStr for Filter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|filter| filter.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseFilterError(wanted.to_string()))
    }
}

/// State of the task list
///
/// `tasks` is kept in insertion order; everything the UI shows is derived
/// from this struct by [`crate::view::TaskView::of`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListState {
    /// All tasks, oldest first
    pub tasks: Vec<Task>,
    /// Active filter
    pub filter: Filter,
    /// Unsubmitted text of the add form
    pub draft: String,
}

impl TaskListState {
    /// Creates an empty task list showing all tasks
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: Vec::new(),
            filter: Filter::All,
            draft: String::new(),
        }
    }

    /// Returns the number of tasks
    #[must_use]
    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    /// Returns the number of tasks not yet completed
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    /// Returns a task by ID
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Returns a mutable task by ID
    pub fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Checks if a task exists
    #[must_use]
    pub fn exists(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }
}

/// Everything the rendering layer can ask the task list to do
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskAction {
    /// Append a task; ignored when the title is blank
    AddTask {
        /// Title as typed; trimmed before storing
        title: String,
    },

    /// Flip completion of a task; ignored for unknown ids
    ToggleTask {
        /// Task to toggle
        id: TaskId,
    },

    /// Remove every completed task
    ClearCompleted,

    /// Change which tasks are visible
    SetFilter {
        /// New filter
        filter: Filter,
    },

    /// Replace the draft text of the add form
    EditDraft {
        /// Full draft text
        text: String,
    },

    /// Submit the draft as a new task
    SubmitDraft,
}
