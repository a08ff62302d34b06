//! The task list store: the API a rendering layer talks to.
//!
//! Wraps a runtime [`Store`] running [`TaskListReducer`] and exposes one
//! method per user interaction plus [`TaskListStore::view`] for reads.

use crate::reducer::{TaskListEnvironment, TaskListReducer};
use crate::types::{Filter, Task, TaskAction, TaskId, TaskListState};
use crate::view::TaskView;
use tasklist_runtime::{Store, StoreConfig};
use tokio::sync::watch;

type Inner = Store<TaskListState, TaskAction, TaskListEnvironment, TaskListReducer>;

/// Owns the task list and its UI state
///
/// # Example
///
/// ```
/// use tasklist::{Filter, TaskListStore};
///
/// let mut store = TaskListStore::new();
/// store.add_task("Buy milk");
/// store.add_task("Walk dog");
///
/// let milk = store.view().visible_tasks[0].id;
/// store.toggle_task(milk);
/// store.set_filter(Filter::Active);
///
/// let view = store.view();
/// assert_eq!(view.visible_tasks.len(), 1);
/// assert_eq!(view.visible_tasks[0].title, "Walk dog");
/// assert_eq!(view.remaining_count, 1);
/// ```
pub struct TaskListStore {
    inner: Inner,
}

impl TaskListStore {
    /// Creates an empty store with sequential ids starting at 1
    #[must_use]
    pub fn new() -> Self {
        Self::with_environment(TaskListEnvironment::default())
    }

    /// Creates an empty store with the given environment
    #[must_use]
    pub fn with_environment(env: TaskListEnvironment) -> Self {
        Self::with_config(env, StoreConfig::default())
    }

    /// Creates an empty store with the given environment and runtime configuration
    #[must_use]
    pub fn with_config(env: TaskListEnvironment, config: StoreConfig) -> Self {
        Self {
            inner: Store::with_config(TaskListState::new(), TaskListReducer::new(), env, config),
        }
    }

    /// Appends a task titled `title` (trimmed); blank titles are ignored
    pub fn add_task(&mut self, title: &str) {
        self.send(TaskAction::AddTask {
            title: title.to_string(),
        });
    }

    /// Flips completion of task `id`; unknown ids are ignored
    pub fn toggle_task(&mut self, id: TaskId) {
        self.send(TaskAction::ToggleTask { id });
    }

    /// Removes every completed task
    pub fn clear_completed(&mut self) {
        self.send(TaskAction::ClearCompleted);
    }

    /// Changes which tasks the view shows
    pub fn set_filter(&mut self, filter: Filter) {
        self.send(TaskAction::SetFilter { filter });
    }

    /// Replaces the draft text of the add form
    pub fn edit_draft(&mut self, text: &str) {
        self.send(TaskAction::EditDraft {
            text: text.to_string(),
        });
    }

    /// Submits the draft as a new task
    ///
    /// The draft is cleared only once its text is in the list as a task; a
    /// blank draft, or one whose task could not be added, is left as typed.
    pub fn submit_draft(&mut self) {
        self.send(TaskAction::SubmitDraft);
    }

    /// Sends any action through the reducer
    pub fn send(&mut self, action: TaskAction) {
        self.inner.send(action);
    }

    /// Derives the current view
    #[must_use]
    pub fn view(&self) -> TaskView {
        self.inner.state(TaskView::of)
    }

    /// All tasks in insertion order, regardless of filter
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.inner.state(|s| s.tasks.clone())
    }

    /// Current draft text
    #[must_use]
    pub fn draft(&self) -> String {
        self.inner.state(|s| s.draft.clone())
    }

    /// Subscribes to change notifications
    ///
    /// The receiver reports a change after every interaction; re-read
    /// [`TaskListStore::view`] when it does.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.subscribe()
    }
}

impl Default for TaskListStore {
    fn default() -> Self {
        Self::new()
    }
}
