//! Reducer logic for the task list.
//!
//! Every operation is total: blank titles and unknown ids leave state
//! untouched instead of producing an error.

use crate::types::{Task, TaskAction, TaskId, TaskListState};
use std::sync::Arc;
use tasklist_core::{
    effect::Effect, environment::IdGenerator, environment::SequentialIds, reducer::Reducer,
    SmallVec,
};

/// Environment dependencies for the task list reducer
#[derive(Clone)]
pub struct TaskListEnvironment {
    /// Source of task ids
    pub ids: Arc<dyn IdGenerator>,
}

impl TaskListEnvironment {
    /// Creates a new `TaskListEnvironment`
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }
}

impl Default for TaskListEnvironment {
    /// Ids from a fresh [`SequentialIds`] counter starting at 1
    fn default() -> Self {
        Self::new(Arc::new(SequentialIds::new()))
    }
}

/// Reducer for the task list
#[derive(Clone, Debug)]
pub struct TaskListReducer;

impl TaskListReducer {
    /// Creates a new `TaskListReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Appends a task, returning whether one was added
    fn add_task(state: &mut TaskListState, title: &str, env: &TaskListEnvironment) -> bool {
        let title = title.trim();
        if title.is_empty() {
            tracing::trace!("Ignoring blank title");
            return false;
        }

        let id = TaskId::new(env.ids.next_id());
        if state.exists(id) {
            tracing::warn!(%id, "Id generator returned an id already in use, task not added");
            return false;
        }

        state.tasks.push(Task::new(id, title.to_string()));
        tracing::debug!(%id, count = state.count(), "Task added");
        true
    }

    fn toggle_task(state: &mut TaskListState, id: TaskId) {
        let Some(task) = state.get_mut(id) else {
            tracing::trace!(%id, "Ignoring toggle of unknown task");
            return;
        };

        task.toggle();
        tracing::debug!(%id, completed = task.completed, "Task toggled");
    }

    fn clear_completed(state: &mut TaskListState) {
        let before = state.count();
        state.tasks.retain(|t| !t.completed);
        tracing::debug!(removed = before - state.count(), "Cleared completed tasks");
    }
}

impl Default for TaskListReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for TaskListReducer {
    type State = TaskListState;
    type Action = TaskAction;
    type Environment = TaskListEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TaskAction::AddTask { title } => {
                Self::add_task(state, &title, env);
                SmallVec::new()
            },

            TaskAction::ToggleTask { id } => {
                Self::toggle_task(state, id);
                SmallVec::new()
            },

            TaskAction::ClearCompleted => {
                Self::clear_completed(state);
                SmallVec::new()
            },

            TaskAction::SetFilter { filter } => {
                tracing::debug!(%filter, "Filter changed");
                state.filter = filter;
                SmallVec::new()
            },

            TaskAction::EditDraft { text } => {
                state.draft = text;
                SmallVec::new()
            },

            TaskAction::SubmitDraft => {
                // The draft is only cleared once its task is in the list
                let title = state.draft.clone();
                if Self::add_task(state, &title, env) {
                    state.draft.clear();
                }
                SmallVec::new()
            },
        }
    }
}
