//! Property tests for the task list store

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use proptest::prelude::*;
use tasklist::{Filter, Task, TaskAction, TaskId, TaskListStore};
use tasklist_testing::properties::{any_title, blank_title, non_blank_title};

fn filter() -> impl Strategy<Value = Filter> {
    prop_oneof![Just(Filter::All), Just(Filter::Active), Just(Filter::Completed)]
}

/// Random interactions; toggles pick ids in a range that includes unknown ones
fn action() -> impl Strategy<Value = TaskAction> {
    prop_oneof![
        4 => any_title().prop_map(|title| TaskAction::AddTask { title }),
        3 => (0_u64..12).prop_map(|id| TaskAction::ToggleTask { id: TaskId::new(id) }),
        1 => Just(TaskAction::ClearCompleted),
        1 => filter().prop_map(|filter| TaskAction::SetFilter { filter }),
        1 => any_title().prop_map(|text| TaskAction::EditDraft { text }),
        1 => Just(TaskAction::SubmitDraft),
    ]
}

fn store_after(actions: Vec<TaskAction>) -> TaskListStore {
    let mut store = TaskListStore::new();
    for action in actions {
        store.send(action);
    }
    store
}

proptest! {
    #[test]
    fn adding_non_blank_titles_appends_incomplete_tasks(titles in prop::collection::vec(non_blank_title(), 0..20)) {
        let mut store = TaskListStore::new();
        for title in &titles {
            store.add_task(title);
        }

        let tasks = store.tasks();
        prop_assert_eq!(tasks.len(), titles.len());
        for (task, title) in tasks.iter().zip(&titles) {
            prop_assert_eq!(task.title.as_str(), title.trim());
            prop_assert!(!task.completed);
        }
    }

    #[test]
    fn blank_titles_never_add(actions in prop::collection::vec(action(), 0..30), blank in blank_title()) {
        let mut store = store_after(actions);
        let before = store.tasks().len();
        store.add_task(&blank);
        prop_assert_eq!(store.tasks().len(), before);
    }

    #[test]
    fn toggle_twice_is_identity(actions in prop::collection::vec(action(), 0..30), id in 0_u64..12) {
        let mut store = store_after(actions);
        let before = store.tasks();
        store.toggle_task(TaskId::new(id));
        store.toggle_task(TaskId::new(id));
        prop_assert_eq!(store.tasks(), before);
    }

    #[test]
    fn clear_completed_removes_exactly_completed(actions in prop::collection::vec(action(), 0..40)) {
        let mut store = store_after(actions);
        let expected: Vec<Task> = store.tasks().into_iter().filter(|t| !t.completed).collect();

        store.clear_completed();
        prop_assert_eq!(store.tasks(), expected.clone());

        store.clear_completed();
        prop_assert_eq!(store.tasks(), expected);
    }

    #[test]
    fn view_is_consistent_with_tasks(actions in prop::collection::vec(action(), 0..40)) {
        let store = store_after(actions);
        let tasks = store.tasks();
        let view = store.view();

        let remaining = tasks.iter().filter(|t| !t.completed).count();
        prop_assert_eq!(view.remaining_count, remaining);

        let expected: Vec<Task> = tasks.into_iter().filter(|t| view.filter.matches(t)).collect();
        prop_assert_eq!(view.visible_tasks, expected);
    }

    #[test]
    fn ids_are_unique_and_increasing(actions in prop::collection::vec(action(), 0..40)) {
        let store = store_after(actions);
        let ids: Vec<TaskId> = store.tasks().iter().map(|t| t.id).collect();
        prop_assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
