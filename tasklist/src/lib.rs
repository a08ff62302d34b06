//! Task list built on the tasklist reducer architecture.
//!
//! The whole application state is a [`TaskListState`]: tasks in insertion
//! order, the active [`Filter`] and the add-form draft. A [`TaskListReducer`]
//! applies [`TaskAction`]s to it, and a [`TaskView`] is derived from it on
//! every read. [`TaskListStore`] ties these together for a rendering layer.
//!
//! # Quick Start
//!
//! ```
//! use tasklist::{Filter, TaskListStore};
//!
//! let mut store = TaskListStore::new();
//! store.add_task("Buy milk");
//! store.add_task("   "); // ignored
//!
//! let id = store.view().visible_tasks[0].id;
//! store.toggle_task(id);
//!
//! store.set_filter(Filter::Completed);
//! assert_eq!(store.view().visible_tasks.len(), 1);
//!
//! store.clear_completed();
//! assert!(store.view().is_empty());
//! assert_eq!(store.view().empty_message(), "No completed todos :(");
//! ```

pub mod reducer;
pub mod store;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use reducer::{TaskListEnvironment, TaskListReducer};
pub use store::TaskListStore;
pub use types::{Filter, ParseFilterError, Task, TaskAction, TaskId, TaskListState};
pub use view::TaskView;
