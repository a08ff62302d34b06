//! # Tasklist Testing
//!
//! Testing utilities and helpers for the tasklist reducer architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A fluent Given-When-Then harness for reducers
//! - Property-based testing strategies
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```ignore
//! use tasklist_testing::{assertions, ReducerTest, ScriptedIds};
//!
//! ReducerTest::new(TaskListReducer::new())
//!     .with_env(TaskListEnvironment::new(Arc::new(ScriptedIds::new(vec![7]))))
//!     .given_state(TaskListState::new())
//!     .when_action(TaskAction::AddTask { title: "Buy milk".into() })
//!     .then_state(|state| assert_eq!(state.count(), 1))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

use tasklist_core::environment::IdGenerator;


/// Mock implementations of Environment traits
pub mod mocks {
    use super::IdGenerator;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Id generator that replays a fixed script
    ///
    /// Returns the scripted ids in order, then keeps repeating the last one.
    /// Repeating is deliberate: it lets tests provoke id collisions.
    ///
    /// # Example
    ///
    /// ```
    /// use tasklist_testing::mocks::ScriptedIds;
    /// use tasklist_core::environment::IdGenerator;
    ///
    /// let ids = ScriptedIds::new(vec![10, 20]);
    /// assert_eq!(ids.next_id(), 10);
    /// assert_eq!(ids.next_id(), 20);
    /// assert_eq!(ids.next_id(), 20);
    /// ```
    #[derive(Debug)]
    pub struct ScriptedIds {
        ids: Vec<u64>,
        cursor: AtomicUsize,
    }

    impl ScriptedIds {
        /// Create a generator replaying `ids`
        ///
        /// An empty script yields `0` forever.
        #[must_use]
        pub const fn new(ids: Vec<u64>) -> Self {
            Self {
                ids,
                cursor: AtomicUsize::new(0),
            }
        }

        /// Number of ids handed out so far
        #[must_use]
        pub fn calls(&self) -> usize {
            self.cursor.load(Ordering::Relaxed)
        }
    }

    impl IdGenerator for ScriptedIds {
        fn next_id(&self) -> u64 {
            let index = self.cursor.fetch_add(1, Ordering::Relaxed);
            self.ids
                .get(index)
                .or_else(|| self.ids.last())
                .copied()
                .unwrap_or(0)
        }
    }

    /// Create a scripted generator yielding `1..=count` and then `count` forever
    #[must_use]
    pub fn test_ids(count: u64) -> ScriptedIds {
        ScriptedIds::new((1..=count).collect())
    }
}

/// Test helpers and utilities
pub mod helpers {
    use tracing_subscriber::EnvFilter;

    /// Route `tracing` output through the test harness
    ///
    /// Honors `RUST_LOG`, defaulting to `warn`. Safe to call from every test;
    /// only the first call installs the subscriber.
    pub fn init_test_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    }
}

/// Property-based testing utilities using proptest
pub mod properties {
    use proptest::prelude::*;

    /// Titles with at least one non-whitespace character
    pub fn non_blank_title() -> impl Strategy<Value = String> {
        "[ \t]{0,3}[A-Za-z0-9][A-Za-z0-9 .,!?-]{0,24}[ \t]{0,3}"
    }

    /// Titles that trim to the empty string
    pub fn blank_title() -> impl Strategy<Value = String> {
        "[ \t\n]{0,6}"
    }

    /// Any title, blank roughly a quarter of the time
    pub fn any_title() -> impl Strategy<Value = String> {
        prop_oneof![
            3 => non_blank_title(),
            1 => blank_title(),
        ]
    }
}

// Re-export commonly used items
pub use mocks::{test_ids, ScriptedIds};
pub use reducer_test::{assertions, ReducerTest};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_scripted_ids_replay_then_repeat() {
        let ids = test_ids(2);
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
        assert_eq!(ids.next_id(), 2);
        assert_eq!(ids.calls(), 3);
    }

    #[test]
    fn test_empty_script_yields_zero() {
        let ids = ScriptedIds::new(Vec::new());
        assert_eq!(ids.next_id(), 0);
        assert_eq!(ids.next_id(), 0);
    }

    #[test]
    fn test_init_test_tracing_is_idempotent() {
        helpers::init_test_tracing();
        helpers::init_test_tracing();
    }

    proptest! {
        #[test]
        fn non_blank_titles_survive_trimming(title in properties::non_blank_title()) {
            prop_assert!(!title.trim().is_empty());
        }

        #[test]
        fn blank_titles_trim_to_empty(title in properties::blank_title()) {
            prop_assert!(title.trim().is_empty());
        }
    }
}
