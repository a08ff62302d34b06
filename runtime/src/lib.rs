//! # Tasklist Runtime
//!
//! Runtime implementation for the tasklist reducer architecture.
//!
//! This crate provides the Store runtime that coordinates reducer execution
//! and effect handling.
//!
//! ## Core Components
//!
//! - **Store**: Owns state, runs the reducer and drains dispatched effects
//! - **Revisions**: A `watch` channel bumped after every processed action so
//!   a rendering layer knows when to re-read state
//!
//! Everything runs synchronously on the caller's thread. `send` takes
//! `&mut self`, so exclusive ownership of the state is checked at compile
//! time and no locks are involved.
//!
//! ## Example
//!
//! ```ignore
//! use tasklist_runtime::Store;
//!
//! let mut store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething);
//!
//! // Read state
//! let value = store.state(|s| s.some_field);
//! ```

use tasklist_core::{effect::Effect, reducer::Reducer};

/// Store configuration
///
/// # Example
///
/// ```
/// use tasklist_runtime::StoreConfig;
///
/// let config = StoreConfig::default().with_max_actions_per_send(8);
/// assert_eq!(config.max_actions_per_send, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Upper bound on actions reduced by a single `send`, counting the
    /// original action and every action dispatched by effects.
    ///
    /// Dispatches past this bound are dropped and logged.
    pub max_actions_per_send: usize,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub const fn new(max_actions_per_send: usize) -> Self {
        Self {
            max_actions_per_send,
        }
    }

    /// Set the feedback bound
    ///
    /// A value of zero is treated as one: the sent action itself is always
    /// reduced.
    #[must_use]
    pub const fn with_max_actions_per_send(mut self, max: usize) -> Self {
        self.max_actions_per_send = max;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_actions_per_send: 64,
        }
    }
}

/// Store module - the runtime coordinator
pub mod store {
    use super::{Effect, Reducer, StoreConfig};
    use std::collections::VecDeque;
    use tokio::sync::watch;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (owned, mutated only through `send`)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (dispatch feedback loop)
    /// 5. Revision publishing for observers
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: S,
        reducer: R,
        environment: E,
        config: StoreConfig,
        /// Revision counter, bumped once per `send`.
        ///
        /// `watch` keeps only the latest value, so observers never see an
        /// intermediate revision they have already been overtaken on.
        revision: watch::Sender<u64>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new store with a custom configuration
        #[must_use]
        pub fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            let (revision, _) = watch::channel(0);

            Self {
                state: initial_state,
                reducer,
                environment,
                config,
                revision,
            }
        }

        /// Send an action to the store
        ///
        /// This method:
        /// 1. Calls the reducer with (state, action, environment)
        /// 2. Queues every `Effect::Dispatch` the reducer returned
        /// 3. Reduces queued actions in FIFO order until the queue is empty
        ///    or the configured bound is reached
        /// 4. Publishes a new revision
        ///
        /// When `send` returns, state reflects every reduced action.
        ///
        /// # Returns
        ///
        /// The number of actions reduced, including the one sent.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub fn send(&mut self, action: A) -> usize {
            let limit = self.config.max_actions_per_send.max(1);
            let mut queue = VecDeque::from([action]);
            let mut processed = 0;

            while let Some(action) = queue.pop_front() {
                if processed == limit {
                    tracing::warn!(
                        limit,
                        dropped = queue.len() + 1,
                        "Feedback bound reached, dropping dispatched actions"
                    );
                    break;
                }

                let effects = self.reducer.reduce(&mut self.state, action, &self.environment);
                processed += 1;
                tracing::trace!("Reducer completed, returned {} effects", effects.len());

                for effect in effects {
                    match effect {
                        Effect::None => {},
                        Effect::Dispatch(next) => {
                            tracing::trace!("Queueing dispatched action");
                            queue.push_back(next);
                        },
                    }
                }
            }

            self.revision.send_modify(|revision| *revision += 1);
            tracing::debug!(processed, "Action processing completed");

            processed
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let task_count = store.state(|s| s.tasks.len());
        /// ```
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            f(&self.state)
        }

        /// The revision published by the most recent `send`
        ///
        /// Starts at zero for a fresh store.
        #[must_use]
        pub fn revision(&self) -> u64 {
            *self.revision.borrow()
        }

        /// Subscribe to revision changes
        ///
        /// The receiver reports `has_changed()` after every `send`; call
        /// `borrow_and_update()` to mark the change seen, then re-read state.
        ///
        /// ```ignore
        /// let mut changes = store.subscribe();
        /// store.send(Action::DoSomething);
        /// if changes.has_changed().unwrap_or(false) {
        ///     changes.borrow_and_update();
        ///     render(store.state(|s| view(s)));
        /// }
        /// ```
        #[must_use]
        pub fn subscribe(&self) -> watch::Receiver<u64> {
            self.revision.subscribe()
        }
    }
}

pub use store::Store;

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)] // Test code can use unwrap

    use super::*;
    use tasklist_core::{smallvec, SmallVec};

    #[derive(Debug, Clone, Default)]
    struct TestState {
        value: i32,
        log: Vec<&'static str>,
    }

    #[derive(Debug, Clone)]
    enum TestAction {
        Increment,
        Decrement,
        NoOp,
        IncrementThenDecrement,
        Forever,
    }

    #[derive(Debug, Clone)]
    struct TestEnv;

    #[derive(Debug, Clone)]
    struct TestReducer;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = TestEnv;

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            match action {
                TestAction::Increment => {
                    state.value += 1;
                    state.log.push("inc");
                    smallvec![Effect::None]
                },
                TestAction::Decrement => {
                    state.value -= 1;
                    state.log.push("dec");
                    smallvec![Effect::None]
                },
                TestAction::NoOp => SmallVec::new(),
                TestAction::IncrementThenDecrement => smallvec![
                    Effect::Dispatch(TestAction::Increment),
                    Effect::Dispatch(TestAction::Decrement),
                ],
                TestAction::Forever => {
                    state.value += 1;
                    smallvec![Effect::Dispatch(TestAction::Forever)]
                },
            }
        }
    }

    fn store() -> Store<TestState, TestAction, TestEnv, TestReducer> {
        Store::new(TestState::default(), TestReducer, TestEnv)
    }

    #[test]
    fn test_store_creation() {
        let store = store();
        assert_eq!(store.state(|s| s.value), 0);
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_send_applies_action() {
        let mut store = store();
        assert_eq!(store.send(TestAction::Increment), 1);
        assert_eq!(store.send(TestAction::Increment), 1);
        assert_eq!(store.send(TestAction::Decrement), 1);
        assert_eq!(store.state(|s| s.value), 1);
    }

    #[test]
    fn test_dispatched_actions_drain_in_order() {
        let mut store = store();
        let processed = store.send(TestAction::IncrementThenDecrement);

        assert_eq!(processed, 3);
        assert_eq!(store.state(|s| s.value), 0);
        assert_eq!(store.state(|s| s.log.clone()), vec!["inc", "dec"]);
    }

    #[test]
    fn test_feedback_bound_stops_runaway_dispatch() {
        let config = StoreConfig::default().with_max_actions_per_send(5);
        let mut store = Store::with_config(TestState::default(), TestReducer, TestEnv, config);

        assert_eq!(store.send(TestAction::Forever), 5);
        assert_eq!(store.state(|s| s.value), 5);
    }

    #[test]
    fn test_zero_bound_still_reduces_sent_action() {
        let config = StoreConfig::new(0);
        let mut store = Store::with_config(TestState::default(), TestReducer, TestEnv, config);

        assert_eq!(store.send(TestAction::IncrementThenDecrement), 1);
        assert_eq!(store.state(|s| s.value), 0);
    }

    #[test]
    fn test_revision_bumps_per_send() {
        let mut store = store();
        store.send(TestAction::NoOp);
        store.send(TestAction::IncrementThenDecrement);
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn test_subscriber_sees_latest_revision_only() {
        let mut store = store();
        let mut changes = store.subscribe();
        assert!(!changes.has_changed().unwrap());

        store.send(TestAction::Increment);
        store.send(TestAction::Increment);

        assert!(changes.has_changed().unwrap());
        assert_eq!(*changes.borrow_and_update(), 2);
        assert!(!changes.has_changed().unwrap());
    }
}
