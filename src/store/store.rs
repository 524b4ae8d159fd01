//! The dispatcher: owns the state and sequences the three engines.

use crate::core::{Action, DispatchHistory, DispatchRecord, Origin, Transitions, Triggers};
use crate::effects::{Effects, Schedule};
use crate::store::config::StoreConfig;
use crate::store::error::DispatchError;
use chrono::Utc;

/// Single-pipeline action store.
///
/// Each dispatched action is folded into the state by the transitions,
/// handed to the effects (whose results wait in the schedule for a later
/// turn), then handed to the triggers, whose follow-ups are dispatched
/// right away, depth-first, in order.
///
/// A panicking handler unwinds out of [`Store::dispatch`] and abandons the
/// rest of the cascade. The state keeps the value produced by the last
/// transition that completed.
///
/// # Example
///
/// ```rust
/// use cascade_store::action_enum;
/// use cascade_store::core::{Transitions, Triggers};
/// use cascade_store::effects::Effects;
/// use cascade_store::store::Store;
///
/// action_enum! {
///     enum Counter: CounterKind {
///         Increment(i64),
///         Overflow,
///     }
/// }
///
/// let transitions = Transitions::new()
///     .on(CounterKind::Increment, |n: i64, a: &Counter| match a {
///         Counter::Increment(k) => n + k,
///         _ => n,
///     })
///     .on(CounterKind::Overflow, |_: i64, _: &Counter| 0);
/// let triggers = Triggers::new()
///     .on(CounterKind::Increment, |n: &i64, _: &Counter| (*n > 9).then_some(Counter::Overflow));
///
/// let mut store: Store<i64, Counter> = Store::new(0, transitions, Effects::new(), triggers);
/// store.dispatch(Counter::Increment(5)).unwrap();
/// assert_eq!(*store.state(), 5);
/// store.dispatch(Counter::Increment(5)).unwrap();
/// assert_eq!(*store.state(), 0);
/// ```
pub struct Store<S, A, Env = ()>
where
    S: Clone,
    A: Action,
    Env: Clone + Send + Sync + 'static,
{
    state: S,
    transitions: Transitions<S, A>,
    effects: Effects<S, A, Env>,
    triggers: Triggers<S, A>,
    schedule: Schedule<A, Env>,
    history: DispatchHistory<A::Kind>,
    config: StoreConfig,
}

impl<S, A, Env> Store<S, A, Env>
where
    S: Clone,
    A: Action,
    Env: Clone + Send + Sync + 'static,
{
    /// Create a store holding `initial` with the default configuration.
    pub fn new(
        initial: S,
        transitions: Transitions<S, A>,
        effects: Effects<S, A, Env>,
        triggers: Triggers<S, A>,
    ) -> Self {
        Self::with_config(initial, transitions, effects, triggers, StoreConfig::default())
    }

    pub fn with_config(
        initial: S,
        transitions: Transitions<S, A>,
        effects: Effects<S, A, Env>,
        triggers: Triggers<S, A>,
        config: StoreConfig,
    ) -> Self {
        Self {
            state: initial,
            transitions,
            effects,
            triggers,
            schedule: Schedule::new(),
            history: DispatchHistory::new(),
            config,
        }
    }

    /// Current state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Dispatch history; empty unless `record_history` is enabled. Holds
    /// at most `history_limit` of the most recent records.
    pub fn history(&self) -> &DispatchHistory<A::Kind> {
        &self.history
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Number of effect results waiting for a later turn.
    pub fn pending(&self) -> usize {
        self.schedule.len()
    }

    pub fn is_idle(&self) -> bool {
        self.schedule.is_empty()
    }

    /// Dispatch an action and its whole synchronous cascade.
    ///
    /// Returns once every trigger follow-up has been dispatched. Effect
    /// results are only queued; run them with [`Store::tick`] or
    /// [`Store::settle`].
    pub fn dispatch(&mut self, action: A) -> Result<(), DispatchError> {
        self.dispatch_from(action, Origin::External, 0)
    }

    /// Run one turn: dispatch one effect result as the root of a new
    /// cascade.
    ///
    /// Deferred effects scheduled since the last turn are started against
    /// `env` first. The oldest ready action is then dispatched without
    /// waiting; if there is none, the turn waits for whichever running
    /// effect resolves first. Returns `false` when nothing was scheduled.
    ///
    /// Cancel safe: dropping the returned future while it waits loses no
    /// scheduled work, and the store is free for [`Store::dispatch`] in
    /// the meantime.
    pub async fn tick(&mut self, env: &Env) -> Result<bool, DispatchError> {
        self.schedule.start(env);

        if let Some(action) = self.schedule.pop_ready() {
            self.dispatch_from(action, Origin::Effect, 0)?;
            return Ok(true);
        }

        match self.schedule.next_resolved().await {
            None => Ok(false),
            Some(resolved) => {
                if let Some(action) = resolved {
                    self.dispatch_from(action, Origin::Effect, 0)?;
                }
                Ok(true)
            }
        }
    }

    /// Tick until the schedule is empty, returning the number of turns.
    ///
    /// Effects that keep scheduling follow-ups forever (an animation
    /// loop, say) never settle; drive those with [`Store::tick`].
    pub async fn settle(&mut self, env: &Env) -> Result<usize, DispatchError> {
        let mut turns = 0;
        while self.tick(env).await? {
            turns += 1;
        }
        tracing::debug!(turns, "store settled");
        Ok(turns)
    }

    fn dispatch_from(&mut self, action: A, origin: Origin, depth: usize) -> Result<(), DispatchError> {
        if let Some(limit) = self.config.max_cascade_depth {
            if depth > limit {
                tracing::warn!(action = action.name(), limit, "cascade depth limit exceeded");
                return Err(DispatchError::CascadeDepthExceeded {
                    action: action.name().to_string(),
                    limit,
                });
            }
        }

        tracing::trace!(action = action.name(), ?origin, depth, "dispatch");

        let kind = action.kind();
        if self.transitions.handles(kind) {
            self.state = self.transitions.reduce(self.state.clone(), &action);
        }

        if self.config.record_history {
            let history = std::mem::take(&mut self.history).record(DispatchRecord {
                kind,
                name: action.name().to_string(),
                origin,
                depth,
                timestamp: Utc::now(),
            });
            self.history = match self.config.history_limit {
                Some(limit) => history.keep_last(limit),
                None => history,
            };
        }

        self.effects.apply(&self.state, &action, &mut self.schedule);

        for follow_up in self.triggers.fire(&self.state, &action) {
            self.dispatch_from(follow_up, Origin::Trigger, depth + 1)?;
        }
        Ok(())
    }
}
