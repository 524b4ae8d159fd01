//! Builder for constructing stores.

use crate::builder::error::BuildError;
use crate::core::{Action, Transitions, Triggers};
use crate::effects::Effects;
use crate::store::{Store, StoreConfig};

/// Builder for constructing stores with a fluent API.
///
/// Every registry is optional and defaults to empty; only the initial
/// state is required.
pub struct StoreBuilder<S, A, Env = ()>
where
    S: Clone,
    A: Action,
    Env: Clone + Send + Sync + 'static,
{
    initial: Option<S>,
    transitions: Transitions<S, A>,
    effects: Effects<S, A, Env>,
    triggers: Triggers<S, A>,
    config: StoreConfig,
}

impl<S, A, Env> StoreBuilder<S, A, Env>
where
    S: Clone,
    A: Action,
    Env: Clone + Send + Sync + 'static,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Transitions::new(),
            effects: Effects::new(),
            triggers: Triggers::new(),
            config: StoreConfig::default(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    pub fn transitions(mut self, transitions: Transitions<S, A>) -> Self {
        self.transitions = transitions;
        self
    }

    /// Set the effects. Calling this again appends to the earlier table.
    pub fn effects(mut self, effects: Effects<S, A, Env>) -> Self {
        self.effects = self.effects.merge(effects);
        self
    }

    pub fn triggers(mut self, triggers: Triggers<S, A>) -> Self {
        self.triggers = triggers;
        self
    }

    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the store.
    /// Returns an error if the initial state is missing.
    pub fn build(self) -> Result<Store<S, A, Env>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        Ok(Store::with_config(
            initial,
            self.transitions,
            self.effects,
            self.triggers,
            self.config,
        ))
    }
}

impl<S, A, Env> Default for StoreBuilder<S, A, Env>
where
    S: Clone,
    A: Action,
    Env: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::action_enum! {
        enum Light: LightKind {
            Next,
            Log(&'static str),
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    enum Signal {
        Red,
        Green,
    }

    #[test]
    fn builder_validates_initial_state() {
        let result: Result<Store<Signal, Light>, _> = StoreBuilder::new().build();
        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn fluent_api_builds_store() {
        let transitions = Transitions::new().on(LightKind::Next, |s: Signal, _: &Light| match s {
            Signal::Red => Signal::Green,
            Signal::Green => Signal::Red,
        });

        let mut store: Store<Signal, Light> = StoreBuilder::new()
            .initial(Signal::Red)
            .transitions(transitions)
            .config(StoreConfig::new().record_history(true))
            .build()
            .unwrap();

        assert_eq!(store.state(), &Signal::Red);
        store.dispatch(Light::Next).unwrap();
        assert_eq!(store.state(), &Signal::Green);
        assert_eq!(store.history().len(), 1);
    }

    #[test]
    fn effect_tables_accumulate() {
        let first: Effects<Signal, Light> =
            Effects::new().on(LightKind::Next, |_: &Signal, _: &Light| Some(Light::Log("first")));
        let second: Effects<Signal, Light> =
            Effects::new().on(LightKind::Next, |_: &Signal, _: &Light| Some(Light::Log("second")));

        let mut store = StoreBuilder::new()
            .initial(Signal::Green)
            .effects(first)
            .effects(second)
            .build()
            .unwrap();

        store.dispatch(Light::Next).unwrap();
        assert_eq!(store.pending(), 2);
    }
}
