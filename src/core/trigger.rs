//! Trigger engine: synchronous follow-up actions.
//!
//! Triggers inspect the state produced by a transition and synthesize
//! actions that the store dispatches immediately, depth-first, before
//! the triggering `dispatch` call returns.

use super::action::Action;
use super::registry::{Handlers, Registry};
use std::sync::Arc;

/// Zero or more follow-up actions returned by a trigger.
#[derive(Clone, Debug, PartialEq)]
pub enum Triggered<A> {
    None,
    One(A),
    Many(Vec<A>),
}

impl<A> Triggered<A> {
    /// Flatten into an ordered list of actions.
    pub fn into_actions(self) -> Vec<A> {
        match self {
            Triggered::None => Vec::new(),
            Triggered::One(action) => vec![action],
            Triggered::Many(actions) => actions,
        }
    }

    pub fn is_none(&self) -> bool {
        match self {
            Triggered::None => true,
            Triggered::One(_) => false,
            Triggered::Many(actions) => actions.is_empty(),
        }
    }
}

impl<A> Default for Triggered<A> {
    fn default() -> Self {
        Triggered::None
    }
}

impl<A> From<Option<A>> for Triggered<A> {
    fn from(action: Option<A>) -> Self {
        action.map_or(Triggered::None, Triggered::One)
    }
}

impl<A> From<Vec<A>> for Triggered<A> {
    fn from(actions: Vec<A>) -> Self {
        Triggered::Many(actions)
    }
}

/// Sparse lists drop their empty entries, keeping the order of the rest.
impl<A> From<Vec<Option<A>>> for Triggered<A> {
    fn from(actions: Vec<Option<A>>) -> Self {
        Triggered::Many(actions.into_iter().flatten().collect())
    }
}

impl<A> FromIterator<A> for Triggered<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Triggered::Many(iter.into_iter().collect())
    }
}

/// Inspects post-transition state and returns follow-up actions.
pub type TriggerFn<S, A> = Arc<dyn Fn(&S, &A) -> Triggered<A> + Send + Sync>;

/// Registry of triggers, keyed by action kind.
///
/// One trigger per kind is the common case. Several are tolerated: their
/// results are concatenated in declared order.
///
/// # Example
///
/// ```rust
/// use cascade_store::action_enum;
/// use cascade_store::core::{Triggered, Triggers};
///
/// action_enum! {
///     enum Game: GameKind {
///         PlayerDown,
///         Over,
///         Restart,
///     }
/// }
///
/// let triggers = Triggers::new().on(GameKind::PlayerDown, |lives: &u32, _: &Game| {
///     if *lives == 0 {
///         Triggered::Many(vec![Game::Over, Game::Restart])
///     } else {
///         Triggered::None
///     }
/// });
///
/// assert_eq!(triggers.fire(&0, &Game::PlayerDown).len(), 2);
/// assert!(triggers.fire(&2, &Game::PlayerDown).is_empty());
/// ```
pub struct Triggers<S, A: Action> {
    registry: Registry<A::Kind, TriggerFn<S, A>>,
}

impl<S, A: Action> Triggers<S, A> {
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    pub fn from_registry(registry: Registry<A::Kind, TriggerFn<S, A>>) -> Self {
        Self { registry }
    }

    /// Build from a kind-to-handlers table.
    pub fn build<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (A::Kind, Handlers<TriggerFn<S, A>>)>,
    {
        Self::from_registry(Registry::build(entries))
    }

    /// Register a trigger for `kind`.
    ///
    /// The handler may return anything convertible into [`Triggered`]:
    /// an `Option`, a `Vec`, or a sparse `Vec<Option<_>>`.
    pub fn on<F, R>(mut self, kind: A::Kind, handler: F) -> Self
    where
        F: Fn(&S, &A) -> R + Send + Sync + 'static,
        R: Into<Triggered<A>>,
    {
        let trigger: TriggerFn<S, A> =
            Arc::new(move |state: &S, action: &A| -> Triggered<A> { handler(state, action).into() });
        self.registry.push(kind, trigger);
        self
    }

    pub fn handles(&self, kind: A::Kind) -> bool {
        self.registry.handles(&kind)
    }

    pub fn registry(&self) -> &Registry<A::Kind, TriggerFn<S, A>> {
        &self.registry
    }

    /// Run the triggers for `action` and collect their follow-ups in order.
    pub fn fire(&self, state: &S, action: &A) -> Vec<A> {
        self.registry
            .get(&action.kind())
            .iter()
            .flat_map(|trigger| trigger(state, action).into_actions())
            .collect()
    }
}

impl<S, A: Action> Default for Triggers<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A: Action> Clone for Triggers<S, A> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum Kind {
        Hit,
        Score,
        Win,
        Idle,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum Event {
        Hit(u32),
        Score,
        Win,
        Idle,
    }

    impl Action for Event {
        type Kind = Kind;

        fn kind(&self) -> Kind {
            match self {
                Self::Hit(_) => Kind::Hit,
                Self::Score => Kind::Score,
                Self::Win => Kind::Win,
                Self::Idle => Kind::Idle,
            }
        }

        fn name(&self) -> &str {
            match self {
                Self::Hit(_) => "Hit",
                Self::Score => "Score",
                Self::Win => "Win",
                Self::Idle => "Idle",
            }
        }
    }

    #[test]
    fn option_results_normalize() {
        assert_eq!(Triggered::<Event>::from(Some(Event::Win)).into_actions(), vec![Event::Win]);
        assert!(Triggered::<Event>::from(None).into_actions().is_empty());
        assert!(Triggered::<Event>::default().is_none());
    }

    #[test]
    fn sparse_lists_drop_empty_entries() {
        let triggered = Triggered::<Event>::from(vec![None, Some(Event::Score), None, Some(Event::Win)]);
        assert_eq!(triggered.into_actions(), vec![Event::Score, Event::Win]);
    }

    #[test]
    fn empty_list_counts_as_none() {
        assert!(Triggered::<Event>::Many(Vec::new()).is_none());
        assert!(!Triggered::One(Event::Idle).is_none());
    }

    #[test]
    fn fire_returns_actions_in_order() {
        let triggers = Triggers::new().on(Kind::Hit, |bricks: &u32, action: &Event| {
            let mut follow = vec![Some(Event::Score)];
            if *bricks == 0 {
                follow.push(Some(Event::Win));
            }
            if let Event::Hit(0) = action {
                follow.push(None);
            }
            follow
        });

        assert_eq!(triggers.fire(&3, &Event::Hit(1)), vec![Event::Score]);
        assert_eq!(
            triggers.fire(&0, &Event::Hit(0)),
            vec![Event::Score, Event::Win]
        );
    }

    #[test]
    fn unregistered_kind_fires_nothing() {
        let triggers = Triggers::new().on(Kind::Hit, |_: &u32, _: &Event| Some(Event::Score));
        assert!(triggers.fire(&0, &Event::Idle).is_empty());
        assert!(!triggers.handles(Kind::Idle));
    }

    #[test]
    fn several_triggers_concatenate() {
        let triggers = Triggers::new()
            .on(Kind::Score, |_: &u32, _: &Event| Some(Event::Hit(1)))
            .on(Kind::Score, |_: &u32, _: &Event| vec![Event::Win, Event::Idle]);

        assert_eq!(
            triggers.fire(&0, &Event::Score),
            vec![Event::Hit(1), Event::Win, Event::Idle]
        );
    }

    #[test]
    fn builds_from_handler_table() {
        let win: TriggerFn<u32, Event> =
            Arc::new(|score: &u32, _: &Event| Triggered::from((*score > 9).then_some(Event::Win)));
        let triggers = Triggers::build(vec![(Kind::Score, Handlers::One(win))]);

        assert_eq!(triggers.fire(&10, &Event::Score), vec![Event::Win]);
        assert!(triggers.fire(&1, &Event::Score).is_empty());
    }

    #[test]
    fn state_may_borrow_local_data() {
        let players = vec!["left".to_string(), "right".to_string()];
        let scoreboard: Vec<&str> = players.iter().map(String::as_str).collect();

        let triggers = Triggers::new().on(Kind::Score, |board: &Vec<&str>, _: &Event| {
            (board.len() > 1).then_some(Event::Win)
        });

        assert_eq!(triggers.fire(&scoreboard, &Event::Score), vec![Event::Win]);
    }
}
