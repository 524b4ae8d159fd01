//! Transition engine: pure state folding.

use super::action::Action;
use super::registry::{Handlers, Registry};
use std::sync::Arc;

/// Pure function producing the next state for one action.
pub type TransitionFn<S, A> = Arc<dyn Fn(S, &A) -> S + Send + Sync>;

/// Registry of state transitions, keyed by action kind.
///
/// Handlers for a kind are applied left to right, each receiving the
/// output of the previous one and the same action.
///
/// # Example
///
/// ```rust
/// use cascade_store::action_enum;
/// use cascade_store::core::Transitions;
///
/// action_enum! {
///     enum CounterAction: CounterKind {
///         Add(i64),
///         Double,
///     }
/// }
///
/// let transitions = Transitions::new()
///     .on(CounterKind::Add, |n: i64, action: &CounterAction| match action {
///         CounterAction::Add(k) => n + k,
///         _ => n,
///     })
///     .on(CounterKind::Add, |n: i64, _: &CounterAction| n * 10);
///
/// assert_eq!(transitions.reduce(1, &CounterAction::Add(2)), 30);
/// assert_eq!(transitions.reduce(1, &CounterAction::Double), 1);
/// ```
pub struct Transitions<S, A: Action> {
    registry: Registry<A::Kind, TransitionFn<S, A>>,
}

impl<S, A: Action> Transitions<S, A> {
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    /// Wrap a prebuilt registry.
    pub fn from_registry(registry: Registry<A::Kind, TransitionFn<S, A>>) -> Self {
        Self { registry }
    }

    /// Build from a kind-to-handlers table.
    pub fn build<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (A::Kind, Handlers<TransitionFn<S, A>>)>,
    {
        Self::from_registry(Registry::build(entries))
    }

    /// Append a transition for `kind`.
    pub fn on<F>(mut self, kind: A::Kind, handler: F) -> Self
    where
        F: Fn(S, &A) -> S + Send + Sync + 'static,
    {
        self.registry.push(kind, Arc::new(handler));
        self
    }

    pub fn handles(&self, kind: A::Kind) -> bool {
        self.registry.handles(&kind)
    }

    pub fn registry(&self) -> &Registry<A::Kind, TransitionFn<S, A>> {
        &self.registry
    }

    /// Fold `action` into `state`.
    ///
    /// Unregistered kinds return `state` untouched.
    pub fn reduce(&self, state: S, action: &A) -> S {
        self.registry
            .get(&action.kind())
            .iter()
            .fold(state, |acc, transition| transition(acc, action))
    }
}

impl<S, A: Action> Default for Transitions<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A: Action> Clone for Transitions<S, A> {
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
        Push,
        Clear,
        Noop,
    }

    #[derive(Debug)]
    enum Op {
        Push(&'static str),
        Clear,
        Noop,
    }

    impl Action for Op {
        type Kind = Kind;

        fn kind(&self) -> Kind {
            match self {
                Self::Push(_) => Kind::Push,
                Self::Clear => Kind::Clear,
                Self::Noop => Kind::Noop,
            }
        }

        fn name(&self) -> &str {
            match self {
                Self::Push(_) => "Push",
                Self::Clear => "Clear",
                Self::Noop => "Noop",
            }
        }
    }

    fn push(mut log: Vec<String>, op: &Op) -> Vec<String> {
        if let Op::Push(item) = op {
            log.push(item.to_string());
        }
        log
    }

    #[test]
    fn folds_in_declared_order() {
        let transitions = Transitions::new()
            .on(Kind::Push, push)
            .on(Kind::Push, |mut log: Vec<String>, _: &Op| {
                log.push("after".to_string());
                log
            });

        let state = transitions.reduce(vec![], &Op::Push("first"));
        assert_eq!(state, vec!["first", "after"]);
    }

    #[test]
    fn fold_matches_nested_application() {
        let h1 = |n: i32, _: &Op| n + 3;
        let h2 = |n: i32, _: &Op| n * 2;
        let transitions = Transitions::new().on(Kind::Clear, h1).on(Kind::Clear, h2);

        let action = Op::Clear;
        assert_eq!(transitions.reduce(4, &action), h2(h1(4, &action), &action));
    }

    #[test]
    fn unregistered_kind_is_noop() {
        let transitions = Transitions::new().on(Kind::Push, push);
        let state = vec!["kept".to_string()];
        let reduced = transitions.reduce(state.clone(), &Op::Noop);
        assert_eq!(reduced, state);
        assert!(!transitions.handles(Kind::Noop));
        assert!(transitions.handles(Kind::Push));
    }

    #[test]
    fn builds_from_handler_table() {
        let clear: TransitionFn<Vec<String>, Op> = Arc::new(|_: Vec<String>, _: &Op| Vec::new());
        let entries = vec![
            (Kind::Push, Handlers::One(Arc::new(push) as TransitionFn<Vec<String>, Op>)),
            (Kind::Clear, Handlers::One(clear)),
        ];
        let transitions = Transitions::build(entries);

        let state = transitions.reduce(Vec::new(), &Op::Push("a"));
        let state = transitions.reduce(state, &Op::Push("b"));
        assert_eq!(state, vec!["a", "b"]);
        assert!(transitions.reduce(state, &Op::Clear).is_empty());
    }
}
