//! Effect engine: side-effecting handlers.

use crate::core::{Action, Handlers, Registry};
use crate::effects::reaction::Reaction;
use crate::effects::schedule::Schedule;
use std::sync::Arc;

/// Side-effecting handler run after a transition.
pub type EffectFn<S, A, Env> = Arc<dyn Fn(&S, &A) -> Reaction<A, Env> + Send + Sync>;

/// Registry of effects, keyed by action kind.
///
/// Every handler registered for a kind runs, in declared order, against
/// the freshly reduced state. Their results are queued on the schedule
/// and never dispatched inline.
///
/// # Example
///
/// ```rust
/// use cascade_store::action_enum;
/// use cascade_store::effects::{Effects, Schedule};
///
/// action_enum! {
///     enum Frame: FrameKind {
///         Request,
///         Tick(u64),
///     }
/// }
///
/// let effects: Effects<u64, Frame> =
///     Effects::new().on(FrameKind::Request, |now: &u64, _: &Frame| Some(Frame::Tick(*now)));
///
/// let mut schedule = Schedule::new();
/// effects.apply(&7, &Frame::Request, &mut schedule);
/// effects.apply(&7, &Frame::Tick(7), &mut schedule);
/// assert_eq!(schedule.len(), 1);
/// ```
pub struct Effects<S, A, Env = ()>
where
    A: Action,
    Env: Clone + Send + Sync + 'static,
{
    registry: Registry<A::Kind, EffectFn<S, A, Env>>,
}

impl<S, A, Env> Effects<S, A, Env>
where
    A: Action,
    Env: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    pub fn from_registry(registry: Registry<A::Kind, EffectFn<S, A, Env>>) -> Self {
        Self { registry }
    }

    /// Build from a kind-to-handlers table.
    pub fn build<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (A::Kind, Handlers<EffectFn<S, A, Env>>)>,
    {
        Self::from_registry(Registry::build(entries))
    }

    /// Register an effect for `kind`.
    ///
    /// The handler may return `()`, an `Option` of an action, or a full
    /// [`Reaction`] when it needs deferred work.
    pub fn on<F, R>(mut self, kind: A::Kind, handler: F) -> Self
    where
        F: Fn(&S, &A) -> R + Send + Sync + 'static,
        R: Into<Reaction<A, Env>>,
    {
        let effect: EffectFn<S, A, Env> =
            Arc::new(move |state: &S, action: &A| -> Reaction<A, Env> { handler(state, action).into() });
        self.registry.push(kind, effect);
        self
    }

    pub fn handles(&self, kind: A::Kind) -> bool {
        self.registry.handles(&kind)
    }

    pub fn registry(&self) -> &Registry<A::Kind, EffectFn<S, A, Env>> {
        &self.registry
    }

    /// Append another table's handlers after this one's, kind by kind.
    pub fn merge(self, other: Self) -> Self {
        Self {
            registry: self.registry.merge(other.registry),
        }
    }

    /// Combine several tables into one.
    ///
    /// For every kind, handlers run table by table in iteration order.
    /// Optional tables can be filtered out before calling, e.g. with
    /// `[Some(a), None].into_iter().flatten()`.
    pub fn concat<I>(tables: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        tables.into_iter().fold(Self::new(), Self::merge)
    }

    /// Run every effect for `action` and queue their results.
    pub fn apply(&self, state: &S, action: &A, schedule: &mut Schedule<A, Env>) {
        for effect in self.registry.get(&action.kind()) {
            schedule.push(effect(state, action));
        }
    }
}

impl<S, A, Env> Default for Effects<S, A, Env>
where
    A: Action,
    Env: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A, Env> Clone for Effects<S, A, Env>
where
    A: Action,
    Env: Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use stillwater::prelude::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum Kind {
        Repaint,
        Request,
        Frame,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum Msg {
        Repaint,
        Request,
        Frame(u32),
    }

    impl Action for Msg {
        type Kind = Kind;

        fn kind(&self) -> Kind {
            match self {
                Self::Repaint => Kind::Repaint,
                Self::Request => Kind::Request,
                Self::Frame(_) => Kind::Frame,
            }
        }

        fn name(&self) -> &str {
            match self {
                Self::Repaint => "Repaint",
                Self::Request => "Request",
                Self::Frame(_) => "Frame",
            }
        }
    }

    async fn drain(schedule: &mut Schedule<Msg, ()>) -> Vec<Msg> {
        schedule.start(&());
        let mut out: Vec<Msg> = std::iter::from_fn(|| schedule.pop_ready()).collect();
        while let Some(resolved) = schedule.next_resolved().await {
            out.extend(resolved);
        }
        out
    }

    #[test]
    fn handlers_run_in_declared_order() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let first = calls.clone();
        let second = calls.clone();

        let effects: Effects<u32, Msg> = Effects::new()
            .on(Kind::Repaint, move |_: &u32, _: &Msg| first.lock().unwrap().push("first"))
            .on(Kind::Repaint, move |_: &u32, _: &Msg| second.lock().unwrap().push("second"));

        let mut schedule = Schedule::new();
        effects.apply(&0, &Msg::Repaint, &mut schedule);

        assert_eq!(*calls.lock().unwrap(), vec!["first", "second"]);
        assert!(schedule.is_empty());
    }

    #[test]
    fn handlers_see_the_state_snapshot() {
        let seen = Arc::new(Mutex::new(None));
        let sink = seen.clone();
        let effects: Effects<u32, Msg> = Effects::new().on(Kind::Repaint, move |s: &u32, _: &Msg| {
            *sink.lock().unwrap() = Some(*s);
        });

        effects.apply(&17, &Msg::Repaint, &mut Schedule::new());
        assert_eq!(*seen.lock().unwrap(), Some(17));
    }

    #[tokio::test]
    async fn results_are_queued_not_dispatched() {
        let effects: Effects<u32, Msg> = Effects::new()
            .on(Kind::Request, |now: &u32, _: &Msg| Some(Msg::Frame(*now)))
            .on(Kind::Request, |_: &u32, _: &Msg| None::<Msg>)
            .on(Kind::Request, |now: &u32, _: &Msg| {
                let later = *now + 16;
                Reaction::<Msg, ()>::Deferred(pure(Some(Msg::Frame(later))).boxed())
            });

        let mut schedule = Schedule::new();
        effects.apply(&100, &Msg::Request, &mut schedule);
        assert_eq!(schedule.len(), 2);

        assert_eq!(drain(&mut schedule).await, vec![Msg::Frame(100), Msg::Frame(116)]);
    }

    #[test]
    fn unregistered_kind_queues_nothing() {
        let effects: Effects<u32, Msg> =
            Effects::new().on(Kind::Request, |_: &u32, _: &Msg| Some(Msg::Repaint));
        let mut schedule = Schedule::new();
        effects.apply(&0, &Msg::Frame(1), &mut schedule);
        assert!(schedule.is_empty());
        assert!(!effects.handles(Kind::Frame));
    }

    #[tokio::test]
    async fn concat_runs_tables_in_order() {
        let render: Effects<u32, Msg> =
            Effects::new().on(Kind::Frame, |_: &u32, _: &Msg| Some(Msg::Repaint));
        let clock: Effects<u32, Msg> =
            Effects::new().on(Kind::Frame, |_: &u32, _: &Msg| Some(Msg::Request));
        let debug: Option<Effects<u32, Msg>> = None;

        let effects = Effects::concat([Some(render), debug, Some(clock)].into_iter().flatten());

        let mut schedule = Schedule::new();
        effects.apply(&0, &Msg::Frame(1), &mut schedule);
        assert_eq!(drain(&mut schedule).await, vec![Msg::Repaint, Msg::Request]);
    }

    #[test]
    fn builds_from_handler_table() {
        let repaint: EffectFn<u32, Msg, ()> =
            Arc::new(|_: &u32, _: &Msg| Reaction::Dispatch(Msg::Repaint));
        let effects = Effects::build(vec![(Kind::Frame, Handlers::Many(vec![repaint.clone(), repaint]))]);

        let mut schedule = Schedule::new();
        effects.apply(&0, &Msg::Frame(2), &mut schedule);
        assert_eq!(schedule.len(), 2);
    }
}
