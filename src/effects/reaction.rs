//! Effect handler results.

use stillwater::effect::BoxedEffect;

/// Errors raised by deferred effect work.
#[derive(Debug, thiserror::Error)]
pub enum EffectError {
    #[error("Effect failed: {0}")]
    Failed(String),
}

/// Deferred work yielding at most one follow-up action.
pub type DeferredAction<A, Env> = BoxedEffect<Option<A>, EffectError, Env>;

/// What an effect handler hands back to the store.
///
/// Whatever the variant, the store never dispatches it inline: ready
/// actions and deferred work alike wait for a later turn.
pub enum Reaction<A, Env>
where
    A: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    /// Nothing to dispatch.
    None,

    /// Dispatch this action on a later turn.
    Dispatch(A),

    /// Run this effect on a later turn and dispatch what it yields.
    Deferred(DeferredAction<A, Env>),
}

impl<A, Env> Reaction<A, Env>
where
    A: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    pub fn is_none(&self) -> bool {
        matches!(self, Reaction::None)
    }
}

impl<A, Env> Default for Reaction<A, Env>
where
    A: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Reaction::None
    }
}

impl<A, Env> From<Option<A>> for Reaction<A, Env>
where
    A: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    fn from(action: Option<A>) -> Self {
        action.map_or(Reaction::None, Reaction::Dispatch)
    }
}

impl<A, Env> From<()> for Reaction<A, Env>
where
    A: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    fn from(_: ()) -> Self {
        Reaction::None
    }
}
