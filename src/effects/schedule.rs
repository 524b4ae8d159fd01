//! Effect results waiting for a later turn.
//!
//! Ready actions queue up in the order their handlers returned them.
//! Deferred effects wait until the next turn supplies an environment, then
//! run concurrently; whichever resolves first is handed back first.

use crate::effects::reaction::{DeferredAction, EffectError, Reaction};
use futures::future::BoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};
use std::collections::VecDeque;
use stillwater::effect::Effect;

type Running<A> = BoxFuture<'static, Result<Option<A>, EffectError>>;

/// Queue of effect results, drained by the store one turn at a time.
///
/// Taking work out of the schedule never loses it: ready actions leave
/// only through [`Schedule::pop_ready`], and a running effect leaves only
/// when [`Schedule::next_resolved`] yields its result. Dropping a pending
/// `next_resolved` future leaves every running effect in place.
pub struct Schedule<A, Env>
where
    A: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    ready: VecDeque<A>,
    waiting: VecDeque<DeferredAction<A, Env>>,
    running: FuturesUnordered<Running<A>>,
}

impl<A, Env> Default for Schedule<A, Env>
where
    A: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<A, Env> Schedule<A, Env>
where
    A: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            ready: VecDeque::new(),
            waiting: VecDeque::new(),
            running: FuturesUnordered::new(),
        }
    }

    /// Queue an effect result. `Reaction::None` is dropped.
    pub fn push(&mut self, reaction: Reaction<A, Env>) {
        match reaction {
            Reaction::None => {}
            Reaction::Dispatch(action) => self.ready.push_back(action),
            Reaction::Deferred(effect) => {
                self.waiting.push_back(effect);
                tracing::debug!(waiting = self.waiting.len(), "scheduled deferred effect");
            }
        }
    }

    /// Start every waiting deferred effect against its own copy of `env`.
    pub fn start(&mut self, env: &Env) {
        while let Some(effect) = self.waiting.pop_front() {
            let env = env.clone();
            self.running.push(Box::pin(async move { effect.run(&env).await }));
        }
    }

    /// Take the oldest ready action.
    pub fn pop_ready(&mut self) -> Option<A> {
        self.ready.pop_front()
    }

    /// Wait for the next running effect to resolve.
    ///
    /// Returns `None` when nothing is running, otherwise the resolved
    /// result. A failing effect is logged and resolves to `Some(None)`; it
    /// is neither retried nor reported to the dispatching caller.
    pub async fn next_resolved(&mut self) -> Option<Option<A>> {
        let result = self.running.next().await?;
        Some(match result {
            Ok(action) => action,
            Err(error) => {
                tracing::warn!(%error, "deferred effect failed, dropping its result");
                None
            }
        })
    }

    /// Ready actions not yet dispatched.
    pub fn ready(&self) -> usize {
        self.ready.len()
    }

    /// Deferred effects started but not yet resolved.
    pub fn running(&self) -> usize {
        self.running.len()
    }

    pub fn len(&self) -> usize {
        self.ready.len() + self.waiting.len() + self.running.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
