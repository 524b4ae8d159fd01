//! Effect handling: the imperative shell around the pure core.
//!
//! Effect handlers may touch the outside world and hand back follow-up
//! actions, either ready-made or as deferred stillwater effects. Every
//! result goes through the [`Schedule`] and is dispatched on a later turn,
//! never on the call stack that produced it.

mod engine;
mod reaction;
mod schedule;

pub use engine::{EffectFn, Effects};
pub use reaction::{DeferredAction, EffectError, Reaction};
pub use schedule::Schedule;
