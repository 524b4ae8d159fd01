//! Cascade Store: a unidirectional action-dispatch engine
//!
//! A store owns one state value and one dispatch pipeline. Every action
//! flows through three per-kind registries:
//!
//! - **Transitions** fold the action into a new state (pure)
//! - **Effects** run side effects and may hand back follow-up actions,
//!   which are queued and dispatched on a later turn
//! - **Triggers** inspect the new state and return follow-up actions that
//!   are dispatched immediately, depth-first, within the same cascade
//!
//! # Example
//!
//! ```rust
//! use cascade_store::action_enum;
//! use cascade_store::core::{Transitions, Triggers};
//! use cascade_store::effects::Effects;
//! use cascade_store::StoreBuilder;
//!
//! action_enum! {
//!     enum Game: GameKind {
//!         BrickHit(u32),
//!         Win,
//!         Repaint,
//!     }
//! }
//!
//! #[derive(Clone, Debug, Default)]
//! struct Board {
//!     bricks: u32,
//!     won: bool,
//! }
//!
//! let transitions = Transitions::new()
//!     .on(GameKind::BrickHit, |mut b: Board, _: &Game| {
//!         b.bricks -= 1;
//!         b
//!     })
//!     .on(GameKind::Win, |mut b: Board, _: &Game| {
//!         b.won = true;
//!         b
//!     });
//! let triggers = Triggers::new()
//!     .on(GameKind::BrickHit, |b: &Board, _: &Game| (b.bricks == 0).then_some(Game::Win));
//! let effects: Effects<Board, Game> =
//!     Effects::new().on(GameKind::Win, |_: &Board, _: &Game| Some(Game::Repaint));
//!
//! let mut store = StoreBuilder::new()
//!     .initial(Board { bricks: 1, won: false })
//!     .transitions(transitions)
//!     .effects(effects)
//!     .triggers(triggers)
//!     .build()
//!     .unwrap();
//!
//! store.dispatch(Game::BrickHit(0)).unwrap();
//! assert!(store.state().won);
//! assert_eq!(store.pending(), 1);
//! ```

extern crate self as cascade_store;

pub mod builder;
pub mod core;
pub mod effects;
pub mod store;

// Re-export commonly used types
pub use builder::{BuildError, StoreBuilder};
pub use core::{Action, Transitions, Triggered, Triggers};
pub use effects::{EffectError, Effects, Reaction};
pub use store::{DispatchError, Store, StoreConfig};

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
