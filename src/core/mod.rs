//! Core dispatch types and pure engines.
//!
//! This module contains the pure half of the store:
//! - Actions and their routing kinds via the `Action` trait
//! - Per-kind handler registries
//! - The transition and trigger engines
//! - Dispatch history tracking
//!
//! Nothing in this module performs I/O or schedules work; effects live
//! in [`crate::effects`].

mod action;
mod history;
mod registry;
mod transition;
mod trigger;

pub use action::Action;
pub use history::{DispatchHistory, DispatchRecord, Origin};
pub use registry::{Handlers, Registry};
pub use transition::{TransitionFn, Transitions};
pub use trigger::{TriggerFn, Triggered, Triggers};
