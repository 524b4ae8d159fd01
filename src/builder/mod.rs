//! Builder API for ergonomic store construction.
//!
//! This module provides a fluent store builder and the `action_enum!`
//! macro for declaring actions with minimal boilerplate.

pub mod error;
pub mod macros;
pub mod store;

pub use error::BuildError;
pub use store::StoreBuilder;
