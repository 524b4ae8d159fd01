//! Core Action trait for dispatched actions.
//!
//! An action is an immutable request to change state. Its kind is the
//! routing key into every registry; its payload travels inside the
//! variant and is opaque to the store.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for actions accepted by a store.
///
/// Actions are usually enums: each variant is one semantic event and
/// carries its own payload. `Kind` is a closed, fieldless mirror of the
/// variants, so registries are keyed by a value the compiler can match
/// exhaustively.
///
/// # Example
///
/// ```rust
/// use cascade_store::core::Action;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum CounterKind {
///     Increment,
///     Reset,
/// }
///
/// #[derive(Clone, Debug)]
/// enum CounterAction {
///     Increment(i64),
///     Reset,
/// }
///
/// impl Action for CounterAction {
///     type Kind = CounterKind;
///
///     fn kind(&self) -> CounterKind {
///         match self {
///             Self::Increment(_) => CounterKind::Increment,
///             Self::Reset => CounterKind::Reset,
///         }
///     }
///
///     fn name(&self) -> &str {
///         match self {
///             Self::Increment(_) => "Increment",
///             Self::Reset => "Reset",
///         }
///     }
/// }
///
/// assert_eq!(CounterAction::Increment(5).kind(), CounterKind::Increment);
/// assert_eq!(CounterAction::Reset.name(), "Reset");
/// ```
pub trait Action: Debug + Send + 'static {
    /// Routing key shared by all actions of the same variant.
    type Kind: Copy + Eq + Hash + Debug;

    /// The kind this action is routed by.
    fn kind(&self) -> Self::Kind;

    /// Stable display name, used for logging and history.
    fn name(&self) -> &str;
}
