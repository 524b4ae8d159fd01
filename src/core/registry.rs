//! Per-kind handler tables.
//!
//! A registry indexes handlers by action kind. Building one never runs a
//! handler, and looking up a kind with nothing registered yields an empty
//! slice rather than an error.

use std::collections::HashMap;
use std::hash::Hash;

/// A single handler or an ordered list of handlers for one kind.
#[derive(Clone, Debug, PartialEq)]
pub enum Handlers<H> {
    One(H),
    Many(Vec<H>),
}

impl<H> Handlers<H> {
    /// Normalize into an ordered list.
    pub fn into_vec(self) -> Vec<H> {
        match self {
            Handlers::One(handler) => vec![handler],
            Handlers::Many(handlers) => handlers,
        }
    }
}

impl<H> From<Vec<H>> for Handlers<H> {
    fn from(handlers: Vec<H>) -> Self {
        Handlers::Many(handlers)
    }
}

/// Mapping from action kind to an ordered sequence of handlers.
///
/// # Example
///
/// ```rust
/// use cascade_store::core::{Handlers, Registry};
///
/// let registry = Registry::build(vec![
///     ("add", Handlers::One(1)),
///     ("sub", Handlers::Many(vec![2, 3])),
/// ]);
///
/// assert_eq!(registry.get(&"add"), &[1]);
/// assert_eq!(registry.get(&"sub"), &[2, 3]);
/// assert!(registry.get(&"mul").is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Registry<K, H> {
    table: HashMap<K, Vec<H>>,
}

impl<K, H> Default for Registry<K, H> {
    fn default() -> Self {
        Self {
            table: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, H> Registry<K, H> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a handler table.
    ///
    /// Entries repeating a kind append to that kind's list, so the
    /// declaration order of the table is preserved.
    pub fn build<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Handlers<H>)>,
    {
        let mut registry = Self::new();
        for (kind, handlers) in entries {
            registry.extend(kind, handlers.into_vec());
        }
        registry
    }

    /// Handlers registered for `kind`, in declared order.
    pub fn get(&self, kind: &K) -> &[H] {
        self.table.get(kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Append one handler to `kind`.
    pub fn push(&mut self, kind: K, handler: H) {
        self.table.entry(kind).or_default().push(handler);
    }

    /// Append several handlers to `kind`, keeping their order.
    pub fn extend<I>(&mut self, kind: K, handlers: I)
    where
        I: IntoIterator<Item = H>,
    {
        self.table.entry(kind).or_default().extend(handlers);
    }

    /// Whether at least one handler is registered for `kind`.
    pub fn handles(&self, kind: &K) -> bool {
        !self.get(kind).is_empty()
    }

    /// Number of kinds with at least one entry.
    pub fn len(&self) -> usize {
        self.table.values().filter(|h| !h.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Kinds with at least one handler, in no particular order.
    pub fn kinds(&self) -> impl Iterator<Item = &K> {
        self.table
            .iter()
            .filter(|(_, handlers)| !handlers.is_empty())
            .map(|(kind, _)| kind)
    }

    /// Append every list of `other` after this registry's lists.
    pub fn merge(mut self, other: Self) -> Self {
        for (kind, handlers) in other.table {
            self.extend(kind, handlers);
        }
        self
    }
}
