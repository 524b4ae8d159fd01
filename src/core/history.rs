//! Dispatch history tracking.
//!
//! Records which actions reached the store, where they came from and how
//! deep in a cascade they were dispatched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where a dispatched action originated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    /// Passed to `Store::dispatch` by the caller.
    External,
    /// Returned by a trigger and dispatched within the same cascade.
    Trigger,
    /// Returned by an effect and dispatched on a later turn.
    Effect,
}

/// Record of a single dispatched action.
///
/// # Example
///
/// ```rust
/// use cascade_store::core::{DispatchRecord, Origin};
/// use chrono::Utc;
///
/// let record = DispatchRecord {
///     kind: "Increment",
///     name: "Increment".to_string(),
///     origin: Origin::External,
///     depth: 0,
///     timestamp: Utc::now(),
/// };
/// assert!(record.is_root());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DispatchRecord<K> {
    /// Routing kind of the action
    pub kind: K,
    /// Display name of the action
    pub name: String,
    /// Who produced the action
    pub origin: Origin,
    /// Trigger nesting level; 0 for cascade roots
    pub depth: usize,
    /// When the action was dispatched
    pub timestamp: DateTime<Utc>,
}

impl<K> DispatchRecord<K> {
    /// Whether this action started its own cascade.
    pub fn is_root(&self) -> bool {
        self.depth == 0
    }
}

/// Ordered history of dispatched actions.
///
/// `record` consumes the history and returns it extended, so a history
/// value is never changed behind a reader's back.
///
/// # Example
///
/// ```rust
/// use cascade_store::core::{DispatchHistory, DispatchRecord, Origin};
/// use chrono::Utc;
///
/// let history = DispatchHistory::new()
///     .record(DispatchRecord {
///         kind: 'a',
///         name: "A".to_string(),
///         origin: Origin::External,
///         depth: 0,
///         timestamp: Utc::now(),
///     })
///     .record(DispatchRecord {
///         kind: 'b',
///         name: "B".to_string(),
///         origin: Origin::Trigger,
///         depth: 1,
///         timestamp: Utc::now(),
///     });
///
/// assert_eq!(history.kinds(), vec![&'a', &'b']);
/// assert_eq!(history.by_origin(Origin::Trigger).count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DispatchHistory<K> {
    records: Vec<DispatchRecord<K>>,
}

impl<K> Default for DispatchHistory<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> DispatchHistory<K> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record, returning the extended history.
    pub fn record(mut self, record: DispatchRecord<K>) -> Self {
        self.records.push(record);
        self
    }

    /// Drop the oldest records until at most `limit` remain.
    pub fn keep_last(mut self, limit: usize) -> Self {
        let excess = self.records.len().saturating_sub(limit);
        self.records.drain(..excess);
        self
    }

    /// All records in dispatch order.
    pub fn records(&self) -> &[DispatchRecord<K>] {
        &self.records
    }

    /// Kinds in dispatch order.
    pub fn kinds(&self) -> Vec<&K> {
        self.records.iter().map(|r| &r.kind).collect()
    }

    /// Names in dispatch order.
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn by_origin(&self, origin: Origin) -> impl Iterator<Item = &DispatchRecord<K>> {
        self.records.iter().filter(move |r| r.origin == origin)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Deepest trigger nesting seen so far.
    pub fn max_depth(&self) -> usize {
        self.records.iter().map(|r| r.depth).max().unwrap_or(0)
    }

    /// Time between the first and last dispatch.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.records.first()?;
        let last = self.records.last()?;
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}
