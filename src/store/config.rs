//! Store configuration.

use crate::store::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default bound on trigger nesting.
pub const DEFAULT_MAX_CASCADE_DEPTH: usize = 1024;

/// Default number of history records kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 10_000;

/// Tunables for a [`Store`](crate::store::Store).
///
/// # Example
///
/// ```rust
/// use cascade_store::store::StoreConfig;
///
/// let config = StoreConfig::from_json(r#"{ "max_cascade_depth": 16, "record_history": true }"#)
///     .unwrap();
/// assert_eq!(config.max_cascade_depth, Some(16));
/// assert!(config.record_history);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Deepest allowed trigger nesting. `None` lets cascades recurse
    /// without limit.
    pub max_cascade_depth: Option<usize>,

    /// Keep a [`DispatchHistory`](crate::core::DispatchHistory) of every
    /// dispatched action.
    pub record_history: bool,

    /// Most history records kept; older ones are dropped first. `None`
    /// keeps every record, which grows without bound under an endless
    /// effect loop.
    pub history_limit: Option<usize>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_cascade_depth: Some(DEFAULT_MAX_CASCADE_DEPTH),
            record_history: false,
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
        }
    }
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_cascade_depth(mut self, limit: usize) -> Self {
        self.max_cascade_depth = Some(limit);
        self
    }

    pub fn unbounded(mut self) -> Self {
        self.max_cascade_depth = None;
        self
    }

    pub fn record_history(mut self, enabled: bool) -> Self {
        self.record_history = enabled;
        self
    }

    pub fn history_limit(mut self, limit: Option<usize>) -> Self {
        self.history_limit = limit;
        self
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}
