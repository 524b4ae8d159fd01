//! Dispatch and configuration errors.

use thiserror::Error;

/// Errors that abort a dispatch cascade.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// A chain of trigger follow-ups nested deeper than the configured limit.
    #[error("Cascade depth limit {limit} exceeded while dispatching '{action}'")]
    CascadeDepthExceeded { action: String, limit: usize },
}

/// Errors raised while loading a store configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid store configuration: {0}")]
    Invalid(String),
}
