//! The dispatching store and its configuration.

pub mod config;
pub mod error;
#[allow(clippy::module_inception)]
mod store;

pub use config::{StoreConfig, DEFAULT_MAX_CASCADE_DEPTH};
pub use error::{ConfigError, DispatchError};
pub use store::Store;
