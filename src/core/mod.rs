//! Shared building blocks: error types and builder configuration.

pub mod config;
pub mod error;

pub use config::{BuilderConfig, ConfigError};
pub use error::{ConflictKind, Result, ScaffoldError, ValidationError};
