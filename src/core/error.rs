//! Error handling for the MCP server builder.
//!
//! This module defines the main error type [`ScaffoldError`] returned by
//! every fallible operation of the library, along with a convenient
//! [`Result`] alias. It uses `thiserror` so that each variant renders a
//! human-readable message that callers can show without inspecting the
//! underlying fault.
//!
//! # Examples
//!
//! ```
//! use mcp_server_builder::core::error::{Result, ScaffoldError, ValidationError};
//!
//! fn might_fail(name: &str) -> Result<()> {
//!     if name.is_empty() {
//!         return Err(ValidationError::EmptyProjectName.into());
//!     }
//!     Ok(())
//! }
//!
//! assert!(might_fail("").unwrap_err().is_validation_error());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type for scaffolding operations
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Main error type for scaffolding operations
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The request or project name was rejected before any side effect
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The target already holds something we must not overwrite
    #[error("{0}")]
    Conflict(#[from] ConflictKind),

    /// An I/O failure while materializing the bundle. Files written before
    /// the failure are left on disk.
    #[error("Failed to write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A built-in template failed to compile or render
    #[error("Template error: {0}")]
    Template(String),
}

/// Validation errors for incoming requests
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Project name is required and must be a string")]
    MissingProjectName,

    #[error("Project name cannot be empty")]
    EmptyProjectName,

    #[error(
        "Invalid project name '{0}'. Please use alphanumeric characters and hyphens."
    )]
    InvalidProjectName(String),

    #[error("Invalid arguments: {0}")]
    MalformedArguments(String),
}

/// Why the target location cannot receive a new project
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConflictKind {
    #[error("Directory '{}' already exists", path.display())]
    AlreadyExists { path: PathBuf },

    #[error(
        "Directory '{}' already contains an MCP server project. Use a different directory or set createSubdirectory: true.",
        path.display()
    )]
    ExistingProject { path: PathBuf },
}

impl ScaffoldError {
    /// Create a new write failure for `path`
    pub fn write_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailure {
            path: path.into(),
            source,
        }
    }

    /// Create a new template error
    pub fn template<S: Into<String>>(msg: S) -> Self {
        Self::Template(msg.into())
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is a conflict of any kind.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }

    /// Returns true if this is a write failure.
    #[must_use]
    pub fn is_write_failure(&self) -> bool {
        matches!(self, Self::WriteFailure { .. })
    }
}
