//! Shared error definitions for template primitives.

use thiserror::Error;

/// Result alias used throughout the template workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while manipulating template primitive types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Placeholder name failed validation.
    #[error("invalid placeholder name `{name}`: {reason}")]
    InvalidPlaceholderName {
        /// The offending name.
        name: String,
        /// Human-readable reason for rejection.
        reason: String,
    },
}
