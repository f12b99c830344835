//! Core shared types for bracketed message templates.

#![warn(missing_docs, clippy::pedantic)]

mod error;
mod name;
mod span;

/// Error type and result alias shared across the workspace.
pub use error::{Error, Result};
/// Validated placeholder identifier such as `NOMBRE` or `BENEFICIO_1`.
pub use name::{PlaceholderName, is_valid_placeholder_name};
/// Byte range inside a template body.
pub use span::Span;

/// Character opening a placeholder token.
pub const OPEN_DELIMITER: char = '[';
/// Character closing a placeholder token.
pub const CLOSE_DELIMITER: char = ']';
