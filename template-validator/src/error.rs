//! Errors raised at the edges of the validation engine.
//!
//! Validation itself never fails; these cover editing, rendering, and the
//! save gate.

use thiserror::Error;

/// Result alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur around template validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A placeholder had no value at render time.
    #[error("missing value for placeholder [{name}]")]
    MissingValue {
        /// Name of the placeholder lacking a value.
        name: String,
    },

    /// An insertion range was inverted or did not fall on character
    /// boundaries of the text.
    #[error("selection {start}..{end} is not a valid range in text of {len} bytes")]
    InvalidSelection {
        /// Requested start offset.
        start: usize,
        /// Requested end offset.
        end: usize,
        /// Length of the text in bytes.
        len: usize,
    },

    /// The template carries blocking findings and cannot be saved.
    #[error("template has {errors} blocking error(s): {first}")]
    Rejected {
        /// Number of error findings.
        errors: usize,
        /// Message of the first error finding.
        first: String,
    },
}
