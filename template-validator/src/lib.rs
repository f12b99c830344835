//! Validation engine for bracketed message templates.
//!
//! A template body such as `Hola [NOMBRE], bienvenido a [EMPRESA].` is
//! scanned for placeholder tokens, checked for unclosed delimiters, matched
//! against the placeholder catalog, and run through a fixed sequence of
//! content rules. The outcome is a [`Verdict`]: a validity flag, ordered
//! findings, and the detected placeholders.
//!
//! ```
//! use template_validator::validate;
//!
//! let verdict = validate("Hola [NOMBRE], bienvenido a [EMPRESA].", "Saludo", "");
//! assert!(verdict.is_valid());
//! assert_eq!(verdict.placeholders().len(), 2);
//! ```

#![warn(missing_docs, clippy::pedantic)]

pub mod balance;
pub mod editor;
mod error;
pub mod finding;
pub mod scanner;
pub mod template;
pub mod validator;
pub mod verdict;

pub use balance::{StructuralDefect, find_unclosed};
pub use editor::{Insertion, insert_placeholder};
pub use error::{TemplateError, TemplateResult};
pub use finding::{Finding, FindingCategory, FindingKind};
pub use scanner::{DetectedPlaceholder, Scanner, scan};
pub use template::{MessageTemplate, TemplateCategory};
pub use validator::{Validator, validate};
pub use verdict::Verdict;
