//! Placeholder-aware message template validation SDK facade.
//!
//! Bundles the workspace crates behind feature flags so hosts can pull in
//! only the catalog, or the full validation engine with configuration and
//! tracing setup.

#![warn(missing_docs, clippy::pedantic)]

/// Re-export shared primitives for convenience.
pub use template_primitives as primitives;

/// Placeholder catalog and similarity matching (enabled by `catalog` feature).
#[cfg(feature = "catalog")]
pub use template_catalog as catalog;

/// Scanning and rule pipeline (enabled by `validator` feature).
#[cfg(feature = "validator")]
pub use template_validator as validator;

/// Validation limits and loaders (enabled by `config` feature).
#[cfg(feature = "config")]
pub use template_config as config;

/// Tracing subscriber setup (enabled by `telemetry` feature).
#[cfg(feature = "telemetry")]
pub use template_telemetry as telemetry;

/// Validates a template with the built-in catalog and default limits.
#[cfg(feature = "validator")]
pub use template_validator::validate;
