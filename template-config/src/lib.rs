//! Configuration management for template validation.
//!
//! [`ValidatorConfig`] carries the limits enforced by the rule pipeline. Its
//! defaults are the product limits; a JSON file can override any subset.

#![warn(missing_docs, clippy::pedantic)]

pub mod loader;
pub mod schema;

pub use loader::{
    CONFIG_PATH_ENV, ConfigError, ConfigResult, from_json_str, load_from_path, resolve,
};
pub use schema::ValidatorConfig;
