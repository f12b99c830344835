//! Observability utilities for template tooling.
//!
//! Libraries in this workspace only emit `tracing` events; binaries call
//! [`init`] once to install a formatting subscriber.

#![warn(missing_docs, clippy::pedantic)]

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Subscriber settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub default_filter: String,
    /// Whether to print event targets.
    pub with_target: bool,
    /// Whether to write to stderr instead of stdout.
    pub to_stderr: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            default_filter: "warn".to_owned(),
            with_target: false,
            to_stderr: true,
        }
    }
}

impl TelemetryConfig {
    /// Returns a config with the supplied fallback filter.
    #[must_use]
    pub fn with_default_filter(mut self, filter: impl Into<String>) -> Self {
        self.default_filter = filter.into();
        self
    }

    /// Builds the effective filter, preferring `RUST_LOG` when set.
    ///
    /// # Errors
    ///
    /// Returns an error when the fallback directive cannot be parsed.
    pub fn env_filter(&self) -> Result<EnvFilter> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        EnvFilter::try_new(&self.default_filter)
            .map_err(|err| anyhow!("invalid log filter `{}`: {err}", self.default_filter))
    }
}

/// Installs the global `fmt` subscriber.
///
/// # Errors
///
/// Returns an error when the filter is invalid or a global subscriber is
/// already installed.
pub fn init(config: &TelemetryConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter()?)
        .with_target(config.with_target);

    let installed = if config.to_stderr {
        builder.with_writer(std::io::stderr).try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}
