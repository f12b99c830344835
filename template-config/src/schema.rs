//! Strongly typed validation limits.

use serde::{Deserialize, Serialize};

use crate::loader::{ConfigError, ConfigResult};

/// Limits applied by the validation pipeline.
///
/// Lengths are counted in UTF-16 code units, as text editors report them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Bodies shorter than this are rejected.
    pub min_body_chars: usize,
    /// Bodies longer than this draw a warning.
    pub max_body_chars: usize,
    /// Titles longer than this draw a warning.
    pub max_title_chars: usize,
    /// Score a fuzzy placeholder suggestion must strictly exceed.
    pub similarity_threshold: f64,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            min_body_chars: 10,
            max_body_chars: 2000,
            max_title_chars: 100,
            similarity_threshold: 0.5,
        }
    }
}

impl ValidatorConfig {
    /// Checks internal consistency of the limits.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the threshold lies outside
    /// `[0, 1]` or the body bounds are inverted.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(ConfigError::Invalid(
                "similarity_threshold must be between 0 and 1",
            ));
        }
        if self.min_body_chars > self.max_body_chars {
            return Err(ConfigError::Invalid(
                "min_body_chars cannot exceed max_body_chars",
            ));
        }
        Ok(())
    }
}
