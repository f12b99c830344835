//! Configuration loader implementations.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::schema::ValidatorConfig;

/// Environment variable naming a JSON configuration file.
pub const CONFIG_PATH_ENV: &str = "TEMPLATE_VALIDATOR_CONFIG";

/// Errors emitted while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read config `{path}`: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Source [`std::io::Error`].
        #[source]
        source: std::io::Error,
    },
    /// Configuration was not valid JSON for the schema.
    #[error("failed to parse config: {source}")]
    Parse {
        /// Source [`serde_json::Error`].
        #[from]
        source: serde_json::Error,
    },
    /// Values parsed but are inconsistent.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Result alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Parses and validates a configuration from JSON text.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] for malformed JSON or unknown keys and
/// [`ConfigError::Invalid`] for inconsistent limits.
pub fn from_json_str(raw: &str) -> ConfigResult<ValidatorConfig> {
    let config: ValidatorConfig = serde_json::from_str(raw)?;
    config.validate()?;
    Ok(config)
}

/// Loads and validates a configuration file.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] when the file cannot be read, otherwise the
/// errors of [`from_json_str`].
pub fn load_from_path(path: &Path) -> ConfigResult<ValidatorConfig> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = from_json_str(&raw)?;
    debug!(path = %path.display(), "loaded validator config");
    Ok(config)
}

/// Resolves the effective configuration.
///
/// Precedence: `explicit` path, then the file named by [`CONFIG_PATH_ENV`],
/// then [`ValidatorConfig::default`].
///
/// # Errors
///
/// Propagates [`load_from_path`] errors for whichever file is selected.
pub fn resolve(explicit: Option<&Path>) -> ConfigResult<ValidatorConfig> {
    if let Some(path) = explicit {
        return load_from_path(path);
    }

    match env::var_os(CONFIG_PATH_ENV) {
        Some(path) if !path.is_empty() => load_from_path(Path::new(&path)),
        _ => {
            debug!("no validator config supplied; using defaults");
            Ok(ValidatorConfig::default())
        }
    }
}
