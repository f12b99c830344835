//! Placeholder identifier type.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Name of a placeholder token, e.g. the `NOMBRE` in `[NOMBRE]`.
///
/// Valid names are non-empty and made only of ASCII uppercase letters,
/// digits, and underscores.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlaceholderName(String);

impl PlaceholderName {
    /// Creates a placeholder name after validating its format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPlaceholderName`] if the name is empty or
    /// contains characters outside `A-Z`, `0-9`, and `_`.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Renders the name as a bracketed token, e.g. `[NOMBRE]`.
    #[must_use]
    pub fn token(&self) -> String {
        format!("[{}]", self.0)
    }
}

/// Returns true when `name` would be accepted by [`PlaceholderName::new`].
#[must_use]
pub fn is_valid_placeholder_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| matches!(b, b'A'..=b'Z' | b'0'..=b'9' | b'_'))
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidPlaceholderName {
            name: String::new(),
            reason: "name cannot be empty".into(),
        });
    }

    if !is_valid_placeholder_name(name) {
        return Err(Error::InvalidPlaceholderName {
            name: name.into(),
            reason: "name must contain only uppercase letters, digits, or underscores".into(),
        });
    }

    Ok(())
}

impl AsRef<str> for PlaceholderName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for PlaceholderName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PlaceholderName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for PlaceholderName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<PlaceholderName> for String {
    fn from(value: PlaceholderName) -> Self {
        value.0
    }
}

impl PartialEq<str> for PlaceholderName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PlaceholderName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
