//! Validated command name type.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use super::RegistrationError;

/// Name a command is invoked by, matched exactly against the first token of
/// an inbound message.
///
/// Names are trimmed but otherwise kept verbatim; lookups are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandName(String);

impl CommandName {
    /// Creates a validated command name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::EmptyName`] when the value is empty after
    /// trimming, or [`RegistrationError::InvalidName`] when it contains
    /// whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, RegistrationError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(RegistrationError::EmptyName);
        }

        if trimmed.chars().any(char::is_whitespace) {
            return Err(RegistrationError::InvalidName(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Names a built-in command. The caller guarantees the name is valid.
    pub(crate) fn builtin(name: &'static str) -> Self {
        Self(name.to_owned())
    }

    /// Returns the command name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CommandName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for CommandName {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
