//! Error types for command registration, handler execution, and inbound
//! payload decoding.

use std::any::Any;
use std::fmt;

use thiserror::Error;

/// Errors returned when a command cannot be registered.
///
/// Registration happens at startup, so the host is expected to treat any of
/// these as fatal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrationError {
    /// The command name is empty after trimming.
    #[error("command name must not be empty")]
    EmptyName,

    /// The command name contains whitespace and could never match a token.
    #[error("command name '{0}' must not contain whitespace")]
    InvalidName(String),

    /// The name is already registered in either tier.
    #[error("command '{0}' is already registered")]
    DuplicateName(String),

    /// The signature declares a variable-arity parameter.
    #[error("command '{command}' declares variadic parameter '{parameter}', which is not supported")]
    VariadicParameter {
        /// Command name.
        command: String,
        /// Offending parameter name.
        parameter: String,
    },

    /// A required parameter follows an optional one.
    #[error("command '{command}' declares required parameter '{parameter}' after an optional one")]
    RequiredAfterOptional {
        /// Command name.
        command: String,
        /// Offending parameter name.
        parameter: String,
    },

    /// The same parameter name is declared twice.
    #[error("command '{command}' declares parameter '{parameter}' more than once")]
    DuplicateParameter {
        /// Command name.
        command: String,
        /// Duplicated parameter name.
        parameter: String,
    },
}

/// Failure reported by a command handler.
///
/// Handlers return this from their body; panics raised inside a handler are
/// converted into the same type at the dispatch boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerError {
    message: String,
}

impl HandlerError {
    /// Creates a handler error with a description.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Wraps any error, keeping its source chain in the description.
    ///
    /// This is the general conversion for handler bodies; use it as
    /// `.map_err(|error| HandlerError::from_error(&error))` for error types
    /// without a `From` impl.
    #[must_use]
    pub fn from_error(error: &(dyn std::error::Error + 'static)) -> Self {
        let mut message = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            message.push_str("\ncaused by: ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Self { message }
    }

    /// Builds an error from a panic payload caught at the dispatch boundary.
    #[must_use]
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let detail = payload
            .downcast_ref::<&str>()
            .map(|text| (*text).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic payload".to_owned());
        Self {
            message: format!("handler panicked: {detail}"),
        }
    }

    /// Returns the failure description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for HandlerError {}

impl From<std::num::ParseIntError> for HandlerError {
    fn from(error: std::num::ParseIntError) -> Self {
        Self::from_error(&error)
    }
}

impl From<std::num::ParseFloatError> for HandlerError {
    fn from(error: std::num::ParseFloatError) -> Self {
        Self::from_error(&error)
    }
}

/// Errors raised while decoding an inbound chat event.
///
/// These never reach the user: without a sender there is nobody to reply to.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PayloadError {
    /// The payload or one of its nested sections is not a JSON object.
    #[error("payload section '{0}' is not an object")]
    NotAnObject(&'static str),

    /// A required field is absent.
    #[error("payload is missing field '{0}'")]
    MissingField(&'static str),

    /// A field is present but has the wrong JSON type.
    #[error("payload field '{0}' must be a string")]
    InvalidField(&'static str),
}
