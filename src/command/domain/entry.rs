//! Registered command entries and the registration request that builds them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use super::{CommandName, CommandSignature, HandlerError, ParameterSpec};

/// Access tier controlling who may invoke a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandTier {
    /// Available to every caller.
    Normal,
    /// Available only to the configured admin identity.
    Admin,
}

/// Function signature of a user-supplied command handler.
///
/// Handlers receive the raw argument tokens positionally and do their own
/// conversion.
pub type HandlerFn = dyn Fn(&[String]) -> Result<String, HandlerError> + Send + Sync;

/// Executable body of a command.
#[derive(Clone)]
pub enum CommandHandler {
    /// The built-in `help` command, rendered from the registry itself.
    Help,
    /// A handler registered by the host application.
    Custom(Arc<HandlerFn>),
}

impl fmt::Debug for CommandHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Help => f.write_str("CommandHandler::Help"),
            Self::Custom(_) => f.write_str("CommandHandler::Custom(..)"),
        }
    }
}

/// A command stored in the registry. Immutable once registered.
#[derive(Debug, Clone)]
pub struct CommandEntry {
    name: CommandName,
    help_text: String,
    tier: CommandTier,
    signature: CommandSignature,
    handler: CommandHandler,
}

impl CommandEntry {
    pub(crate) const fn new(
        name: CommandName,
        help_text: String,
        tier: CommandTier,
        signature: CommandSignature,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            help_text,
            tier,
            signature,
            handler,
        }
    }

    /// Returns the command name.
    #[must_use]
    pub const fn name(&self) -> &CommandName {
        &self.name
    }

    /// Returns the help text shown by `help <command>`.
    #[must_use]
    pub fn help_text(&self) -> &str {
        &self.help_text
    }

    /// Returns the access tier.
    #[must_use]
    pub const fn tier(&self) -> CommandTier {
        self.tier
    }

    /// Returns the declared handler signature.
    #[must_use]
    pub const fn signature(&self) -> &CommandSignature {
        &self.signature
    }

    /// Returns the handler.
    #[must_use]
    pub const fn handler(&self) -> &CommandHandler {
        &self.handler
    }
}

/// Request to add a command to the registry.
///
/// # Examples
///
/// ```
/// use stateless_rtm_bot::command::domain::{CommandRegistration, HandlerError, ParameterSpec};
///
/// let registration = CommandRegistration::new("add_two", "adds two numbers", |args| {
///     let total = args
///         .iter()
///         .try_fold(0_i64, |sum, arg| -> Result<i64, HandlerError> {
///             sum.checked_add(arg.parse::<i64>()?)
///                 .ok_or_else(|| HandlerError::new("sum does not fit in a 64-bit integer"))
///         })?;
///     Ok(total.to_string())
/// })
/// .with_parameter(ParameterSpec::required("addend1"))
/// .with_parameter(ParameterSpec::required("addend2"));
///
/// assert_eq!(registration.signature().required_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct CommandRegistration {
    name: String,
    help_text: String,
    tier: CommandTier,
    signature: CommandSignature,
    handler: CommandHandler,
}

impl CommandRegistration {
    /// Creates a normal-tier registration with an empty signature.
    ///
    /// Integer and float parse failures convert into [`HandlerError`] with
    /// `?`. Any other error goes through [`HandlerError::from_error`], which
    /// keeps the source chain in the reply:
    ///
    /// ```
    /// use stateless_rtm_bot::command::domain::{CommandRegistration, HandlerError, ParameterSpec};
    ///
    /// let registration = CommandRegistration::new("parse", "pretty-prints JSON", |args| {
    ///     let value: serde_json::Value = serde_json::from_str(&args.join(" "))
    ///         .map_err(|error| HandlerError::from_error(&error))?;
    ///     Ok(value.to_string())
    /// })
    /// .with_parameter(ParameterSpec::required("document"));
    ///
    /// assert_eq!(registration.name(), "parse");
    /// ```
    #[must_use]
    pub fn new<F>(name: impl Into<String>, help_text: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&[String]) -> Result<String, HandlerError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            help_text: help_text.into(),
            tier: CommandTier::Normal,
            signature: CommandSignature::new(),
            handler: CommandHandler::Custom(Arc::new(handler)),
        }
    }

    /// Appends a positional parameter to the declared signature.
    #[must_use]
    pub fn with_parameter(mut self, parameter: ParameterSpec) -> Self {
        self.signature = self.signature.with_parameter(parameter);
        self
    }

    /// Replaces the declared signature.
    #[must_use]
    pub fn with_signature(mut self, signature: CommandSignature) -> Self {
        self.signature = signature;
        self
    }

    /// Restricts the command to the admin identity.
    #[must_use]
    pub const fn admin_only(mut self) -> Self {
        self.tier = CommandTier::Admin;
        self
    }

    /// Returns the requested command name, unvalidated.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the requested tier.
    #[must_use]
    pub const fn tier(&self) -> CommandTier {
        self.tier
    }

    /// Returns the declared signature.
    #[must_use]
    pub const fn signature(&self) -> &CommandSignature {
        &self.signature
    }

    pub(crate) fn into_parts(self) -> (String, String, CommandTier, CommandSignature, CommandHandler) {
        (
            self.name,
            self.help_text,
            self.tier,
            self.signature,
            self.handler,
        )
    }
}
