//! Inbound chat messages and their decoding from transport payloads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::PayloadError;

/// Message subtype the chat backend uses for messages posted by bots,
/// including echoes of this bot's own replies.
pub const SELF_ORIGINATED_SUBTYPE: &str = "bot_message";

/// Opaque identity of a message sender.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallerId(String);

impl CallerId {
    /// Wraps a sender identity.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CallerId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CallerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single message delivered by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    text: String,
    sender: CallerId,
    self_originated: bool,
}

impl InboundMessage {
    /// Creates a message from a human sender.
    #[must_use]
    pub fn new(text: impl Into<String>, sender: CallerId) -> Self {
        Self {
            text: text.into(),
            sender,
            self_originated: false,
        }
    }

    /// Marks the message as an echo of this system's own output.
    #[must_use]
    pub const fn self_originated(mut self) -> Self {
        self.self_originated = true;
        self
    }

    /// Decodes a transport event of the form
    /// `{"data": {"text": .., "user": .., "subtype": ..}}`.
    ///
    /// Bot-originated events are accepted even when `text` or `user` is
    /// absent, since they are discarded before either is read.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError`] when `data` is missing or not an object, or
    /// when a human message lacks a string `text` or `user`.
    pub fn from_payload(payload: &Value) -> Result<Self, PayloadError> {
        let root = payload
            .as_object()
            .ok_or(PayloadError::NotAnObject("payload"))?;
        let data = root
            .get("data")
            .ok_or(PayloadError::MissingField("data"))?
            .as_object()
            .ok_or(PayloadError::NotAnObject("data"))?;

        let self_originated = optional_str(data, "subtype")? == Some(SELF_ORIGINATED_SUBTYPE);
        if self_originated {
            let text = optional_str(data, "text")?.unwrap_or_default();
            let sender = optional_str(data, "user")?.unwrap_or_default();
            return Ok(Self::new(text, CallerId::new(sender)).self_originated());
        }

        let text = required_str(data, "text")?;
        let sender = required_str(data, "user")?;
        Ok(Self::new(text, CallerId::new(sender)))
    }

    /// Returns the raw message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the sender identity.
    #[must_use]
    pub const fn sender(&self) -> &CallerId {
        &self.sender
    }

    /// Returns `true` for echoes of this system's own output.
    #[must_use]
    pub const fn is_self_originated(&self) -> bool {
        self.self_originated
    }

    /// Splits the text into a command token and argument tokens.
    #[must_use]
    pub fn invocation(&self) -> CommandInvocation {
        CommandInvocation::parse(&self.text)
    }
}

fn optional_str<'a>(
    data: &'a Map<String, Value>,
    field: &'static str,
) -> Result<Option<&'a str>, PayloadError> {
    match data.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(_) => Err(PayloadError::InvalidField(field)),
    }
}

fn required_str<'a>(
    data: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, PayloadError> {
    optional_str(data, field)?.ok_or(PayloadError::MissingField(field))
}

/// Whitespace-split view of a message: the command token and its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandInvocation {
    command: String,
    arguments: Vec<String>,
}

impl CommandInvocation {
    /// Splits `text` on whitespace.
    ///
    /// Blank text yields an empty command token, which never matches a
    /// registered name.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut tokens = text.split_whitespace().map(str::to_owned);
        let command = tokens.next().unwrap_or_default();
        Self {
            command,
            arguments: tokens.collect(),
        }
    }

    /// Returns the command token.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Returns the argument tokens in order.
    #[must_use]
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }
}
