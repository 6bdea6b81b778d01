//! Outbound message delivery port.
//!
//! The transport resolves a private reply channel for the recipient and
//! applies presentation defaults; the dispatcher only supplies plain text.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::command::domain::CallerId;

/// Result type for delivery operations.
pub type DeliveryResult<T> = Result<T, DeliveryError>;

/// Port for sending a reply to a chat user.
#[async_trait]
pub trait MessageDelivery: Send + Sync {
    /// Sends `text` to `recipient`.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError`] when the backend rejects the message or
    /// cannot be reached.
    async fn send(&self, recipient: &CallerId, text: &str) -> DeliveryResult<()>;
}

/// Errors returned by delivery adapters.
#[derive(Debug, Clone, Error)]
pub enum DeliveryError {
    /// The chat backend answered with an error code.
    #[error("chat API error: {0}")]
    Api(String),

    /// No reply channel could be resolved for the recipient.
    #[error("no reply channel for user {0}")]
    MissingChannel(CallerId),

    /// The backend could not be reached.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl DeliveryError {
    /// Wraps a transport-layer failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
