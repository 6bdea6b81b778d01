//! In-memory delivery adapter for tests and local runs.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::command::domain::CallerId;
use crate::command::ports::{DeliveryError, DeliveryResult, MessageDelivery};

/// A reply captured by [`InMemoryDelivery`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveredMessage {
    /// Addressee.
    pub recipient: CallerId,
    /// Plain-text body.
    pub text: String,
}

/// Thread-safe delivery adapter that records every reply instead of sending it.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDelivery {
    state: Arc<RwLock<InMemoryDeliveryState>>,
}

#[derive(Debug, Default)]
struct InMemoryDeliveryState {
    delivered: Vec<DeliveredMessage>,
    rejecting: bool,
}

impl InMemoryDelivery {
    /// Creates an adapter that accepts every message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an adapter that rejects every message with an API error.
    #[must_use]
    pub fn rejecting() -> Self {
        let state = InMemoryDeliveryState {
            delivered: Vec::new(),
            rejecting: true,
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Returns every message accepted so far, in send order.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::Transport`] when the state lock is poisoned.
    pub fn delivered(&self) -> DeliveryResult<Vec<DeliveredMessage>> {
        let state = self
            .state
            .read()
            .map_err(|err| DeliveryError::transport(std::io::Error::other(err.to_string())))?;
        Ok(state.delivered.clone())
    }

    /// Returns the texts accepted for `recipient`, in send order.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::Transport`] when the state lock is poisoned.
    pub fn texts_for(&self, recipient: &CallerId) -> DeliveryResult<Vec<String>> {
        Ok(self
            .delivered()?
            .into_iter()
            .filter(|message| &message.recipient == recipient)
            .map(|message| message.text)
            .collect())
    }
}

#[async_trait]
impl MessageDelivery for InMemoryDelivery {
    async fn send(&self, recipient: &CallerId, text: &str) -> DeliveryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| DeliveryError::transport(std::io::Error::other(err.to_string())))?;

        if state.rejecting {
            return Err(DeliveryError::Api("channel_not_found".to_owned()));
        }

        state.delivered.push(DeliveredMessage {
            recipient: recipient.clone(),
            text: text.to_owned(),
        });
        Ok(())
    }
}
