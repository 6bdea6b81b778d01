//! Slack delivery adapter.
//!
//! Replies go to the sender's direct-message channel with the configured
//! display name and icon.

mod api;
mod message;

use async_trait::async_trait;
use tracing::debug;

pub use api::{API_BASE, DEFAULT_TIMEOUT, SlackApi};
pub use message::{Block, PostMessage, ResponseStyle, TextObject};

use crate::command::domain::CallerId;
use crate::command::ports::{DeliveryResult, MessageDelivery};

/// Delivers replies through the Slack Web API.
#[derive(Debug, Clone)]
pub struct SlackDelivery {
    api: SlackApi,
    style: ResponseStyle,
}

impl SlackDelivery {
    /// Creates a delivery adapter.
    #[must_use]
    pub const fn new(api: SlackApi, style: ResponseStyle) -> Self {
        Self { api, style }
    }

    /// Returns the presentation defaults applied to replies.
    #[must_use]
    pub const fn style(&self) -> &ResponseStyle {
        &self.style
    }
}

#[async_trait]
impl MessageDelivery for SlackDelivery {
    async fn send(&self, recipient: &CallerId, text: &str) -> DeliveryResult<()> {
        let channel = self.api.open_direct_message(recipient).await?;
        let message = PostMessage::markdown(channel, text, &self.style);
        debug!(channel = %message.channel, "posting slack message");
        self.api.post_message(&message).await
    }
}
