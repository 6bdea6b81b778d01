//! Minimal Slack Web API client for direct-message replies.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use super::PostMessage;
use crate::command::domain::CallerId;
use crate::command::ports::{DeliveryError, DeliveryResult};

/// Default Slack Web API base URL.
pub const API_BASE: &str = "https://slack.com/api";

/// Upper bound on a single Web API request, connection included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct SlackResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenConversationResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    channel: Option<ConversationChannel>,
}

#[derive(Debug, Deserialize)]
struct ConversationChannel {
    id: String,
}

fn api_error(error: Option<String>) -> DeliveryError {
    DeliveryError::Api(error.unwrap_or_else(|| "unknown error".to_owned()))
}

/// Authenticated Slack Web API client.
#[derive(Debug, Clone)]
pub struct SlackApi {
    client: Client,
    token: String,
    base_url: String,
}

impl SlackApi {
    /// Creates a client against the public Slack API with
    /// [`DEFAULT_TIMEOUT`].
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::Transport`] when the HTTP client cannot be
    /// built.
    pub fn new(token: impl Into<String>) -> DeliveryResult<Self> {
        Self::with_base_url(token, API_BASE)
    }

    /// Creates a client against a custom base URL with [`DEFAULT_TIMEOUT`].
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::Transport`] when the HTTP client cannot be
    /// built.
    pub fn with_base_url(
        token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> DeliveryResult<Self> {
        Self::with_timeout(token, base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a client whose requests fail with a transport error once
    /// `timeout` elapses without a complete response.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::Transport`] when the HTTP client cannot be
    /// built.
    pub fn with_timeout(
        token: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> DeliveryResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(DeliveryError::transport)?;
        Ok(Self {
            client,
            token: token.into(),
            base_url: base_url.into(),
        })
    }

    /// Opens (or reuses) the direct-message channel with `user`.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError`] when the request fails, Slack reports an
    /// error, or the response carries no channel.
    pub async fn open_direct_message(&self, user: &CallerId) -> DeliveryResult<String> {
        let body = serde_json::json!({ "users": user.as_str() });
        let response = self
            .client
            .post(format!("{}/conversations.open", self.base_url))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(DeliveryError::transport)?;

        let parsed: OpenConversationResponse =
            response.json().await.map_err(DeliveryError::transport)?;
        if !parsed.ok {
            return Err(api_error(parsed.error));
        }
        parsed
            .channel
            .map(|channel| channel.id)
            .ok_or_else(|| DeliveryError::MissingChannel(user.clone()))
    }

    /// Posts a prepared message.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError`] when the request fails or Slack reports an
    /// error.
    pub async fn post_message(&self, message: &PostMessage) -> DeliveryResult<()> {
        let response = self
            .client
            .post(format!("{}/chat.postMessage", self.base_url))
            .bearer_auth(&self.token)
            .json(message)
            .send()
            .await
            .map_err(DeliveryError::transport)?;

        let parsed: SlackResponse = response.json().await.map_err(DeliveryError::transport)?;
        if parsed.ok {
            Ok(())
        } else {
            Err(api_error(parsed.error))
        }
    }
}
