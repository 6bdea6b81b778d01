//! Outbound Slack message payloads.

use serde::Serialize;

/// Presentation defaults applied to every reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseStyle {
    /// Display name shown for the bot.
    pub username: String,
    /// Emoji shortcode used as the bot's icon, e.g. `:robot_face:`.
    pub icon_emoji: String,
}

impl ResponseStyle {
    /// Creates a response style.
    #[must_use]
    pub fn new(username: impl Into<String>, icon_emoji: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            icon_emoji: icon_emoji.into(),
        }
    }
}

/// Body of a `chat.postMessage` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostMessage {
    /// Target channel id.
    pub channel: String,
    /// Display name override.
    pub username: String,
    /// Icon override.
    pub icon_emoji: String,
    /// Notification fallback text.
    pub text: String,
    /// Rich layout blocks.
    pub blocks: Vec<Block>,
}

impl PostMessage {
    /// Wraps `body` in a single markdown section addressed to `channel`.
    #[must_use]
    pub fn markdown(channel: impl Into<String>, body: impl Into<String>, style: &ResponseStyle) -> Self {
        Self {
            channel: channel.into(),
            username: style.username.clone(),
            icon_emoji: style.icon_emoji.clone(),
            text: format!("Message received from {}", style.username),
            blocks: vec![Block::Section {
                text: TextObject::Mrkdwn { text: body.into() },
            }],
        }
    }
}

/// Layout block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A section holding one text object.
    Section {
        /// Section text.
        text: TextObject,
    },
}

/// Text composition object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    /// Slack-flavoured markdown.
    Mrkdwn {
        /// Markdown source.
        text: String,
    },
}
