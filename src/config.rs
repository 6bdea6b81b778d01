//! Bot configuration.
//!
//! Presentation defaults and the admin identity come from a JSON file; the
//! transport token comes from the environment so it never lands on disk
//! next to the rest of the configuration.
//!
//! ```json
//! {
//!   "response_username": "stateless_slack_RTM_bot",
//!   "response_avatar": ":robot_face:",
//!   "admin_user_slack_id": "ABCDEF"
//! }
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::command::adapters::ResponseStyle;
use crate::command::domain::CallerId;

/// Environment variable holding the transport token.
pub const TOKEN_ENV_VAR: &str = "SLACK_BOT_TOKEN";

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration path has no file name component.
    #[error("configuration path '{0}' does not name a file")]
    InvalidPath(Utf8PathBuf),

    /// The configuration file could not be read.
    #[error("failed to read configuration file '{path}': {source}")]
    Io {
        /// File that failed to load.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for [`BotConfig`].
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The token environment variable is unset or empty.
    #[error("environment variable {0} must be set")]
    MissingToken(&'static str),
}

/// Contents of the JSON configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotConfig {
    /// Display name used for replies.
    pub response_username: String,
    /// Icon emoji used for replies.
    pub response_avatar: String,
    /// The only caller allowed to run admin commands.
    #[serde(rename = "admin_user_slack_id", default)]
    pub admin_user_id: Option<String>,
}

impl BotConfig {
    /// Parses configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the JSON is malformed or a
    /// required key is missing.
    pub fn from_json(contents: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Reads and parses the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the path names no file, the file cannot
    /// be read, or its contents do not parse.
    pub fn load(path: &Utf8Path) -> ConfigResult<Self> {
        let file_name = path
            .file_name()
            .ok_or_else(|| ConfigError::InvalidPath(path.to_owned()))?;
        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));

        let io_error = |source| ConfigError::Io {
            path: path.to_owned(),
            source,
        };
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(io_error)?;
        let contents = dir.read_to_string(file_name).map_err(io_error)?;
        Self::from_json(&contents)
    }

    /// Returns the admin identity, if one is configured.
    #[must_use]
    pub fn admin_identity(&self) -> Option<CallerId> {
        self.admin_user_id.clone().map(CallerId::new)
    }

    /// Returns the presentation defaults for replies.
    #[must_use]
    pub fn response_style(&self) -> ResponseStyle {
        ResponseStyle::new(&self.response_username, &self.response_avatar)
    }
}

/// Transport token. Redacted from debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct BotToken(String);

impl BotToken {
    /// Wraps a token.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw token for authenticating requests.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BotToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BotToken(<redacted>)")
    }
}

/// Complete runtime settings: file configuration plus token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotSettings {
    /// File-based configuration.
    pub config: BotConfig,
    /// Transport token.
    pub token: BotToken,
}

impl BotSettings {
    /// Loads the file at `path` and the token from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file fails to load or
    /// [`TOKEN_ENV_VAR`] is unset.
    pub fn load(path: &Utf8Path) -> ConfigResult<Self> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Loads the file at `path` and looks the token up through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file fails to load or the token
    /// lookup yields nothing.
    pub fn load_with(
        path: &Utf8Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> ConfigResult<Self> {
        let config = BotConfig::load(path)?;
        let token = lookup(TOKEN_ENV_VAR)
            .filter(|token| !token.trim().is_empty())
            .ok_or(ConfigError::MissingToken(TOKEN_ENV_VAR))?;
        Ok(Self {
            config,
            token: BotToken::new(token),
        })
    }
}
