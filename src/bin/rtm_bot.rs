//! Runs the command dispatcher over chat events read from standard input.
//!
//! Usage:
//!
//! ```text
//! rtm_bot <config-path>
//! ```
//!
//! Each input line must be one JSON event as delivered by the real-time
//! connection, for example:
//!
//! ```json
//! {"data": {"text": "add 2 3", "user": "U123"}}
//! ```
//!
//! Replies are posted through the Slack Web API using `SLACK_BOT_TOKEN`.
//! The log filter is taken from `RUST_LOG` and defaults to `info`.

use std::sync::Arc;
use std::time::Instant;

use camino::Utf8PathBuf;
use mockable::DefaultClock;
use stateless_rtm_bot::command::adapters::{SlackApi, SlackDelivery, TracingObserver};
use stateless_rtm_bot::command::domain::{CommandRegistration, HandlerError, ParameterSpec};
use stateless_rtm_bot::command::services::{CommandRegistry, Dispatcher, RegistryResult};
use stateless_rtm_bot::config::BotSettings;
use stateless_rtm_bot::telemetry;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::runtime::Builder;
use tracing::{info, warn};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
enum CliError {
    #[error("usage: rtm_bot <config-path>")]
    Usage,
}

fn main() -> Result<(), BoxError> {
    let level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_owned());
    telemetry::init(&level)?;

    let config_path = std::env::args()
        .nth(1)
        .map(Utf8PathBuf::from)
        .ok_or(CliError::Usage)?;
    let settings = BotSettings::load(&config_path)?;

    let mut registry = CommandRegistry::new(settings.config.admin_identity());
    register_commands(&mut registry)?;
    info!(commands = registry.len(), "command registry ready");

    let delivery = SlackDelivery::new(
        SlackApi::new(settings.token.expose())?,
        settings.config.response_style(),
    );
    let dispatcher = Dispatcher::new(
        Arc::new(registry),
        Arc::new(delivery),
        Arc::new(TracingObserver),
        Arc::new(DefaultClock),
    );

    let runtime = Builder::new_multi_thread().enable_all().build()?;
    runtime.block_on(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str(&line) {
                Ok(payload) => {
                    dispatcher.handle_payload(&payload).await;
                }
                Err(error) => warn!(%error, "skipping input line that is not JSON"),
            }
        }
        Ok::<_, BoxError>(())
    })
}

fn register_commands(registry: &mut CommandRegistry) -> RegistryResult<()> {
    let started = Instant::now();
    registry.register(
        CommandRegistration::new("echo", "Repeats the given word, or 'default'", |args| {
            Ok(args.first().map_or("default", String::as_str).to_owned())
        })
        .with_parameter(ParameterSpec::optional("word")),
    )?;
    registry.register(
        CommandRegistration::new("add", "Adds two integers", |args| {
            let total = args
                .iter()
                .try_fold(0_i64, |sum, arg| -> Result<i64, HandlerError> {
                    sum.checked_add(arg.parse::<i64>()?)
                        .ok_or_else(|| HandlerError::new("sum does not fit in a 64-bit integer"))
                })?;
            Ok(total.to_string())
        })
        .with_parameter(ParameterSpec::required("addend1"))
        .with_parameter(ParameterSpec::required("addend2")),
    )?;
    registry.register(
        CommandRegistration::new(
            "uptime",
            "Reports how long the bot has been running",
            move |_: &[String]| Ok(format!("up for {}s", started.elapsed().as_secs())),
        )
        .admin_only(),
    )?;
    Ok(())
}
