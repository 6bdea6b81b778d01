//! Chat command dispatch.
//!
//! Inbound chat messages are split into a command token and arguments,
//! matched against a two-tier registry, checked against the handler's
//! declared arity, and answered with the handler's text output.
//!
//! # Architecture
//!
//! - **Domain**: names, signatures, entries, inbound messages ([`domain`])
//! - **Ports**: reply delivery and dispatch logging ([`ports`])
//! - **Adapters**: in-memory, Slack, and `tracing` implementations ([`adapters`])
//! - **Services**: registry, help rendering, dispatcher ([`services`])
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use mockable::DefaultClock;
//! use stateless_rtm_bot::command::adapters::{InMemoryDelivery, TracingObserver};
//! use stateless_rtm_bot::command::domain::{CallerId, CommandRegistration, InboundMessage, ParameterSpec};
//! use stateless_rtm_bot::command::services::{CommandRegistry, Dispatcher};
//!
//! let mut registry = CommandRegistry::new(None);
//! registry
//!     .register(
//!         CommandRegistration::new("echo", "repeats its argument", |args| {
//!             Ok(args.join(" "))
//!         })
//!         .with_parameter(ParameterSpec::required("text")),
//!     )
//!     .expect("registration should succeed");
//!
//! let delivery = Arc::new(InMemoryDelivery::new());
//! let dispatcher = Dispatcher::new(
//!     Arc::new(registry),
//!     Arc::clone(&delivery),
//!     Arc::new(TracingObserver),
//!     Arc::new(DefaultClock),
//! );
//!
//! let runtime = tokio::runtime::Builder::new_current_thread()
//!     .build()
//!     .expect("runtime should build");
//! let outcome = runtime.block_on(dispatcher.handle(InboundMessage::new("echo hi", CallerId::new("U1"))));
//!
//! assert_eq!(outcome.responses(), ["hi".to_owned()]);
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
