//! Stateless RTM bot: command dispatch for chat bots.
//!
//! This crate turns inbound chat messages into calls to registered command
//! handlers and sends the handlers' text output back to the sender.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure dispatch types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for reply delivery and logging
//! - **Adapters**: Concrete implementations of ports (Slack, in-memory, `tracing`)
//!
//! # Modules
//!
//! - [`command`]: Registry, arity validation, help, and dispatch
//! - [`config`]: JSON configuration and token loading
//! - [`telemetry`]: Console logging setup

pub mod command;
pub mod config;
pub mod telemetry;
