//! Adapters implementing the dispatch ports.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryDelivery`]: records replies, for tests and local runs
//! - [`slack::SlackDelivery`]: direct-message replies via the Slack Web API
//! - [`log_observer::TracingObserver`]: dispatch logging through `tracing`

pub mod log_observer;
pub mod memory;
pub mod slack;

pub use log_observer::TracingObserver;
pub use memory::{DeliveredMessage, InMemoryDelivery};
pub use slack::{ResponseStyle, SlackApi, SlackDelivery};
