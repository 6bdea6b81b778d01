//! Port trait definitions for command dispatch.
//!
//! Ports define what the dispatcher needs from infrastructure: a way to
//! deliver replies and a way to log what happened.

pub mod delivery;
pub mod observer;

pub use delivery::{DeliveryError, DeliveryResult, MessageDelivery};
pub use observer::DispatchObserver;
