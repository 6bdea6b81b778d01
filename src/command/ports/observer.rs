//! Logging capability injected into the dispatcher.
//!
//! Every notable step of a dispatch cycle is reported here instead of going
//! straight to a global logger, so tests can assert on what was logged.

use serde_json::Value;

use crate::command::domain::{
    CallerId, CommandName, DispatchId, HandlerError, PayloadError,
};
use crate::command::ports::DeliveryError;

/// Receives dispatch events for logging.
pub trait DispatchObserver: Send + Sync {
    /// A raw payload arrived from the transport.
    fn payload_received(&self, dispatch: DispatchId, payload: &Value);

    /// A payload could not be decoded and was dropped.
    fn malformed_payload(&self, dispatch: DispatchId, error: &PayloadError);

    /// An echo of this system's own output was dropped.
    fn self_message_ignored(&self, dispatch: DispatchId);

    /// No command matched for the caller.
    fn command_not_found(&self, dispatch: DispatchId, sender: &CallerId, command: &str);

    /// Arguments did not fit the command's signature.
    fn arity_mismatch(&self, dispatch: DispatchId, command: &CommandName, supplied: usize);

    /// A handler is about to run.
    fn command_invoked(&self, dispatch: DispatchId, sender: &CallerId, command: &CommandName);

    /// A handler failed.
    fn handler_failed(&self, dispatch: DispatchId, command: &CommandName, error: &HandlerError);

    /// A response was delivered.
    fn response_sent(&self, dispatch: DispatchId, recipient: &CallerId, text: &str);

    /// A response could not be delivered.
    fn delivery_failed(&self, dispatch: DispatchId, recipient: &CallerId, error: &DeliveryError);
}
