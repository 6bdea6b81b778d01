//! `tracing`-backed dispatch observer.

use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::command::domain::{CallerId, CommandName, DispatchId, HandlerError, PayloadError};
use crate::command::ports::{DeliveryError, DispatchObserver};

/// Emits one `tracing` event per dispatch step, tagged with the dispatch id.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl DispatchObserver for TracingObserver {
    fn payload_received(&self, dispatch: DispatchId, payload: &Value) {
        debug!(%dispatch, %payload, "received payload");
    }

    fn malformed_payload(&self, dispatch: DispatchId, error: &PayloadError) {
        error!(%dispatch, %error, "payload came packaged in an unexpected form; discarding");
    }

    fn self_message_ignored(&self, dispatch: DispatchId) {
        debug!(%dispatch, "ignoring message originating from bot");
    }

    fn command_not_found(&self, dispatch: DispatchId, sender: &CallerId, command: &str) {
        info!(%dispatch, %sender, command, "unknown command; replying with help listing");
    }

    fn arity_mismatch(&self, dispatch: DispatchId, command: &CommandName, supplied: usize) {
        warn!(%dispatch, %command, supplied, "argument count does not fit command signature");
    }

    fn command_invoked(&self, dispatch: DispatchId, sender: &CallerId, command: &CommandName) {
        info!(%dispatch, %sender, %command, "invoking command");
    }

    fn handler_failed(&self, dispatch: DispatchId, command: &CommandName, error: &HandlerError) {
        warn!(%dispatch, %command, %error, "command handler failed");
    }

    fn response_sent(&self, dispatch: DispatchId, recipient: &CallerId, text: &str) {
        debug!(%dispatch, %recipient, text, "sent response");
    }

    fn delivery_failed(&self, dispatch: DispatchId, recipient: &CallerId, error: &DeliveryError) {
        error!(%dispatch, %recipient, %error, "failed to deliver response");
    }
}
