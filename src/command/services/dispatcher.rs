//! Message dispatch service.
//!
//! One call to [`Dispatcher::handle`] is one dispatch cycle: filter, parse,
//! resolve, validate, invoke, respond. Every runtime failure is turned into
//! a reply or a silent discard; nothing escapes the cycle.

use mockable::Clock;
use serde_json::Value;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use super::{CommandRegistry, help};
use crate::command::domain::{
    CallerId, CommandEntry, CommandHandler, DispatchId, DispatchOutcome, DispatchOutcomeKind,
    HandlerError, InboundMessage,
};
use crate::command::ports::{DispatchObserver, MessageDelivery};

/// Reply sent when the argument count does not fit the command signature.
pub const ARITY_FAILURE_NOTICE: &str = "Input parameters are incorrect";

/// Prefix of the reply sent when a handler fails.
pub const HANDLER_FAILURE_PREFIX: &str = "The following error occurred:";

/// Routes inbound messages to registered command handlers.
#[derive(Clone)]
pub struct Dispatcher<D, O, C>
where
    D: MessageDelivery,
    O: DispatchObserver,
    C: Clock + Send + Sync,
{
    registry: Arc<CommandRegistry>,
    delivery: Arc<D>,
    observer: Arc<O>,
    clock: Arc<C>,
}

impl<D, O, C> Dispatcher<D, O, C>
where
    D: MessageDelivery,
    O: DispatchObserver,
    C: Clock + Send + Sync,
{
    /// Creates a dispatcher over a fully populated registry.
    #[must_use]
    pub const fn new(
        registry: Arc<CommandRegistry>,
        delivery: Arc<D>,
        observer: Arc<O>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            registry,
            delivery,
            observer,
            clock,
        }
    }

    /// Returns the registry this dispatcher reads from.
    #[must_use]
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Decodes a raw transport event and dispatches it.
    ///
    /// Undecodable payloads are logged and dropped without a reply.
    pub async fn handle_payload(&self, payload: &Value) -> DispatchOutcome {
        let dispatch = DispatchId::new();
        self.observer.payload_received(dispatch, payload);

        match InboundMessage::from_payload(payload) {
            Ok(message) => self.dispatch(dispatch, message).await,
            Err(error) => {
                self.observer.malformed_payload(dispatch, &error);
                self.finish(dispatch, DispatchOutcomeKind::DiscardedMalformed, Vec::new())
            }
        }
    }

    /// Dispatches an already decoded message.
    pub async fn handle(&self, message: InboundMessage) -> DispatchOutcome {
        self.dispatch(DispatchId::new(), message).await
    }

    async fn dispatch(&self, dispatch: DispatchId, message: InboundMessage) -> DispatchOutcome {
        if message.is_self_originated() {
            self.observer.self_message_ignored(dispatch);
            return self.finish(dispatch, DispatchOutcomeKind::IgnoredSelfMessage, Vec::new());
        }

        let sender = message.sender();
        let invocation = message.invocation();
        let arguments = invocation.arguments();
        let mut responses = Vec::new();

        let Some(entry) = self.registry.resolve(invocation.command(), sender) else {
            self.observer
                .command_not_found(dispatch, sender, invocation.command());
            let listing = render_help(&self.registry, None);
            self.respond(dispatch, sender, listing, &mut responses).await;
            let kind = DispatchOutcomeKind::CommandNotFound {
                command: invocation.command().to_owned(),
            };
            return self.finish(dispatch, kind, responses);
        };

        if !entry.signature().accepts(arguments) {
            self.observer
                .arity_mismatch(dispatch, entry.name(), arguments.len());
            self.respond(dispatch, sender, ARITY_FAILURE_NOTICE.to_owned(), &mut responses)
                .await;
            let targeted = render_help(&self.registry, Some(entry.name().as_str()));
            self.respond(dispatch, sender, targeted, &mut responses).await;
            let kind = DispatchOutcomeKind::ArityMismatch {
                command: entry.name().to_string(),
                supplied: arguments.len(),
            };
            return self.finish(dispatch, kind, responses);
        }

        self.observer.command_invoked(dispatch, sender, entry.name());
        let command = entry.name().to_string();
        let kind = match self.invoke(entry, arguments) {
            Ok(text) => {
                self.respond(dispatch, sender, text, &mut responses).await;
                DispatchOutcomeKind::Completed { command }
            }
            Err(error) => {
                self.observer.handler_failed(dispatch, entry.name(), &error);
                let report = format!("{HANDLER_FAILURE_PREFIX}\n{error}");
                self.respond(dispatch, sender, report, &mut responses).await;
                DispatchOutcomeKind::HandlerFailed { command }
            }
        };
        self.finish(dispatch, kind, responses)
    }

    fn invoke(&self, entry: &CommandEntry, arguments: &[String]) -> Result<String, HandlerError> {
        match entry.handler() {
            CommandHandler::Help => {
                help::help(&self.registry, arguments.first().map(String::as_str))
                    .map_err(|error| HandlerError::from_error(&error))
            }
            CommandHandler::Custom(handler) => catch_unwind(AssertUnwindSafe(|| handler(arguments)))
                .unwrap_or_else(|payload| Err(HandlerError::from_panic(&*payload))),
        }
    }

    async fn respond(
        &self,
        dispatch: DispatchId,
        recipient: &CallerId,
        text: String,
        responses: &mut Vec<String>,
    ) {
        match self.delivery.send(recipient, &text).await {
            Ok(()) => self.observer.response_sent(dispatch, recipient, &text),
            Err(error) => self.observer.delivery_failed(dispatch, recipient, &error),
        }
        responses.push(text);
    }

    fn finish(
        &self,
        dispatch: DispatchId,
        kind: DispatchOutcomeKind,
        responses: Vec<String>,
    ) -> DispatchOutcome {
        DispatchOutcome::new(dispatch, kind, responses, &*self.clock)
    }
}

fn render_help(registry: &CommandRegistry, command: Option<&str>) -> String {
    help::help(registry, command)
        .unwrap_or_else(|error| format!("{HANDLER_FAILURE_PREFIX}\n{error}"))
}
