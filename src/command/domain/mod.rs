//! Command dispatch domain model.

mod entry;
mod error;
mod inbound;
mod name;
mod outcome;
mod signature;

pub use entry::{CommandEntry, CommandHandler, CommandRegistration, CommandTier, HandlerFn};
pub use error::{HandlerError, PayloadError, RegistrationError};
pub use inbound::{CallerId, CommandInvocation, InboundMessage, SELF_ORIGINATED_SUBTYPE};
pub use name::CommandName;
pub use outcome::{DispatchId, DispatchOutcome, DispatchOutcomeKind};
pub use signature::{CommandSignature, ParameterKind, ParameterSpec};
