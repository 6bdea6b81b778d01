//! Application services for command dispatch.
//!
//! The registry holds commands, the help module renders them, and the
//! dispatcher drives one message through the whole cycle.

mod dispatcher;
pub mod help;
mod registry;

pub use dispatcher::{ARITY_FAILURE_NOTICE, Dispatcher, HANDLER_FAILURE_PREFIX};
pub use help::{HELP_PREAMBLE, HelpError};
pub use registry::{CommandRegistry, HELP_COMMAND, HELP_COMMAND_TEXT, RegistryResult};
