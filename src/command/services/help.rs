//! Help text rendering.

use minijinja::{Environment, context};
use thiserror::Error;

use super::CommandRegistry;

/// Instructional line heading the full command listing.
pub const HELP_PREAMBLE: &str = "The following are the commands recognized by this bot. \
For more information on any commands, type \"help <command>\"";

const LISTING_TEMPLATE: &str = "{{ preamble }}\n\
*Normal Commands*\n{% for name in normal %}\n- {{ name }}{% endfor %}\n\n\
*Admin Commands*\n{% for name in admin %}\n- {{ name }}{% endfor %}";

/// Help rendering failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("help rendering failed: {0}")]
pub struct HelpError(pub String);

/// Renders help for `command`, or the full listing when `command` is `None`
/// or unknown in both tiers.
///
/// # Errors
///
/// Returns [`HelpError`] when the listing template fails to render.
pub fn help(registry: &CommandRegistry, command: Option<&str>) -> Result<String, HelpError> {
    match command.and_then(|name| registry.find(name)) {
        Some(entry) => Ok(format!("{}: {}", entry.name(), entry.help_text())),
        None => listing(registry),
    }
}

/// Renders the full listing: preamble, normal commands, then admin
/// commands, each tier sorted by name.
///
/// # Errors
///
/// Returns [`HelpError`] when the listing template fails to render.
pub fn listing(registry: &CommandRegistry) -> Result<String, HelpError> {
    let environment = Environment::new();
    environment
        .render_str(
            LISTING_TEMPLATE,
            context! {
                preamble => HELP_PREAMBLE,
                normal => registry.normal_names(),
                admin => registry.admin_names(),
            },
        )
        .map_err(|error| HelpError(error.to_string()))
}
