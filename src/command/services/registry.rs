//! Two-tier command registry.
//!
//! Normal and admin commands live in separate maps. Callers see the normal
//! map, and the configured admin additionally falls back to the admin map;
//! no merged copy is ever built.

use std::collections::BTreeMap;

use crate::command::domain::{
    CallerId, CommandEntry, CommandHandler, CommandName, CommandRegistration, CommandSignature,
    CommandTier, ParameterSpec, RegistrationError,
};

/// Name of the built-in help command.
pub const HELP_COMMAND: &str = "help";

/// Help text of the built-in help command.
pub const HELP_COMMAND_TEXT: &str = "Prints help dialogue for a command";

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistrationError>;

/// Command registry populated at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    normal: BTreeMap<CommandName, CommandEntry>,
    admin: BTreeMap<CommandName, CommandEntry>,
    admin_identity: Option<CallerId>,
}

impl CommandRegistry {
    /// Creates a registry holding only the built-in `help` command.
    ///
    /// `admin_identity` is the single caller allowed to see admin commands;
    /// with `None` nobody is.
    #[must_use]
    pub fn new(admin_identity: Option<CallerId>) -> Self {
        let mut normal = BTreeMap::new();
        let help_name = CommandName::builtin(HELP_COMMAND);
        normal.insert(
            help_name.clone(),
            CommandEntry::new(
                help_name,
                HELP_COMMAND_TEXT.to_owned(),
                CommandTier::Normal,
                CommandSignature::new().with_parameter(ParameterSpec::optional("command")),
                CommandHandler::Help,
            ),
        );
        Self {
            normal,
            admin: BTreeMap::new(),
            admin_identity,
        }
    }

    /// Adds a command to the tier named by the registration.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError`] when the name is empty or malformed,
    /// already present in either tier, or the signature cannot be dispatched.
    /// The registry is unchanged on error.
    pub fn register(&mut self, registration: CommandRegistration) -> RegistryResult<&CommandEntry> {
        let (raw_name, help_text, tier, signature, handler) = registration.into_parts();
        let name = CommandName::new(raw_name)?;
        signature.validate(name.as_str())?;

        if self.normal.contains_key(&name) || self.admin.contains_key(&name) {
            return Err(RegistrationError::DuplicateName(name.to_string()));
        }

        let entry = CommandEntry::new(name.clone(), help_text, tier, signature, handler);
        let tier_map = match tier {
            CommandTier::Normal => &mut self.normal,
            CommandTier::Admin => &mut self.admin,
        };
        Ok(tier_map.entry(name).or_insert(entry))
    }

    /// Looks up a command as seen by `caller`.
    ///
    /// Returns `None` when the name is unknown or only exists in the admin
    /// tier and `caller` is not the admin.
    #[must_use]
    pub fn resolve(&self, name: &str, caller: &CallerId) -> Option<&CommandEntry> {
        self.normal.get(name).or_else(|| {
            if self.is_admin(caller) {
                self.admin.get(name)
            } else {
                None
            }
        })
    }

    /// Looks up a command in either tier, regardless of caller.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&CommandEntry> {
        self.normal.get(name).or_else(|| self.admin.get(name))
    }

    /// Returns `true` when `caller` is the configured admin identity.
    #[must_use]
    pub fn is_admin(&self, caller: &CallerId) -> bool {
        self.admin_identity.as_ref() == Some(caller)
    }

    /// Returns the configured admin identity.
    #[must_use]
    pub const fn admin_identity(&self) -> Option<&CallerId> {
        self.admin_identity.as_ref()
    }

    /// Returns normal-tier command names in lexicographic order.
    #[must_use]
    pub fn normal_names(&self) -> Vec<&str> {
        self.normal.keys().map(CommandName::as_str).collect()
    }

    /// Returns admin-tier command names in lexicographic order.
    #[must_use]
    pub fn admin_names(&self) -> Vec<&str> {
        self.admin.keys().map(CommandName::as_str).collect()
    }

    /// Number of registered commands across both tiers, `help` included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.normal.len() + self.admin.len()
    }

    /// Always `false`: the built-in `help` command is present from construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new(None)
    }
}
