//! Declared handler signatures and argument-arity validation.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::RegistrationError;

/// How a declared parameter consumes argument tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    /// Must be supplied by the caller.
    Required,
    /// May be omitted; the handler supplies its own default.
    Optional,
    /// Accepts any number of trailing tokens. Rejected at registration.
    Variadic,
}

/// A single positional parameter of a command handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Parameter name, shown in diagnostics only.
    pub name: String,
    /// Parameter kind.
    pub kind: ParameterKind,
}

impl ParameterSpec {
    /// Creates a parameter specification.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Creates a required parameter.
    #[must_use]
    pub fn required(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::Required)
    }

    /// Creates a parameter with a handler-side default.
    #[must_use]
    pub fn optional(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::Optional)
    }

    /// Creates a variable-arity parameter.
    #[must_use]
    pub fn variadic(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::Variadic)
    }
}

/// Ordered positional parameters declared for a handler at registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSignature {
    parameters: Vec<ParameterSpec>,
}

impl CommandSignature {
    /// Creates an empty signature (a handler taking no arguments).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            parameters: Vec::new(),
        }
    }

    /// Appends a parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Returns the declared parameters in order.
    #[must_use]
    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    /// Number of parameters that have no default.
    #[must_use]
    pub fn required_count(&self) -> usize {
        self.parameters
            .iter()
            .filter(|parameter| parameter.kind == ParameterKind::Required)
            .count()
    }

    /// Total number of declared parameters.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.parameters.len()
    }

    /// Returns `true` when any parameter is variadic.
    #[must_use]
    pub fn is_variadic(&self) -> bool {
        self.parameters
            .iter()
            .any(|parameter| parameter.kind == ParameterKind::Variadic)
    }

    /// Checks a caller-supplied argument list against this signature.
    ///
    /// Accepts iff `required_count <= args.len() <= total_count`. Variadic
    /// signatures are never accepted.
    #[must_use]
    pub fn accepts<T>(&self, args: &[T]) -> bool {
        if self.is_variadic() {
            return false;
        }
        (self.required_count()..=self.total_count()).contains(&args.len())
    }

    /// Checks that the signature can be dispatched positionally.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError`] when a parameter is variadic, a required
    /// parameter follows an optional one, or a parameter name repeats.
    pub fn validate(&self, command: &str) -> Result<(), RegistrationError> {
        let mut names = HashSet::new();
        let mut seen_optional = false;

        for parameter in &self.parameters {
            if !names.insert(parameter.name.as_str()) {
                return Err(RegistrationError::DuplicateParameter {
                    command: command.to_owned(),
                    parameter: parameter.name.clone(),
                });
            }

            match parameter.kind {
                ParameterKind::Variadic => {
                    return Err(RegistrationError::VariadicParameter {
                        command: command.to_owned(),
                        parameter: parameter.name.clone(),
                    });
                }
                ParameterKind::Required if seen_optional => {
                    return Err(RegistrationError::RequiredAfterOptional {
                        command: command.to_owned(),
                        parameter: parameter.name.clone(),
                    });
                }
                ParameterKind::Required => {}
                ParameterKind::Optional => seen_optional = true,
            }
        }
        Ok(())
    }
}

impl FromIterator<ParameterSpec> for CommandSignature {
    fn from_iter<I: IntoIterator<Item = ParameterSpec>>(iter: I) -> Self {
        Self {
            parameters: iter.into_iter().collect(),
        }
    }
}
