//! Unit tests for the two-tier command registry.

use rstest::rstest;

use super::fixtures::{ADMIN, add_two, admin, admin_only, registry, user};
use crate::command::domain::{
    CallerId, CommandHandler, CommandRegistration, CommandTier, ParameterSpec, RegistrationError,
};
use crate::command::services::{CommandRegistry, HELP_COMMAND, HELP_COMMAND_TEXT};

#[rstest]
fn new_registry_contains_only_help() {
    let registry = CommandRegistry::new(None);

    let help = registry
        .resolve(HELP_COMMAND, &user())
        .expect("help should always be registered");

    assert_eq!(help.help_text(), HELP_COMMAND_TEXT);
    assert_eq!(help.tier(), CommandTier::Normal);
    assert!(matches!(help.handler(), CommandHandler::Help));
    assert_eq!(registry.len(), 1);
    assert!(registry.admin_names().is_empty());
}

#[rstest]
fn registered_command_resolves_with_its_help_text_and_handler(registry: CommandRegistry) {
    let entry = registry
        .resolve("add_two", &user())
        .expect("normal command should resolve for any caller");

    assert_eq!(entry.help_text(), "adds two numbers");
    assert_eq!(entry.signature().required_count(), 2);
    let CommandHandler::Custom(handler) = entry.handler() else {
        panic!("expected a custom handler");
    };
    let args = vec!["2".to_owned(), "3".to_owned()];
    assert_eq!(
        handler(args.as_slice()).expect("handler should succeed"),
        "5"
    );
}

#[rstest]
fn admin_commands_resolve_only_for_admin(registry: CommandRegistry) {
    assert!(registry.resolve("admin_only", &user()).is_none());

    let entry = registry
        .resolve("admin_only", &admin())
        .expect("admin should see admin commands");
    assert_eq!(entry.tier(), CommandTier::Admin);
    assert_eq!(entry.help_text(), "repeats parameter");
}

#[rstest]
fn admin_sees_normal_commands_too(registry: CommandRegistry) {
    assert!(registry.resolve("add_two", &admin()).is_some());
    assert!(registry.resolve(HELP_COMMAND, &admin()).is_some());
}

#[rstest]
fn without_admin_identity_nobody_sees_admin_commands() {
    let mut registry = CommandRegistry::new(None);
    registry
        .register(admin_only())
        .expect("admin command should register");

    assert!(registry.resolve("admin_only", &CallerId::new(ADMIN)).is_none());
    assert!(registry.resolve("admin_only", &CallerId::new("")).is_none());
    assert!(registry.find("admin_only").is_some());
}

#[rstest]
fn lookup_is_case_sensitive(registry: CommandRegistry) {
    assert!(registry.resolve("ADD_TWO", &user()).is_none());
}

#[rstest]
#[case(CommandTier::Normal)]
#[case(CommandTier::Admin)]
fn duplicate_name_is_rejected_across_tiers(registry: CommandRegistry, #[case] tier: CommandTier) {
    let mut registry = registry;
    let before_normal = registry.normal_names().len();
    let before_admin = registry.admin_names().len();

    let mut duplicate = CommandRegistration::new("admin_only", "again", |_| Ok(String::new()));
    if tier == CommandTier::Admin {
        duplicate = duplicate.admin_only();
    }
    let error = registry
        .register(duplicate)
        .expect_err("duplicate name should be rejected");
    assert_eq!(error, RegistrationError::DuplicateName("admin_only".to_owned()));

    let error = registry
        .register(add_two().admin_only())
        .expect_err("normal name reused as admin should be rejected");
    assert_eq!(error, RegistrationError::DuplicateName("add_two".to_owned()));

    assert_eq!(registry.normal_names().len(), before_normal);
    assert_eq!(registry.admin_names().len(), before_admin);
    assert_eq!(
        registry
            .find("admin_only")
            .map(|entry| entry.help_text().to_owned()),
        Some("repeats parameter".to_owned())
    );
}

#[rstest]
fn help_name_cannot_be_reregistered() {
    let mut registry = CommandRegistry::new(None);

    let error = registry
        .register(CommandRegistration::new(HELP_COMMAND, "custom", |_| Ok(String::new())))
        .expect_err("help is built in");

    assert_eq!(error, RegistrationError::DuplicateName(HELP_COMMAND.to_owned()));
}

#[rstest]
#[case("", RegistrationError::EmptyName)]
#[case("   ", RegistrationError::EmptyName)]
#[case("two words", RegistrationError::InvalidName("two words".to_owned()))]
fn malformed_names_are_rejected(#[case] name: &str, #[case] expected: RegistrationError) {
    let mut registry = CommandRegistry::new(None);

    let error = registry
        .register(CommandRegistration::new(name, "bad", |_| Ok(String::new())))
        .expect_err("malformed name should be rejected");

    assert_eq!(error, expected);
    assert_eq!(registry.len(), 1);
}

#[rstest]
fn name_is_trimmed_before_registration() {
    let mut registry = CommandRegistry::new(None);

    registry
        .register(CommandRegistration::new("  ping ", "replies pong", |_| {
            Ok("pong".to_owned())
        }))
        .expect("padded name should register");

    assert!(registry.resolve("ping", &user()).is_some());
}

#[rstest]
fn variadic_handler_is_rejected_and_registry_unchanged() {
    let mut registry = CommandRegistry::new(None);

    let error = registry
        .register(
            CommandRegistration::new("spread", "takes anything", |args| Ok(args.join(",")))
                .with_parameter(ParameterSpec::variadic("rest")),
        )
        .expect_err("variadic handlers are unsupported");

    assert!(matches!(error, RegistrationError::VariadicParameter { .. }));
    assert!(registry.find("spread").is_none());
    assert_eq!(registry.len(), 1);
}

#[rstest]
#[case::required_after_optional(
    vec![ParameterSpec::optional("first"), ParameterSpec::required("second")]
)]
#[case::duplicate_parameter(vec![ParameterSpec::required("x"), ParameterSpec::optional("x")])]
fn unsupported_signature_is_rejected_and_registry_unchanged(
    registry: CommandRegistry,
    #[case] parameters: Vec<ParameterSpec>,
) {
    let mut registry = registry;
    let before_normal = registry.normal_names().len();
    let before_admin = registry.admin_names().len();
    let registration = parameters.into_iter().fold(
        CommandRegistration::new("unsupported", "cannot be dispatched", |_| Ok(String::new())),
        CommandRegistration::with_parameter,
    );

    let error = registry
        .register(registration)
        .expect_err("unsupported signature should be rejected");

    assert!(matches!(
        error,
        RegistrationError::RequiredAfterOptional { ref command, .. }
            | RegistrationError::DuplicateParameter { ref command, .. }
            if command == "unsupported"
    ));
    assert!(registry.find("unsupported").is_none());
    assert_eq!(registry.normal_names().len(), before_normal);
    assert_eq!(registry.admin_names().len(), before_admin);
}

#[rstest]
fn names_are_listed_in_lexicographic_order() {
    let mut registry = CommandRegistry::new(None);
    for name in ["zeta", "alpha", "Mid", "beta"] {
        registry
            .register(CommandRegistration::new(name, name, |_| Ok(String::new())))
            .expect("command should register");
    }

    assert_eq!(
        registry.normal_names(),
        vec!["Mid", "alpha", "beta", "help", "zeta"]
    );
}
