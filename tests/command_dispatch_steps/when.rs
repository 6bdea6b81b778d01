//! When steps for command dispatch BDD scenarios.

use rstest_bdd_macros::when;
use serde_json::json;
use stateless_rtm_bot::command::domain::{CommandRegistration, ParameterSpec};

use super::world::{DispatchWorld, run_async};

#[when(r#""{sender}" sends "{text}""#)]
fn sender_sends(world: &mut DispatchWorld, sender: String, text: String) {
    let payload = json!({"data": {"text": text, "user": sender}});
    let outcome = run_async(world.dispatcher().handle_payload(&payload));
    world.last_outcome = Some(outcome);
}

#[when(r#"the bot sees its own message "{text}""#)]
fn bot_sees_own_message(world: &mut DispatchWorld, text: String) {
    let payload = json!({"data": {"subtype": "bot_message", "text": text}});
    let outcome = run_async(world.dispatcher().handle_payload(&payload));
    world.last_outcome = Some(outcome);
}

#[when("a payload without a sender arrives")]
fn payload_without_sender(world: &mut DispatchWorld) {
    let payload = json!({"data": {"text": "add_two 1 2"}});
    let outcome = run_async(world.dispatcher().handle_payload(&payload));
    world.last_outcome = Some(outcome);
}

#[when(r#"a variadic command "{name}" is registered"#)]
fn variadic_command_registered(world: &mut DispatchWorld, name: String) {
    let registration = CommandRegistration::new(name, "takes anything", |args| Ok(args.join(" ")))
        .with_parameter(ParameterSpec::variadic("rest"));
    world.last_registration_error = world
        .registry
        .register(registration)
        .err();
}
