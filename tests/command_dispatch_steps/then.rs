//! Then steps for command dispatch BDD scenarios.

use rstest_bdd_macros::then;
use stateless_rtm_bot::command::domain::RegistrationError;

use super::world::DispatchWorld;

#[then(r#""{recipient}" receives {count:usize} replies"#)]
fn recipient_receives_count(
    world: &DispatchWorld,
    recipient: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let replies = world.replies_to(&recipient)?;
    if replies.len() != count {
        return Err(eyre::eyre!(
            "expected {count} replies to {recipient}, found {replies:?}"
        ));
    }
    Ok(())
}

fn nth_reply(world: &DispatchWorld, recipient: &str, index: usize) -> Result<String, eyre::Report> {
    let replies = world.replies_to(recipient)?;
    index
        .checked_sub(1)
        .and_then(|position| replies.get(position).cloned())
        .ok_or_else(|| eyre::eyre!("no reply {index} to {recipient} in {replies:?}"))
}

#[then(r#"reply {index:usize} to "{recipient}" is "{text}""#)]
fn reply_is(
    world: &DispatchWorld,
    index: usize,
    recipient: String,
    text: String,
) -> Result<(), eyre::Report> {
    let reply = nth_reply(world, &recipient, index)?;
    if reply != text {
        return Err(eyre::eyre!("expected reply {index} to be '{text}', got '{reply}'"));
    }
    Ok(())
}

#[then(r#"reply {index:usize} to "{recipient}" starts with "{prefix}""#)]
fn reply_starts_with(
    world: &DispatchWorld,
    index: usize,
    recipient: String,
    prefix: String,
) -> Result<(), eyre::Report> {
    let reply = nth_reply(world, &recipient, index)?;
    if !reply.starts_with(&prefix) {
        return Err(eyre::eyre!("expected reply {index} to start with '{prefix}', got '{reply}'"));
    }
    Ok(())
}

#[then("no replies are delivered")]
fn no_replies_delivered(world: &DispatchWorld) -> Result<(), eyre::Report> {
    let delivered = world
        .delivery
        .delivered()
        .map_err(|err| eyre::eyre!("delivery state unreadable: {err}"))?;
    if !delivered.is_empty() {
        return Err(eyre::eyre!("expected no replies, found {delivered:?}"));
    }
    Ok(())
}

#[then(r#"the outcome is "{kind}""#)]
fn outcome_is(world: &DispatchWorld, kind: String) -> Result<(), eyre::Report> {
    let outcome = world
        .last_outcome
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no dispatch has run in this scenario"))?;
    let encoded = serde_json::to_value(outcome.kind())?;
    let actual = encoded.get("kind").and_then(|value| value.as_str());
    if actual != Some(kind.as_str()) {
        return Err(eyre::eyre!("expected outcome '{kind}', got {encoded}"));
    }
    Ok(())
}

#[then(r#"registration fails because "{name}" is variadic"#)]
fn registration_fails_variadic(world: &DispatchWorld, name: String) -> Result<(), eyre::Report> {
    let error = world
        .last_registration_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected registration to fail"))?;
    if !matches!(
        error,
        RegistrationError::VariadicParameter { command, .. } if *command == name
    ) {
        return Err(eyre::eyre!("expected a variadic parameter error, got {error:?}"));
    }
    if world.registry.find(&name).is_some() {
        return Err(eyre::eyre!("'{name}' should not have been registered"));
    }
    Ok(())
}
