//! Given steps for command dispatch BDD scenarios.

use std::sync::Arc;

use eyre::WrapErr;
use rstest_bdd_macros::given;
use stateless_rtm_bot::command::{
    adapters::InMemoryDelivery, domain::CallerId, services::CommandRegistry,
};

use super::world::{DispatchWorld, sample_commands};

#[given(r#"a bot whose admin is "{admin}""#)]
fn bot_with_admin(world: &mut DispatchWorld, admin: String) {
    world.registry = CommandRegistry::new(Some(CallerId::new(admin)));
}

#[given("the sample commands are registered")]
fn sample_commands_registered(world: &mut DispatchWorld) -> Result<(), eyre::Report> {
    for registration in sample_commands() {
        world
            .registry
            .register(registration)
            .wrap_err("register sample command")?;
    }
    Ok(())
}

#[given("replies cannot be delivered")]
fn replies_cannot_be_delivered(world: &mut DispatchWorld) -> Result<(), eyre::Report> {
    if world.dispatcher.is_some() {
        return Err(eyre::eyre!("delivery must be chosen before the first message"));
    }
    world.delivery = Arc::new(InMemoryDelivery::rejecting());
    Ok(())
}
