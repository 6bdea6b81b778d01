//! Shared world state for command dispatch BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use stateless_rtm_bot::command::{
    adapters::{InMemoryDelivery, TracingObserver},
    domain::{
        CallerId, CommandRegistration, DispatchOutcome, HandlerError, ParameterSpec,
        RegistrationError,
    },
    services::{CommandRegistry, Dispatcher},
};

/// Dispatcher type used by the BDD world.
pub type TestDispatcher = Dispatcher<InMemoryDelivery, TracingObserver, DefaultClock>;

/// Scenario world for command dispatch behaviour tests.
pub struct DispatchWorld {
    /// Registry being populated before the first message.
    pub registry: CommandRegistry,
    /// Delivery adapter capturing replies.
    pub delivery: Arc<InMemoryDelivery>,
    /// Dispatcher, built from the registry when the first message arrives.
    pub dispatcher: Option<TestDispatcher>,
    /// Outcome of the most recent dispatch.
    pub last_outcome: Option<DispatchOutcome>,
    /// Error from the most recent registration attempt.
    pub last_registration_error: Option<RegistrationError>,
}

impl DispatchWorld {
    /// Creates a world with an empty registry and accepting delivery.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: CommandRegistry::default(),
            delivery: Arc::new(InMemoryDelivery::new()),
            dispatcher: None,
            last_outcome: None,
            last_registration_error: None,
        }
    }

    /// Returns the dispatcher, freezing the registry on first use.
    pub fn dispatcher(&mut self) -> &TestDispatcher {
        let registry = &mut self.registry;
        let delivery = &self.delivery;
        self.dispatcher.get_or_insert_with(|| {
            Dispatcher::new(
                Arc::new(std::mem::take(registry)),
                Arc::clone(delivery),
                Arc::new(TracingObserver),
                Arc::new(DefaultClock),
            )
        })
    }

    /// Returns the replies delivered to `recipient`.
    pub fn replies_to(&self, recipient: &str) -> Result<Vec<String>, eyre::Report> {
        self.delivery
            .texts_for(&CallerId::new(recipient))
            .map_err(|err| eyre::eyre!("delivery state unreadable: {err}"))
    }
}

impl Default for DispatchWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DispatchWorld {
    DispatchWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Commands registered by the scenario background.
pub fn sample_commands() -> Vec<CommandRegistration> {
    vec![
        CommandRegistration::new("add_two", "adds two numbers", |args| {
            let total = args
                .iter()
                .try_fold(0_i64, |sum, arg| -> Result<i64, HandlerError> {
                    sum.checked_add(arg.parse::<i64>()?)
                        .ok_or_else(|| HandlerError::new("sum does not fit in a 64-bit integer"))
                })?;
            Ok(total.to_string())
        })
        .with_parameter(ParameterSpec::required("addend1"))
        .with_parameter(ParameterSpec::required("addend2")),
        CommandRegistration::new(
            "function_with_default_param",
            "returns what is passed in, or the word \"default\"",
            |args| Ok(args.first().map_or("default", String::as_str).to_owned()),
        )
        .with_parameter(ParameterSpec::optional("param")),
        CommandRegistration::new("admin_only", "repeats parameter", |args| Ok(args.join(" ")))
            .with_parameter(ParameterSpec::required("x"))
            .admin_only(),
    ]
}
