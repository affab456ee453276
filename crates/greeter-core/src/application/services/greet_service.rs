//! Greet use case - the application orchestrator.
//!
//! This service coordinates the greeting workflow:
//! 1. Validate the name (domain `Person`)
//! 2. Build the greeting message
//! 3. Hand it to the injected writer
//!
//! It implements the driving port (incoming) and uses the driven port
//! (outgoing). It performs no I/O of its own.

use tracing::{debug, info, instrument};

use crate::{
    application::{
        CancellationToken, GreetCommand,
        error::DomainResult,
        ports::{GreetPort, MessageWriter},
    },
    domain::Person,
};

/// Greeting use case.
pub struct GreetUseCase {
    writer: Box<dyn MessageWriter>,
}

impl GreetUseCase {
    /// Create a new use case writing through `writer`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use greeter_core::prelude::*;
    ///
    /// let use_case = GreetUseCase::new(Box::new(
    ///     |_message: &str, _cancel: &CancellationToken| -> DomainResult<()> { Ok(()) },
    /// ));
    /// # let _ = use_case;
    /// ```
    pub fn new(writer: Box<dyn MessageWriter>) -> Self {
        Self { writer }
    }

    /// Run the use case.
    ///
    /// A validation error is returned untouched and the writer is not
    /// called. Otherwise the writer's result is returned untouched.
    #[instrument(skip_all, fields(name_chars = cmd.name().chars().count()))]
    pub fn execute(&self, cmd: &GreetCommand, cancel: &CancellationToken) -> DomainResult<()> {
        debug!("Greeting requested");

        let person = Person::create(cmd.name()).inspect_err(|e| {
            info!(kind = %e.kind, "Name rejected: {e}");
        })?;

        let message = person.greeting_message();

        self.writer.write(&message, cancel)?;

        info!("Greeting written");
        Ok(())
    }
}

impl GreetPort for GreetUseCase {
    fn execute(&self, cmd: &GreetCommand, cancel: &CancellationToken) -> DomainResult<()> {
        GreetUseCase::execute(self, cmd, cancel)
    }
}
