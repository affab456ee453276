//! Driving (input) ports - implemented by application services.

use crate::application::{CancellationToken, GreetCommand, error::DomainResult};

/// The greet use case as seen by driving adapters (CLI, future HTTP/GUI).
///
/// Presentation code holds a `&dyn GreetPort` and never names
/// `GreetUseCase` directly.
pub trait GreetPort {
    fn execute(&self, cmd: &GreetCommand, cancel: &CancellationToken) -> DomainResult<()>;
}
