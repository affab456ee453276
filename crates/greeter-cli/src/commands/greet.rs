//! Implementation of the greet command.

use tracing::instrument;

use greeter_core::application::{CancellationToken, GreetCommand, GreetPort};

use crate::error::{CliError, CliResult};

/// Build the command DTO from the raw name and run it through `use_case`.
///
/// Success output has already been written by the use case's writer; this
/// handler only turns a failed result into a [`CliError`].
#[instrument(skip_all)]
pub fn execute(name: &str, use_case: &dyn GreetPort, cancel: &CancellationToken) -> CliResult<()> {
    let cmd = GreetCommand::new(name);
    use_case.execute(&cmd, cancel).map_err(CliError::Greet)
}
