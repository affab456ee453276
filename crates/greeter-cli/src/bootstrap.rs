//! Composition root.
//!
//! The only module that names concrete adapters. It wires
//! infrastructure → application → presentation and runs the command.
//!
//! ```text
//! AppConfig ──► StreamWriter (stdout | stderr | file)
//!                    │  Box<dyn MessageWriter>
//!                    ▼
//!               GreetUseCase ──► commands::greet::execute(&dyn GreetPort)
//! ```

use tracing::{debug, instrument};

use greeter_adapters::StreamWriter;
use greeter_core::application::{CancellationToken, GreetUseCase, MessageWriter};

use crate::{
    cli::GreetArgs,
    commands,
    config::{AppConfig, OutputTarget},
    error::{CliError, CliResult},
};

/// Wire everything for one invocation and run the greet command.
#[instrument(skip_all)]
pub fn run(args: GreetArgs, config: AppConfig) -> CliResult<()> {
    let config = config.with_output_override(args.output);

    let writer = build_writer(&config)?;
    let use_case = GreetUseCase::new(writer);

    // Nothing cancels a one-shot CLI run yet; the token is still threaded
    // through so adapters honour it.
    let cancel = CancellationToken::new();

    commands::greet::execute(&args.name, &use_case, &cancel)
}

/// Select the writer adapter for the configured target.
pub fn build_writer(config: &AppConfig) -> CliResult<Box<dyn MessageWriter>> {
    debug!(output_target = ?config.output.target, "Selecting output adapter");

    match config.output.target {
        OutputTarget::Stdout => Ok(Box::new(StreamWriter::stdout())),
        OutputTarget::Stderr => Ok(Box::new(StreamWriter::stderr())),
        OutputTarget::File => {
            let path = config.output.file.as_ref().ok_or_else(|| {
                CliError::config("output.target is \"file\" but output.file is not set")
            })?;
            Ok(Box::new(StreamWriter::append_to(path.clone())))
        }
    }
}
