//! # greeter
//!
//! Greets a person by name through a hexagonal pipeline.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap renders `--help` / `--version` and usage errors).
//! 2. Initialise the tracing subscriber and route panics through it.
//! 3. Load configuration (file + env + defaults).
//! 4. Hand over to the composition root in [`bootstrap`].
//! 5. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                            |
//! |------|------------------------------------|
//! |  0   | Success                            |
//! |  1   | Internal / infrastructure error    |
//! |  2   | Invalid name or invalid arguments  |
//! |  4   | Configuration error                |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};

use crate::{
    cli::{Cli, ErrorFormat},
    config::AppConfig,
    error::{CliError, IntoCli},
    logging::{init_logging, install_panic_hook},
};

mod bootstrap;
mod cli;
mod commands;
mod config;
mod error;
mod logging;

fn main() -> ExitCode {
    // Load .env before anything else so GREETER_* and RUST_LOG apply.
    // A missing .env is not an error.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version land here too, with exit code 0.
            let _ = e.print();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    let reporter = ErrorReporter {
        format: cli.global.error_format,
        no_color: cli.global.no_color,
        verbose: cli.global.verbose > 0,
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        return reporter.report(e);
    }
    install_panic_hook();

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_deref())
        .with_cli_context(|| "failed to load configuration")
    {
        Ok(cfg) => cfg,
        Err(e) => return reporter.report(e),
    };

    let reporter = ErrorReporter {
        no_color: reporter.no_color || config.output.no_color,
        ..reporter
    };

    // ── 4. Wire + run, 5. Error handling ─────────────────────────────────
    match bootstrap::run(cli.greet, config) {
        Ok(()) => {
            info!("greeter completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => reporter.report(e),
    }
}

/// Renders a `CliError` on stderr and picks the exit code.
///
/// This is the single place where structured errors become human-readable
/// output and OS exit codes.
#[derive(Debug, Clone, Copy)]
struct ErrorReporter {
    format: ErrorFormat,
    no_color: bool,
    verbose: bool,
}

impl ErrorReporter {
    fn report(&self, err: CliError) -> ExitCode {
        err.log();
        eprint!("{}", self.render(&err, std::io::stderr().is_terminal()));
        ExitCode::from(err.exit_code())
    }

    fn render(&self, err: &CliError, stderr_is_tty: bool) -> String {
        match self.resolve(stderr_is_tty) {
            ErrorFormat::Json => format!("{}\n", err.format_json()),
            ErrorFormat::Human => err.format_colored(self.verbose),
            ErrorFormat::Plain | ErrorFormat::Auto => err.format_plain(self.verbose),
        }
    }

    /// Collapse `Auto` and honour `--no-color`.
    fn resolve(&self, stderr_is_tty: bool) -> ErrorFormat {
        match self.format {
            ErrorFormat::Json => ErrorFormat::Json,
            _ if self.no_color => ErrorFormat::Plain,
            ErrorFormat::Auto if stderr_is_tty => ErrorFormat::Human,
            ErrorFormat::Auto => ErrorFormat::Plain,
            other => other,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
