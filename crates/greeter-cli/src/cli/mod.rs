//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser};

pub mod global;
pub use global::{ErrorFormat, GlobalArgs};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "greeter",
    bin_name = "greeter",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Greet a person by name",
    long_about = "Validates a name and writes \"Hello, <name>!\" to the configured \
                  output (stdout by default).",
    after_help = "EXAMPLES:\n\
        \x20 greeter Alice\n\
        \x20 greeter \"José García\"\n\
        \x20 greeter Bob --output greetings.txt\n\
        \x20 GREETER_OUTPUT__TARGET=stderr greeter Carol",
)]
pub struct Cli {
    /// Logging, configuration, and error-report flags.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// What to greet and where to write it.
    #[command(flatten)]
    pub greet: GreetArgs,
}

// ── greet ─────────────────────────────────────────────────────────────────────

/// Arguments for the greeting itself.
#[derive(Debug, Args)]
pub struct GreetArgs {
    /// Name of the person to greet (1 to 100 characters).
    #[arg(value_name = "NAME", help = "Name of the person to greet")]
    pub name: String,

    /// Append the greeting to a file instead of the configured target.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Append the greeting to FILE"
    )]
    pub output: Option<PathBuf>,
}
