//! Tracing subscriber and panic hook for the `greeter` binary.
//!
//! The library crates only emit events; installing a subscriber is this
//! module's job. Logs always go to stderr because stdout carries the
//! greeting.
//!
//! | Flag(s)   | Level |
//! |-----------|-------|
//! | (none)    | WARN  |
//! | `-v`      | INFO  |
//! | `-vv`     | DEBUG |
//! | `-vvv`    | TRACE |
//! | `--quiet` | ERROR |
//!
//! A valid `RUST_LOG` replaces the table entirely.

use std::{
    any::Any,
    io::IsTerminal as _,
    panic::{self, Location, PanicHookInfo},
};

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::{cli::GlobalArgs, error::CliError};

/// Crates whose events pass the default filter.
const GREETER_CRATES: [&str; 3] = [env!("CARGO_CRATE_NAME"), "greeter_core", "greeter_adapters"];

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(args: &GlobalArgs) -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter(derive_level(args)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| CliError::Logging {
            message: "failed to initialise tracing".into(),
            source: Box::new(e),
        })
}

/// Route panics through tracing instead of the default stderr report.
///
/// Writer adapters convert panics into errors the user already sees, so the
/// raw report (thread name, source location, backtrace hint) is only
/// shown at DEBUG.
pub fn install_panic_hook() {
    panic::set_hook(Box::new(|info: &PanicHookInfo<'_>| {
        tracing::debug!("{}", describe_panic(info.payload(), info.location()));
    }));
}

fn describe_panic(payload: &(dyn Any + Send), location: Option<&Location<'_>>) -> String {
    let message = if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic"
    };

    match location {
        Some(at) => format!("panic at {}:{}: {message}", at.file(), at.line()),
        None => format!("panic: {message}"),
    }
}

fn default_filter(level: LevelFilter) -> EnvFilter {
    let directives = GREETER_CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",");
    EnvFilter::builder().parse_lossy(directives)
}

fn derive_level(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ErrorFormat;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            error_format: ErrorFormat::Auto,
        }
    }

    #[test]
    fn level_steps() {
        assert_eq!(derive_level(&args_with(0, false)), LevelFilter::WARN);
        assert_eq!(derive_level(&args_with(1, false)), LevelFilter::INFO);
        assert_eq!(derive_level(&args_with(2, false)), LevelFilter::DEBUG);
        assert_eq!(derive_level(&args_with(3, false)), LevelFilter::TRACE);
        assert_eq!(derive_level(&args_with(10, false)), LevelFilter::TRACE);
    }

    #[test]
    fn quiet_overrides_verbose() {
        assert_eq!(derive_level(&args_with(0, true)), LevelFilter::ERROR);
        assert_eq!(derive_level(&args_with(3, true)), LevelFilter::ERROR);
    }

    #[test]
    fn default_filter_covers_every_layer() {
        let filter = default_filter(LevelFilter::DEBUG).to_string().to_lowercase();
        assert!(filter.contains("greeter=debug"));
        assert!(filter.contains("greeter_core=debug"));
        assert!(filter.contains("greeter_adapters=debug"));
    }

    #[test]
    fn second_init_is_a_logging_error() {
        let args = args_with(0, true);
        let _ = init_logging(&args);

        let err = init_logging(&args).unwrap_err();
        assert!(matches!(err, CliError::Logging { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn panic_report_names_payload_and_location() {
        let here = Location::caller();
        let report = describe_panic(&"secret-internal-detail", Some(here));
        assert!(report.contains("secret-internal-detail"));
        assert!(report.contains("logging.rs"));

        assert_eq!(describe_panic(&String::from("owned"), None), "panic: owned");
        assert_eq!(describe_panic(&42_u8, None), "panic: unknown panic");
    }
}
