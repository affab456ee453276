//! Error handling for the greeter CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping
//! - Plain, coloured, and JSON renderings

use std::error::Error;

use owo_colors::OwoColorize;
use serde::Serialize;
use thiserror::Error;

use greeter_core::application::error::{ErrorInfo, ErrorKind};
use greeter_core::domain::MAX_NAME_LENGTH;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// The greet use case failed. Display is the core message verbatim.
    #[error("{0}")]
    Greet(#[from] ErrorInfo),

    /// A configuration file or environment value could not be used.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The tracing subscriber could not be installed.
    #[error("Logging error: {message}")]
    Logging {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl CliError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    ///
    /// Infrastructure failures get a generic hint only; the core message
    /// already says what happened.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Greet(info) => match info.kind {
                ErrorKind::Validation => vec![
                    "Please provide a valid name.".into(),
                    format!("Names must be 1 to {MAX_NAME_LENGTH} characters long"),
                ],
                ErrorKind::Infrastructure => vec!["A system error occurred.".into()],
            },

            Self::Config { .. } => vec![
                format!(
                    "Check your config file (default: {})",
                    crate::config::AppConfig::config_path().display()
                ),
                "Valid output targets: stdout, stderr, file".into(),
                "GREETER_* environment variables override the file".into(),
            ],

            Self::Logging { .. } => vec![
                "Another tracing subscriber is already installed".into(),
                "Run with --quiet to continue with minimal logging".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Greet(info) => match info.kind {
                ErrorKind::Validation => ErrorCategory::UserError,
                ErrorKind::Infrastructure => ErrorCategory::Internal,
            },
            Self::Config { .. } => ErrorCategory::Configuration,
            Self::Logging { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {} {}\n",
            "✗".red().bold(),
            "Error:".red().bold(),
            self.to_string().red()
        ));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        for suggestion in self.suggestions() {
            output.push_str(&format!("{}\n", suggestion.yellow()));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = format!("Error: {self}\n");

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        for s in self.suggestions() {
            out.push_str(&format!("{s}\n"));
        }

        out
    }

    /// Machine-readable report, one JSON object on one line.
    pub fn format_json(&self) -> String {
        let report = ErrorReport {
            category: self.category().as_str(),
            kind: match self {
                Self::Greet(info) => Some(info.kind),
                _ => None,
            },
            message: self.to_string(),
            suggestions: self.suggestions(),
            exit_code: self.exit_code(),
        };
        // Serializing plain strings and integers cannot fail.
        serde_json::to_string(&report).unwrap_or_else(|_| format!("{{\"message\":{:?}}}", report.message))
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::info!("User error: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

#[derive(Serialize)]
struct ErrorReport {
    category: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<ErrorKind>,
    message: String,
    suggestions: Vec<String>,
    exit_code: u8,
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

impl ErrorCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UserError => "user",
            Self::Configuration => "configuration",
            Self::Internal => "internal",
        }
    }
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for anyhow::Result<T> {
    /// Configuration loading is the only `anyhow` producer in the CLI.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::Config {
            message: format!("{}: {e:#}", f().into()),
            source: Some(e.into()),
        })
    }
}
