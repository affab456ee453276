//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied by [`AppConfig::with_output_override`])
//! 2. Environment variables (`GREETER_OUTPUT__TARGET=stderr`, ...)
//! 3. Config file (`--config FILE`, else the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where greetings go.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub target: OutputTarget,
    /// Required when `target = "file"`.
    pub file: Option<PathBuf>,
    pub no_color: bool,
}

/// Sink selected for the writer adapter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    #[default]
    Stdout,
    Stderr,
    File,
}

impl AppConfig {
    /// Load configuration from file and environment on top of defaults.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let file_source = match config_file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::from(Self::config_path()).required(false),
        };

        let settings = config::Config::builder()
            .add_source(file_source)
            .add_source(
                config::Environment::with_prefix("GREETER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("failed to read configuration")?;

        settings
            .try_deserialize()
            .context("invalid configuration values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.greeter.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "greeter", "greeter")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".greeter.toml"))
    }

    /// Apply the `--output FILE` flag, which always wins over file and env.
    pub fn with_output_override(mut self, file: Option<PathBuf>) -> Self {
        if let Some(file) = file {
            self.output.target = OutputTarget::File;
            self.output.file = Some(file);
        }
        self
    }
}
