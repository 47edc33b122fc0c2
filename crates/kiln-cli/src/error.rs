//! Error handling for the kiln CLI.
//!
//! `CliError` is the top-level error returned by commands. Core failures are
//! wrapped unchanged so `main` can attach a hint when rendering them with
//! miette; configuration problems carry their own hint text.
//!
//! # Example
//!
//! ```rust,no_run
//! use kiln_cli::error::{ConfigError, Result};
//! use std::path::Path;
//!
//! fn require_config(path: &Path) -> Result<()> {
//!     if !path.is_file() {
//!         return Err(ConfigError::NotFound(path.to_path_buf()).into());
//!     }
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;

use kiln_core::Error as CoreError;
use miette::Report;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (file not found, invalid values, etc.)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors from command synthesis or execution
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Source file passed to build or run does not exist
    #[error("Source file not found: {}\n\nHint: Check the 'sources' field in your config or the paths passed on the command line", .0.display())]
    SourceNotFound(PathBuf),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file passed with --config doesn't exist
    #[error("Config file not found: {}\n\nHint: Create a kiln.config.json file or fix the --config path", .0.display())]
    NotFound(PathBuf),

    /// Missing required configuration field
    #[error("Missing required field: {field}\n\nHint: {hint}")]
    MissingField {
        /// Name of the missing field
        field: String,
        /// Helpful hint for providing the field
        hint: String,
    },

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Convert a `CliError` into a miette report for display.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Core(e) => core_error_to_miette(e),
        other => miette::miette!("{}", other),
    }
}

/// Convert a core error into a miette report with a hint for the user.
pub fn core_error_to_miette(err: CoreError) -> Report {
    match core_hint(&err) {
        Some(hint) => miette::miette!(help = hint, "{}", err),
        None => miette::miette!("{}", err),
    }
}

fn core_hint(err: &CoreError) -> Option<&'static str> {
    match err {
        CoreError::UnsupportedPlatform { .. } => Some(
            "kiln builds on Windows and Linux hosts; `kiln command --host-os` previews another host",
        ),
        CoreError::UnsupportedDependency { .. } => {
            Some("networking has no browser build; use --target native")
        }
        CoreError::BuildFailed { .. } => Some("the compiler output above describes the failure"),
        CoreError::Launch { .. } => Some("make sure the shell and compiler are installed"),
        CoreError::InvalidOptimization(_) => Some("use one of 0, 1, 2, 3, s, z, g"),
        CoreError::Server(_) => Some("pick a free port with --port"),
        CoreError::Path { .. } | CoreError::Io(_) => None,
    }
}
