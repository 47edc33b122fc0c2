//! kiln CLI - build and launch native or browser C++ programs.
//!
//! This crate provides the command-line interface over `kiln-core`: it
//! merges configuration from `kiln.config.json`, the environment and flags,
//! turns it into a `BuildSetup`, and drives a `BuildRunner` on the real host.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - `run`, `build`, `command`, `open`, `init` and `schema`
//! - [`config`] - layered configuration with figment
//! - [`error`] - error types rendered through miette
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status messages and the compile spinner
//!
//! # Example
//!
//! ```rust,no_run
//! use kiln_cli::{cli::BuildOptions, commands, logger};
//!
//! fn main() -> kiln_cli::Result<()> {
//!     logger::init_logger(false, false, false);
//!     commands::build_execute(BuildOptions {
//!         sources: vec!["main.cpp".into()],
//!         ..BuildOptions::default()
//!     })
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result};
