//! Command implementations for the kiln CLI.
//!
//! - [`run`] - compile and launch
//! - [`build`] - compile only
//! - [`command`] - print the compiler command line
//! - [`open`] - launch an existing artifact
//! - [`init`] - write a starter config
//! - [`schema`] - print the config schema
//!
//! Each command provides an `execute` function that takes the parsed
//! arguments and returns a Result.

pub mod build;
pub mod command;
pub mod init;
pub mod open;
pub mod run;
pub mod schema;
pub(crate) mod utils;

pub use build::execute as build_execute;
pub use command::execute as command_execute;
pub use init::execute as init_execute;
pub use open::execute as open_execute;
pub use run::execute as run_execute;
pub use schema::execute as schema_execute;
