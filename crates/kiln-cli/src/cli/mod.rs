//! Command-line interface definition for kiln.
//!
//! # Command Structure
//!
//! - `kiln run` - compile and launch the artifact
//! - `kiln build` - compile only
//! - `kiln command` - print the compiler command line
//! - `kiln open` - launch an existing artifact
//! - `kiln init` - write a starter kiln.config.json
//! - `kiln schema` - print the config JSON schema

mod commands;
pub mod enums;
mod validation;

use clap::Parser;

pub use commands::{BuildOptions, Command, CommandArgs, InitArgs, OpenArgs};
pub use enums::*;
pub use validation::{parse_define, parse_opt_level};

/// kiln - build and launch native or browser C++ programs
#[derive(Parser, Debug)]
#[command(
    name = "kiln",
    version,
    about = "Build and launch native or browser C++ programs",
    long_about = "kiln compiles a C++ program with the right flags for the host platform,\n\
                  links the requested libraries (graphics, networking) and launches the\n\
                  result, serving browser builds over HTTP."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
