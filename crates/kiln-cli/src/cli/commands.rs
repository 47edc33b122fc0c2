use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::*;
use crate::cli::validation::{parse_define, parse_opt_level};

/// Available kiln subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile the sources and launch the result
    ///
    /// Native builds run in the terminal; browser builds are served on
    /// localhost and opened in the default browser until Ctrl+C.
    Run(BuildOptions),

    /// Compile the sources without launching anything
    Build(BuildOptions),

    /// Print the compiler command line without running it
    ///
    /// Useful for checking flags, or for previewing another host with
    /// --host-os.
    Command(CommandArgs),

    /// Launch an artifact that was built earlier
    Open(OpenArgs),

    /// Write a starter kiln.config.json in the current directory
    Init(InitArgs),

    /// Print the JSON schema of kiln.config.json
    Schema,
}

/// Options shared by run, build and command
#[derive(Args, Debug, Clone, Default)]
pub struct BuildOptions {
    /// C++ source files to compile
    ///
    /// Examples:
    ///   kiln run main.cpp
    ///   kiln build src/main.cpp src/net.cpp --with networking
    #[arg(value_name = "SOURCE")]
    pub sources: Vec<PathBuf>,

    /// Build target (native executable or browser bundle)
    #[arg(long, value_enum)]
    pub target: Option<TargetArg>,

    /// Library to link (repeatable)
    #[arg(short = 'w', long = "with", value_enum, value_name = "DEP")]
    pub with: Vec<DependencyArg>,

    /// Define USE_DEBUG
    #[arg(long)]
    pub debug: bool,

    /// Optimization level (0, 1, 2, 3, s, z, g)
    #[arg(short = 'O', long = "opt-level", value_name = "LEVEL", value_parser = parse_opt_level)]
    pub opt_level: Option<String>,

    /// Extra preprocessor macro, NAME or NAME=VALUE (repeatable)
    #[arg(short = 'D', long = "define", value_name = "NAME", value_parser = parse_define)]
    pub defines: Vec<String>,

    /// Output directory for the artifact [default: <project>/bin]
    #[arg(short = 'd', long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Directory holding the bundled toolchains and libraries [default: <project>/deps]
    #[arg(long, value_name = "DIR")]
    pub deps_dir: Option<PathBuf>,

    /// Compiler to use instead of the platform default
    #[arg(long, value_name = "PATH")]
    pub compiler: Option<String>,

    /// Path to kiln.config.json
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Port for serving browser builds [default: 8000]
    #[arg(long)]
    pub port: Option<u16>,
}

/// Arguments for the command subcommand
#[derive(Args, Debug, Clone)]
pub struct CommandArgs {
    #[command(flatten)]
    pub build: BuildOptions,

    /// Generate flags for another host OS instead of this one
    #[arg(long, value_enum, value_name = "OS")]
    pub host_os: Option<HostOsArg>,
}

/// Arguments for the open command
#[derive(Args, Debug, Clone)]
pub struct OpenArgs {
    /// Artifact to launch (.exe, .out or .html)
    #[arg(value_name = "ARTIFACT")]
    pub artifact: PathBuf,

    /// Port for serving .html artifacts
    #[arg(long, default_value_t = kiln_core::DEFAULT_PORT)]
    pub port: u16,
}

/// Arguments for the init command
#[derive(Args, Debug, Clone, Default)]
pub struct InitArgs {
    /// Overwrite an existing kiln.config.json
    #[arg(long)]
    pub force: bool,
}
