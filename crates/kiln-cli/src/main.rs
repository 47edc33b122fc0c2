//! kiln CLI entry point.
//!
//! Parses arguments, initializes logging and colors, then dispatches to the
//! command. `kiln-core` starts its own runtime for serving browser builds,
//! so `main` stays synchronous.

use clap::Parser;
use kiln_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Run(opts) => commands::run_execute(opts),
        cli::Command::Build(opts) => commands::build_execute(opts),
        cli::Command::Command(cmd_args) => commands::command_execute(cmd_args),
        cli::Command::Open(open_args) => commands::open_execute(open_args),
        cli::Command::Init(init_args) => commands::init_execute(init_args),
        cli::Command::Schema => commands::schema_execute(),
    };

    result.map_err(error::cli_error_to_miette)
}
