//! `kiln command`: print the synthesized compiler command line.
//!
//! The command goes to stdout on its own line so it can be piped or pasted
//! into a build script. Sources are not required to exist.

use crate::cli::CommandArgs;
use crate::commands::utils;
use crate::error::Result;
use kiln_core::PlatformTarget;

/// Execute the command subcommand.
pub fn execute(args: CommandArgs) -> Result<()> {
    let cwd = utils::current_dir()?;
    let config = utils::load_config(&args.build, &cwd)?;

    let platform = args
        .host_os
        .map(|os| PlatformTarget::new(os.into(), config.target.into()));
    let setup = utils::assemble(&config, platform)?;

    println!("{}", setup.generate_command());
    Ok(())
}
