//! Run command implementation.
//!
//! `kiln run` compiles like `kiln build` and then launches the artifact:
//! native programs run in the terminal, browser bundles are served on
//! localhost until Ctrl+C.

use crate::cli::BuildOptions;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;
use std::time::Instant;

/// Execute the run command.
pub fn execute(args: BuildOptions) -> Result<()> {
    let start_time = Instant::now();
    let cwd = utils::current_dir()?;

    let config = utils::load_config(&args, &cwd)?;
    utils::validate_sources(&config.sources, &cwd)?;

    let setup = utils::assemble(&config, None)?;
    let runner = utils::system_runner(&cwd, config.port);

    utils::announce_compile(&setup);
    runner.build(&setup)?;
    ui::success(&format!(
        "Build successful ({})",
        ui::format_duration(start_time.elapsed())
    ));

    ui::info(&format!("Launching {}", setup.output_file().display()));
    let invocation = runner.invoke_artifact(setup.output_file())?;
    utils::report_invocation(invocation);
    Ok(())
}
