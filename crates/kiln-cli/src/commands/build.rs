//! Build command implementation.
//!
//! This module implements the `kiln build` command, which compiles the
//! sources into a native executable or a browser bundle without launching it.

use crate::cli::BuildOptions;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;
use std::time::Instant;

/// Execute the build command.
///
/// # Build Process
///
/// 1. Load and validate configuration (CLI > Env > File > Defaults)
/// 2. Validate source files
/// 3. Synthesize the compiler command
/// 4. Compile through the host shell
/// 5. Display the artifact path
///
/// # Errors
///
/// Returns errors for:
/// - Invalid configuration
/// - Missing source files
/// - Unsupported platform or dependency combinations
/// - Compiler failures
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
        "Built {} in {}",
        setup.output_file().display(),
        ui::format_duration(start_time.elapsed())
    ));
    Ok(())
}
