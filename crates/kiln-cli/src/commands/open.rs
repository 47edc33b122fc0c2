//! `kiln open`: launch an artifact built earlier.

use crate::cli::OpenArgs;
use crate::commands::utils;
use crate::error::Result;

/// Execute the open command.
///
/// A missing artifact or an unknown extension is reported as a warning and
/// the command still succeeds.
pub fn execute(args: OpenArgs) -> Result<()> {
    let cwd = utils::current_dir()?;
    let runner = utils::system_runner(&cwd, args.port);

    let invocation = runner.invoke_artifact(&args.artifact)?;
    utils::report_invocation(invocation);
    Ok(())
}
