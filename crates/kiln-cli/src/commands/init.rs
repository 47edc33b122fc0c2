//! Init command implementation.
//!
//! Writes a starter `kiln.config.json` into the current directory.

use crate::cli::InitArgs;
use crate::commands::utils;
use crate::config::{CONFIG_FILE_NAME, KilnConfig};
use crate::error::{CliError, Result};
use crate::ui;
use std::fs;
use std::path::Path;

/// Execute the init command.
///
/// # Errors
///
/// Returns errors for:
/// - An existing config file without `--force`
/// - File write failures
pub fn execute(args: InitArgs) -> Result<()> {
    let cwd = utils::current_dir()?;
    let path = write_config(&cwd, args.force)?;

    ui::success(&format!("Created {}", path.display()));
    ui::info("Next: kiln run");
    Ok(())
}

fn write_config(dir: &Path, force: bool) -> Result<std::path::PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.exists() && !force {
        return Err(CliError::InvalidArgument(format!(
            "{CONFIG_FILE_NAME} already exists; pass --force to overwrite"
        )));
    }

    let mut content = KilnConfig::example_config()?;
    content.push('\n');
    fs::write(&path, content)?;
    Ok(path)
}
