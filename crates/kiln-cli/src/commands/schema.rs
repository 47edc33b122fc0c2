//! `kiln schema`: print the JSON schema of `kiln.config.json`.
//!
//! Point an editor's `$schema` at the output for completion and validation.

use crate::config::KilnConfig;
use crate::error::Result;

/// Execute the schema command.
pub fn execute() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&KilnConfig::json_schema())?);
    Ok(())
}
