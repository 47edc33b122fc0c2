//! Configuration loading with multiple sources.
//!
//! Settings are merged from `kiln.config.json`, `KILN_*` environment
//! variables and command-line flags.
//! Priority: CLI > Environment > File > Defaults

mod conversions;
mod defaults;
mod loading;
mod tests;
mod types;
mod validation;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use defaults::*;
pub use loading::CONFIG_FILE_NAME;
pub(crate) use loading::resolve_path;
pub use types::*;

/// kiln configuration, loaded from kiln.config.json or CLI args.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct KilnConfig {
    /// C++ source files to compile (e.g., ["src/main.cpp"])
    #[serde(default)]
    pub sources: Vec<PathBuf>,

    /// Build target (native, browser)
    #[serde(default)]
    pub target: BuildTarget,

    /// Libraries to link (graphics, networking)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<DependencyName>,

    /// Define USE_DEBUG
    #[serde(default)]
    pub debug: bool,

    /// Optimization level (0, 1, 2, 3, s, z, g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opt_level: Option<String>,

    /// Extra preprocessor macros (NAME or NAME=VALUE)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub defines: Vec<String>,

    /// Artifact directory, default `bin/` next to the config file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<PathBuf>,

    /// Bundled toolchains and libraries, default `deps/` next to the config file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deps_dir: Option<PathBuf>,

    /// Compiler overriding the platform default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler: Option<String>,

    /// Port for serving browser builds
    #[serde(default = "default_port")]
    pub port: u16,

    /// Config file the values were read from
    #[serde(skip)]
    pub config_file: Option<PathBuf>,
}

impl KilnConfig {
    /// Generate JSON Schema for kiln.config.json.
    pub fn json_schema() -> serde_json::Value {
        let schema = schemars::schema_for!(KilnConfig);
        schema.to_value()
    }

    /// Generate example kiln.config.json content.
    pub fn example_config() -> crate::error::Result<String> {
        let example = Self {
            sources: vec![PathBuf::from("src/main.cpp")],
            dependencies: vec![DependencyName::Graphics],
            debug: true,
            opt_level: Some("2".to_string()),
            ..Self::default_config()
        };
        Ok(serde_json::to_string_pretty(&example)?)
    }

    /// Anchor for the default `bin/` and `deps/` directories.
    pub fn anchor(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }
}
