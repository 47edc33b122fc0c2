use crate::cli::BuildOptions;
use crate::config::{BuildTarget, DependencyName, KilnConfig, default_port};
use crate::error::{ConfigError, Result};
use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when --config is not given.
pub const CONFIG_FILE_NAME: &str = "kiln.config.json";

/// Environment variables read as `KILN_<KEY>`.
const ENV_KEYS: [&str; 6] = ["target", "debug", "port", "out_dir", "deps_dir", "compiler"];

/// Provider for the `KILN_*` variables, keyed like the config file
/// (`KILN_OUT_DIR` -> `outDir`) so it merges over file and CLI values.
fn env_provider() -> Env {
    Env::prefixed("KILN_")
        .only(&ENV_KEYS)
        .lowercase(false)
        .map(|key| camel_case_key(key.as_str()).into())
}

fn camel_case_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper = false;
    for c in key.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            out.push(c.to_ascii_lowercase());
        }
    }
    out
}

/// Values given on the command line; unset flags are left out so they do not
/// mask the config file.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct CliOverrides {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    sources: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<BuildTarget>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    dependencies: Vec<DependencyName>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    debug: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    opt_level: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    defines: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    out_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deps_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    compiler: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    port: Option<u16>,
}

impl From<&BuildOptions> for CliOverrides {
    fn from(args: &BuildOptions) -> Self {
        Self {
            sources: args.sources.clone(),
            target: args.target.map(Into::into),
            dependencies: args.with.iter().copied().map(Into::into).collect(),
            debug: args.debug,
            opt_level: args.opt_level.clone(),
            defines: args.defines.clone(),
            out_dir: args.out_dir.clone(),
            deps_dir: args.deps_dir.clone(),
            compiler: args.compiler.clone(),
            port: args.port,
        }
    }
}

impl KilnConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > environment variables > config file > defaults
    ///
    /// Relative paths from the config file are resolved against the file's
    /// directory; relative paths from flags or the environment stay relative
    /// to `cwd`.
    pub fn load(args: &BuildOptions, cwd: &Path) -> Result<Self> {
        let config_file = locate_config(args.config.as_deref(), cwd)?;

        let mut figment = Figment::new().merge(Serialized::defaults(Self::default_config()));

        if let Some(path) = &config_file {
            tracing::debug!(path = %path.display(), "loading config file");
            figment = figment.merge(Json::file(path));
        }

        // KILN_TARGET, KILN_PORT, KILN_OUT_DIR, ...
        figment = figment.merge(env_provider());
        figment = figment.merge(Serialized::defaults(CliOverrides::from(args)));

        let mut config: Self = figment.extract().map_err(|e| ConfigError::InvalidValue {
            field: if e.path.is_empty() {
                "configuration".to_string()
            } else {
                e.path.join(".")
            },
            value: e.kind.to_string(),
            hint: "Check kiln.config.json syntax and field types".to_string(),
        })?;

        config.resolve_file_paths(&figment);
        config.config_file = config_file;
        Ok(config)
    }

    /// Get default configuration values.
    pub(crate) fn default_config() -> Self {
        Self {
            sources: Vec::new(),
            target: BuildTarget::Native,
            dependencies: Vec::new(),
            debug: false,
            opt_level: None,
            defines: Vec::new(),
            out_dir: None,
            deps_dir: None,
            compiler: None,
            port: default_port(),
            config_file: None,
        }
    }

    fn resolve_file_paths(&mut self, figment: &Figment) {
        if let Some(base) = file_dir(figment, "sources") {
            for source in &mut self.sources {
                *source = resolve_path(source, &base);
            }
        }
        if let Some(base) = file_dir(figment, "outDir") {
            self.out_dir = self.out_dir.take().map(|dir| resolve_path(&dir, &base));
        }
        if let Some(base) = file_dir(figment, "depsDir") {
            self.deps_dir = self.deps_dir.take().map(|dir| resolve_path(&dir, &base));
        }
    }
}

/// Explicit `--config` path, or `kiln.config.json` in `cwd` if present.
fn locate_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            let path = resolve_path(path, cwd);
            if !path.is_file() {
                return Err(ConfigError::NotFound(path).into());
            }
            Ok(Some(path))
        }
        None => {
            let default_path = cwd.join(CONFIG_FILE_NAME);
            Ok(default_path.is_file().then_some(default_path))
        }
    }
}

/// Directory of the file that supplied `key`, if it came from a file.
fn file_dir(figment: &Figment, key: &str) -> Option<PathBuf> {
    figment
        .find_metadata(key)
        .and_then(|metadata| metadata.source.as_ref())
        .and_then(|source| source.file_path())
        .and_then(Path::parent)
        .map(Path::to_path_buf)
}

pub(crate) fn resolve_path(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_keys_map_to_file_keys() {
        assert_eq!(camel_case_key("OUT_DIR"), "outDir");
        assert_eq!(camel_case_key("deps_dir"), "depsDir");
        assert_eq!(camel_case_key("TARGET"), "target");
    }
}
