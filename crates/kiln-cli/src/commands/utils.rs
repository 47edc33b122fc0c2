//! Shared helpers for command implementations.
//!
//! - Configuration loading and validation
//! - Source validation
//! - Assembling a `BuildSetup` from a loaded config
//! - Compile status and reporting how a launched artifact ended

use std::path::{Path, PathBuf};

use kiln_core::{
    BuildRunner, BuildSetup, FlagKind, Invocation, PlatformTarget, SetupOptions, SystemHost,
    WorkingDir,
};

use crate::cli::BuildOptions;
use crate::config::KilnConfig;
use crate::error::{CliError, Result};
use crate::ui;

/// The process working directory.
pub fn current_dir() -> Result<PathBuf> {
    Ok(std::env::current_dir()?)
}

/// Load and validate configuration for a build-like command.
pub fn load_config(args: &BuildOptions, cwd: &Path) -> Result<KilnConfig> {
    let config = KilnConfig::load(args, cwd)?;
    config.validate()?;
    Ok(config)
}

/// Check that every source file exists.
pub fn validate_sources(sources: &[PathBuf], cwd: &Path) -> Result<()> {
    for source in sources {
        let path = crate::config::resolve_path(source, cwd);
        if !path.is_file() {
            return Err(CliError::SourceNotFound(source.clone()));
        }
    }
    Ok(())
}

/// Build the compiler invocation described by `config`.
///
/// `platform` overrides host detection (used by `kiln command --host-os`).
pub fn assemble(config: &KilnConfig, platform: Option<PlatformTarget>) -> Result<BuildSetup> {
    let options = SetupOptions {
        output_dir: config.out_dir.clone(),
        deps_dir: config.deps_dir.clone(),
        target: config.target.into(),
        platform,
        compiler: config.compiler.clone(),
        anchor: config.anchor().map(Path::to_path_buf),
    };

    let mut setup = BuildSetup::new(&config.sources, options)?;
    for dependency in &config.dependencies {
        setup.include((*dependency).into())?;
    }
    if let Some(level) = &config.opt_level {
        setup.optimization_level(level)?;
    }
    if config.debug {
        setup.enable_debug();
    }
    for define in &config.defines {
        setup.define(define.as_str());
    }

    tracing::debug!(platform = %setup.platform(), flags = setup.flags().len(), "assembled build");
    Ok(setup)
}

/// Runner on the real host, rooted at `cwd`.
pub fn system_runner(cwd: &Path, port: u16) -> BuildRunner {
    BuildRunner::new(SystemHost::default(), WorkingDir::new(cwd)).with_port(port)
}

/// Status line printed once before the compiler starts.
pub fn compile_message(setup: &BuildSetup) -> String {
    let sources = setup.slot(FlagKind::Source).len();
    format!("Compiling {sources} source(s) for {}...", setup.platform())
}

/// Print the compile status line unless output is quiet.
///
/// The compiler writes to the same stderr, so nothing is redrawn while it
/// runs.
pub fn announce_compile(setup: &BuildSetup) {
    if tracing::enabled!(tracing::Level::INFO) {
        ui::info(&compile_message(setup));
    }
}

/// Print how a launched artifact ended.
///
/// Missing and unsupported artifacts are already logged as warnings by the
/// runner.
pub fn report_invocation(invocation: Invocation) {
    match invocation {
        Invocation::Served { port } => {
            ui::success(&format!("Stopped serving on port {port}"));
        }
        Invocation::Exited { code: Some(code) } if code != 0 => {
            ui::warning(&format!("Program exited with code {code}"));
        }
        Invocation::Exited { code: None } => {
            ui::warning("Program was terminated by a signal");
        }
        Invocation::Exited { .. } | Invocation::Missing | Invocation::Unsupported => {}
    }
}
