//! The build command assembler.
//!
//! [`BuildSetup`] owns the typed flag list for one build. It is created from
//! the source files, extended through the fluent inclusion methods and
//! serialized by [`BuildSetup::generate_command`]. Generation does not consume
//! or freeze the setup; regenerating reflects the latest state.
//!
//! ```
//! use kiln_core::{BuildSetup, HostOs, PlatformTarget, SetupOptions, Target};
//!
//! let mut setup = BuildSetup::new(
//!     ["main.cpp"],
//!     SetupOptions {
//!         platform: Some(PlatformTarget::new(HostOs::Linux, Target::Native)),
//!         output_dir: Some("/work/bin".into()),
//!         deps_dir: Some("/work/deps".into()),
//!         ..SetupOptions::default()
//!     },
//! )?;
//! setup.include_graphics_library()?;
//!
//! assert_eq!(
//!     setup.generate_command(),
//!     r#"g++ "main.cpp" -I"/usr/include" -lSDL2 -lSDL2_image -lGL -lSDL2_image -o "/work/bin/run.out""#
//! );
//! # Ok::<(), kiln_core::Error>(())
//! ```

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::flags::{Flag, FlagKind, render_command};
use crate::packs::Dependency;
use crate::path::{join, normalize_separators, resolve_ancestor};
use crate::platform::{PlatformTarget, Target};

/// Macro defined by [`BuildSetup::enable_debug`].
pub const DEBUG_MACRO: &str = "USE_DEBUG";

/// Accepted `-O` levels.
pub const OPTIMIZATION_LEVELS: [&str; 7] = ["0", "1", "2", "3", "s", "z", "g"];

/// Optional inputs to [`BuildSetup::new`].
#[derive(Debug, Clone, Default)]
pub struct SetupOptions {
    /// Directory the artifact is written to (default `<anchor>/bin`)
    pub output_dir: Option<PathBuf>,
    /// Root of the bundled third-party trees (default `<anchor>/deps`)
    pub deps_dir: Option<PathBuf>,
    /// Build target, used when `platform` is not given
    pub target: Target,
    /// Explicit platform, skipping host detection
    pub platform: Option<PlatformTarget>,
    /// Compiler override, replacing the platform default
    pub compiler: Option<String>,
    /// File whose directory anchors the default `bin/` and `deps/`
    /// (default: the current directory)
    pub anchor: Option<PathBuf>,
}

/// Ordered compiler invocation for one build.
#[derive(Debug, Clone)]
pub struct BuildSetup {
    platform: PlatformTarget,
    deps_dir: String,
    output_file: PathBuf,
    flags: Vec<Flag>,
}

impl BuildSetup {
    /// Resolve the platform, compiler and output path for `sources`.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedPlatform`] when the host cannot be detected as
    ///   Windows or Linux, or has no default output file name
    /// - [`Error::Path`] / [`Error::Io`] when the anchor cannot be resolved
    pub fn new<I, S>(sources: I, options: SetupOptions) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        let platform = match options.platform {
            Some(platform) => platform,
            None => PlatformTarget::detect(options.target)?,
        };

        let anchor_dir = match &options.anchor {
            Some(anchor) => resolve_ancestor(anchor, 0)?,
            None => normalize_separators(std::env::current_dir()?),
        };

        let deps_dir = options
            .deps_dir
            .map(normalize_separators)
            .unwrap_or_else(|| join(&anchor_dir, "deps"));
        let output_dir = options
            .output_dir
            .map(normalize_separators)
            .unwrap_or_else(|| join(&anchor_dir, "bin"));
        let output_file = join(&output_dir, platform.default_output_file_name()?);

        let compiler = options
            .compiler
            .unwrap_or_else(|| platform.default_compiler_path(&deps_dir));

        let mut flags = vec![Flag::new(FlagKind::Compiler, compiler)];
        flags.extend(
            sources
                .into_iter()
                .map(|source| Flag::new(FlagKind::Source, normalize_separators(source))),
        );
        flags.push(Flag::new(FlagKind::Output, output_file.clone()));

        tracing::debug!(%platform, deps_dir = %deps_dir, output_file = %output_file, "build setup created");

        Ok(Self {
            platform,
            deps_dir,
            output_file: PathBuf::from(output_file),
            flags,
        })
    }

    /// Add SDL2/SDL2_image/OpenGL flags for the current platform.
    pub fn include_graphics_library(&mut self) -> Result<&mut Self> {
        self.include(Dependency::Graphics)
    }

    /// Add asio flags for the current platform.
    ///
    /// Fails with [`Error::UnsupportedDependency`] for browser targets and
    /// leaves the setup unchanged.
    pub fn include_networking_library(&mut self) -> Result<&mut Self> {
        self.include(Dependency::Networking)
    }

    /// Merge the flag pack of `dependency`.
    ///
    /// The pack is computed before anything is merged, so a rejected
    /// dependency never leaves partial flags behind.
    pub fn include(&mut self, dependency: Dependency) -> Result<&mut Self> {
        let pack = dependency.pack(self.platform, &self.deps_dir)?;
        tracing::debug!(%dependency, platform = %self.platform, "including dependency flags");
        self.flags.extend(pack.into_flags());
        Ok(self)
    }

    /// Define `USE_DEBUG`.
    ///
    /// Calling this twice defines the macro twice.
    pub fn enable_debug(&mut self) -> &mut Self {
        self.define(DEBUG_MACRO)
    }

    /// Append a `-D NAME` macro.
    pub fn define(&mut self, name: impl Into<String>) -> &mut Self {
        self.flags.push(Flag::new(FlagKind::Macro, name));
        self
    }

    /// Set the `-O` level, replacing any earlier one.
    pub fn optimization_level(&mut self, level: &str) -> Result<&mut Self> {
        if !OPTIMIZATION_LEVELS.contains(&level) {
            return Err(Error::InvalidOptimization(level.to_string()));
        }
        self.flags.retain(|flag| flag.kind() != FlagKind::Optimization);
        self.flags.push(Flag::new(FlagKind::Optimization, level));
        Ok(self)
    }

    /// Serialize the flags into one command line, slots 1 to 9.
    pub fn generate_command(&self) -> String {
        render_command(&self.flags)
    }

    pub fn platform(&self) -> PlatformTarget {
        self.platform
    }

    pub fn deps_dir(&self) -> &str {
        &self.deps_dir
    }

    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    /// Compiler executable (slot 1).
    pub fn compiler(&self) -> &str {
        self.flags
            .iter()
            .find(|flag| flag.kind() == FlagKind::Compiler)
            .map(Flag::value)
            .unwrap_or_default()
    }

    /// Flags in insertion order.
    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }

    /// Values of one slot, in insertion order.
    pub fn slot(&self, kind: FlagKind) -> Vec<&str> {
        self.flags
            .iter()
            .filter(|flag| flag.kind() == kind)
            .map(Flag::value)
            .collect()
    }
}
