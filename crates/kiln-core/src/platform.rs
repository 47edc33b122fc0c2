//! Host and target resolution.
//!
//! The host OS is read once when a [`PlatformTarget`] is detected and the
//! resulting value is threaded through every component explicitly; nothing
//! downstream queries the OS again.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::join;

/// Native compiler used when no bundled toolchain applies.
pub const SYSTEM_COMPILER: &str = "g++";

/// Host operating system, collapsed to the cases kiln has mappings for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostOs {
    Windows,
    Linux,
    Other,
}

impl HostOs {
    /// The OS this binary was compiled for.
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` style name.
    pub fn from_os_name(name: &str) -> Self {
        match name {
            "windows" => HostOs::Windows,
            "linux" => HostOs::Linux,
            _ => HostOs::Other,
        }
    }
}

impl fmt::Display for HostOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HostOs::Windows => "windows",
            HostOs::Linux => "linux",
            HostOs::Other => "other",
        })
    }
}

/// What the compiled program runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Platform executable built with the native GCC-compatible compiler
    #[default]
    Native,
    /// WebAssembly/HTML bundle built with the emscripten toolchain
    Browser,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Target::Native => "native",
            Target::Browser => "browser",
        })
    }
}

/// Resolved `(host OS, target)` pair driving all platform-conditional logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlatformTarget {
    os: HostOs,
    target: Target,
}

impl PlatformTarget {
    /// Build a platform value directly.
    ///
    /// Unlike [`PlatformTarget::detect`] this accepts [`HostOs::Other`], which
    /// lets callers preview the flags another host would get.
    pub const fn new(os: HostOs, target: Target) -> Self {
        Self { os, target }
    }

    /// Detect the host OS and pair it with `target`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedPlatform`] on any host other than Windows
    /// or Linux.
    pub fn detect(target: Target) -> Result<Self> {
        let platform = Self::resolve(HostOs::current(), target)?;
        tracing::debug!(os = %platform.os, target = %platform.target, "detected platform");
        Ok(platform)
    }

    /// Validate an `(os, target)` pair the same way [`PlatformTarget::detect`] does.
    pub fn resolve(os: HostOs, target: Target) -> Result<Self> {
        match os {
            HostOs::Windows | HostOs::Linux => Ok(Self::new(os, target)),
            HostOs::Other => Err(Error::UnsupportedPlatform { os, target }),
        }
    }

    pub fn os(&self) -> HostOs {
        self.os
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn is_browser(&self) -> bool {
        self.target == Target::Browser
    }

    /// Compiler for this platform.
    ///
    /// Native Windows uses the bundled MinGW `g++`, other native hosts use
    /// the system `g++` from the search path, and browser builds use the
    /// bundled emscripten `em++` launcher (`em++.bat` on Windows).
    pub fn default_compiler_path(&self, deps_dir: &str) -> String {
        match (self.target, self.os) {
            (Target::Native, HostOs::Windows) => join(deps_dir, "mingw64/bin/g++"),
            (Target::Native, _) => SYSTEM_COMPILER.to_string(),
            (Target::Browser, HostOs::Windows) => {
                join(deps_dir, "emsdk/upstream/emscripten/em++.bat")
            }
            (Target::Browser, _) => join(deps_dir, "emsdk/upstream/emscripten/em++"),
        }
    }

    /// File name of the build artifact.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedPlatform`] for native builds on
    /// [`HostOs::Other`].
    pub fn default_output_file_name(&self) -> Result<&'static str> {
        match (self.target, self.os) {
            (Target::Browser, _) => Ok("run.html"),
            (Target::Native, HostOs::Windows) => Ok("run.exe"),
            (Target::Native, HostOs::Linux) => Ok("run.out"),
            (Target::Native, HostOs::Other) => Err(Error::UnsupportedPlatform {
                os: self.os,
                target: self.target,
            }),
        }
    }
}

impl fmt::Display for PlatformTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.target)
    }
}
