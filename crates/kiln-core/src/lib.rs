//! # kiln-core
//!
//! Compiler command synthesis and execution for small C++ programs targeting
//! a native executable or the browser (emscripten).
//!
//! ## Overview
//!
//! - **Platform**: the host OS and target are resolved once into a
//!   [`PlatformTarget`] and passed around explicitly
//! - **Flag packs**: each [`Dependency`] maps to the settings, include paths,
//!   library paths and library files it needs on a given platform
//! - **Assembler**: [`BuildSetup`] keeps a typed flag list and serializes it in
//!   a fixed slot order
//! - **Runner**: [`BuildRunner`] compiles through the host shell and launches
//!   the artifact, serving browser builds over HTTP
//!
//! ```text
//!  sources ──► BuildSetup::new ──► include_*() ──► generate_command()
//!                  │                                      │
//!            PlatformTarget                          BuildRunner
//!                                                   build ─► invoke_artifact
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kiln_core::{BuildRunner, BuildSetup, SetupOptions, SystemHost, Target, WorkingDir};
//!
//! # fn main() -> kiln_core::Result<()> {
//! let mut setup = BuildSetup::new(
//!     ["src/main.cpp"],
//!     SetupOptions {
//!         target: Target::Native,
//!         ..SetupOptions::default()
//!     },
//! )?;
//! setup.include_graphics_library()?.enable_debug();
//!
//! let runner = BuildRunner::new(SystemHost::default(), WorkingDir::current()?);
//! runner.build_and_run(&setup)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod flags;
pub mod packs;
pub mod path;
pub mod platform;
pub mod runner;
pub mod server;
pub mod setup;

pub use error::{Error, Result};
pub use flags::{Flag, FlagKind, render_command};
pub use packs::{Dependency, FlagPack};
pub use path::{normalize_separators, resolve_ancestor};
pub use platform::{HostOs, PlatformTarget, Target};
pub use runner::{
    BuildRunner, Host, Invocation, ProcessExit, ShellInvocation, SystemHost, WorkingDir,
    shell_invocation,
};
pub use server::{DEFAULT_PORT, page_url, serve_directory};
pub use setup::{BuildSetup, DEBUG_MACRO, OPTIMIZATION_LEVELS, SetupOptions};
