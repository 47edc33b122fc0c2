//! Error types for command synthesis and execution.
//!
//! Configuration-time errors (`UnsupportedPlatform`, `UnsupportedDependency`,
//! `Path`) are raised synchronously by the operation that detects them, before
//! any shell command runs. Execution-time errors distinguish a compiler that
//! could not be started (`Launch`) from one that ran and failed (`BuildFailed`).

use std::path::PathBuf;

use thiserror::Error;

use crate::packs::Dependency;
use crate::platform::{HostOs, Target};

/// Result type alias using the core [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced by kiln-core.
#[derive(Debug, Error)]
pub enum Error {
    /// The host OS (or the OS/target combination) has no flag mapping.
    #[error("unsupported platform: {os} ({target})")]
    UnsupportedPlatform {
        /// Host operating system
        os: HostOs,
        /// Requested target
        target: Target,
    },

    /// A dependency pack has no implementation for the requested target.
    #[error("{dependency} is not supported for the {target} target")]
    UnsupportedDependency {
        /// Dependency that rejected the target
        dependency: Dependency,
        /// Requested target
        target: Target,
    },

    /// Ancestor traversal went past the filesystem root.
    #[error("cannot go {requested} levels up from {} (depth {depth})", .path.display())]
    Path {
        /// Path the traversal started from
        path: PathBuf,
        /// Number of ancestors available
        depth: usize,
        /// Number of levels requested
        requested: usize,
    },

    /// The compiler ran and exited unsuccessfully.
    ///
    /// `code` is `None` when the process was terminated by a signal.
    #[error("build failed{}", describe_exit(.code))]
    BuildFailed {
        /// Exit code of the shell invocation
        code: Option<i32>,
    },

    /// The shell running the compiler could not be started.
    #[error("failed to launch `{command}`: {source}")]
    Launch {
        /// Program that failed to start
        command: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Optimization level outside the accepted set.
    #[error("invalid optimization level '{0}' (expected one of 0, 1, 2, 3, s, z, g)")]
    InvalidOptimization(String),

    /// Static file server failure.
    #[error("server error: {0}")]
    Server(String),

    /// I/O errors from file system operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {code}"),
        None => " (terminated by signal)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_failed_message_with_code() {
        let err = Error::BuildFailed { code: Some(1) };
        assert_eq!(err.to_string(), "build failed with exit code 1");
    }

    #[test]
    fn test_build_failed_message_signal() {
        let err = Error::BuildFailed { code: None };
        assert!(err.to_string().contains("signal"));
    }

    #[test]
    fn test_unsupported_dependency_message() {
        let err = Error::UnsupportedDependency {
            dependency: Dependency::Networking,
            target: Target::Browser,
        };
        let msg = err.to_string();
        assert!(msg.contains("networking"));
        assert!(msg.contains("browser"));
    }

    #[test]
    fn test_path_error_message() {
        let err = Error::Path {
            path: PathBuf::from("/a/b"),
            depth: 2,
            requested: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("/a/b"));
        assert!(msg.contains("5 levels"));
    }
}
