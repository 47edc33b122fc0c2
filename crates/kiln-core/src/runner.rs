//! Build execution and artifact invocation.
//!
//! [`BuildRunner`] removes a stale artifact, runs the synthesized command
//! through the host shell and then launches whatever was produced. Every side
//! effect goes through the [`Host`] trait, so the runner can be driven by a
//! recording fake in tests.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use crate::error::{Error, Result};
use crate::platform::HostOs;
use crate::server::{self, DEFAULT_PORT};
use crate::setup::BuildSetup;

/// Directory an external process runs in.
///
/// Passed explicitly to every host call; the process-wide current directory
/// is never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingDir(PathBuf);

impl WorkingDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// The directory the process was started in.
    pub fn current() -> Result<Self> {
        Ok(Self(std::env::current_dir()?))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// `path` if absolute, otherwise `path` joined onto this directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.0.join(path)
        }
    }
}

/// How an external process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessExit {
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
}

impl ProcessExit {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<ExitStatus> for ProcessExit {
    fn from(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// Program and arguments that run a command line through the host shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellInvocation {
    pub program: &'static str,
    pub args: Vec<String>,
}

impl ShellInvocation {
    pub fn to_command(&self, dir: &WorkingDir) -> Command {
        let mut command = Command::new(self.program);
        command.args(&self.args).current_dir(dir.path());
        command
    }
}

/// Wrap `command` for the shell of `os`.
///
/// PowerShell treats a leading quoted string as an expression rather than a
/// program, so commands that start with `"` get the call operator `& `.
pub fn shell_invocation(os: HostOs, command: &str) -> ShellInvocation {
    match os {
        HostOs::Windows => {
            let command = if command.starts_with('"') {
                format!("& {command}")
            } else {
                command.to_string()
            };
            ShellInvocation {
                program: "powershell",
                args: vec!["-NoProfile".to_string(), "-Command".to_string(), command],
            }
        }
        HostOs::Linux | HostOs::Other => ShellInvocation {
            program: "sh",
            args: vec!["-c".to_string(), command.to_string()],
        },
    }
}

/// External services the runner depends on.
pub trait Host: Send + Sync + fmt::Debug {
    /// Run a full command line through the shell and wait for it.
    fn run_shell(&self, command: &str, dir: &WorkingDir) -> Result<ProcessExit>;

    /// Run an executable with an inherited terminal and wait for it.
    fn run_program(&self, program: &Path, dir: &WorkingDir) -> Result<ProcessExit>;

    /// Open `url` in the default browser.
    fn open_url(&self, url: &str) -> io::Result<()>;

    /// Serve `root` on `port`, show `page` once listening, block until
    /// interrupted.
    fn serve(&self, root: &WorkingDir, port: u16, page: &str) -> Result<()>;
}

/// [`Host`] backed by real processes, sockets and the desktop browser.
#[derive(Debug, Clone, Copy)]
pub struct SystemHost {
    os: HostOs,
}

impl SystemHost {
    pub fn new(os: HostOs) -> Self {
        Self { os }
    }

    pub fn os(&self) -> HostOs {
        self.os
    }
}

impl Default for SystemHost {
    fn default() -> Self {
        Self::new(HostOs::current())
    }
}

impl Host for SystemHost {
    fn run_shell(&self, command: &str, dir: &WorkingDir) -> Result<ProcessExit> {
        let invocation = shell_invocation(self.os, command);
        let status = invocation
            .to_command(dir)
            .status()
            .map_err(|source| Error::Launch {
                command: invocation.program.to_string(),
                source,
            })?;
        Ok(status.into())
    }

    fn run_program(&self, program: &Path, dir: &WorkingDir) -> Result<ProcessExit> {
        let status = Command::new(program)
            .current_dir(dir.path())
            .status()
            .map_err(|source| Error::Launch {
                command: program.display().to_string(),
                source,
            })?;
        Ok(status.into())
    }

    fn open_url(&self, url: &str) -> io::Result<()> {
        let mut command = match self.os {
            HostOs::Windows => {
                let mut command = Command::new("cmd");
                command.args(["/C", "start", url]);
                command
            }
            _ if cfg!(target_os = "macos") => {
                let mut command = Command::new("open");
                command.arg(url);
                command
            }
            _ => {
                let mut command = Command::new("xdg-open");
                command.arg(url);
                command
            }
        };
        command.spawn().map(drop)
    }

    fn serve(&self, root: &WorkingDir, port: u16, page: &str) -> Result<()> {
        server::serve_directory(root.path(), port, |addr| {
            let url = server::page_url(addr, page);
            tracing::info!("serving {url} (press Ctrl+C to stop)");
            if let Err(e) = self.open_url(&url) {
                tracing::warn!("failed to open browser: {e}");
            }
        })
    }
}

/// What [`BuildRunner::invoke_artifact`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    /// No artifact at the given path
    Missing,
    /// Browser artifact served until interrupted
    Served { port: u16 },
    /// Native artifact ran to completion
    Exited { code: Option<i32> },
    /// Extension with no known launcher
    Unsupported,
}

/// Runs builds and launches artifacts through a [`Host`].
#[derive(Debug)]
pub struct BuildRunner<H = SystemHost> {
    host: H,
    work_dir: WorkingDir,
    port: u16,
}

impl<H: Host> BuildRunner<H> {
    pub fn new(host: H, work_dir: WorkingDir) -> Self {
        Self {
            host,
            work_dir,
            port: DEFAULT_PORT,
        }
    }

    /// Port used to serve browser artifacts.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Compile `setup`.
    ///
    /// A previous artifact is deleted before the compiler runs, so a failed
    /// build never leaves a stale one behind.
    ///
    /// # Errors
    ///
    /// - [`Error::Launch`] when the shell cannot be started
    /// - [`Error::BuildFailed`] when the compiler exits unsuccessfully
    pub fn build(&self, setup: &BuildSetup) -> Result<()> {
        let output = self.work_dir.resolve(setup.output_file());
        remove_stale_artifact(&output)?;
        if let Some(parent) = output.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let command = setup.generate_command();
        tracing::info!("{command}");

        let exit = self.host.run_shell(&command, &self.work_dir)?;
        if !exit.success() {
            return Err(Error::BuildFailed { code: exit.code });
        }

        tracing::debug!(output = %output.display(), "build finished");
        Ok(())
    }

    /// Compile `setup`, then launch its artifact.
    pub fn build_and_run(&self, setup: &BuildSetup) -> Result<Invocation> {
        self.build(setup)?;
        self.invoke_artifact(setup.output_file())
    }

    /// Launch a previously built artifact.
    ///
    /// A missing artifact or unknown extension is reported and skipped rather
    /// than treated as an error.
    pub fn invoke_artifact(&self, artifact: &Path) -> Result<Invocation> {
        let path = std::path::absolute(self.work_dir.resolve(artifact))?;
        if !path.is_file() {
            tracing::warn!("file does not exist: {}", path.display());
            return Ok(Invocation::Missing);
        }

        let dir = WorkingDir::new(path.parent().unwrap_or(self.work_dir.path()));
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("html") => {
                let page = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                self.host.serve(&dir, self.port, &page)?;
                Ok(Invocation::Served { port: self.port })
            }
            Some("exe") | Some("out") => {
                tracing::debug!(artifact = %path.display(), "running artifact");
                let exit = self.host.run_program(&path, &dir)?;
                Ok(Invocation::Exited { code: exit.code })
            }
            _ => {
                tracing::warn!("unsupported file type: {}", path.display());
                Ok(Invocation::Unsupported)
            }
        }
    }
}

fn remove_stale_artifact(path: &Path) -> Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "removed previous artifact");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
